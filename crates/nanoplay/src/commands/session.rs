//! Interactive session: the terminal counterpart of a small form with a
//! window picker, width and height boxes, and Resize / Refresh buttons.

use std::io::{self, BufRead, Write};

use nanoplay_core::i18n::Message;
use nanoplay_core::{Desktop, Language, Session};

use super::Context;
use super::list;
use crate::platform;

const HELP: &str = "\
Commands:
  list              show the window list (* marks the selection)
  refresh           re-read the window list
  select <n>        select row n
  width <value>     set the width input
  height <value>    set the height input
  size <w> <h>      set both inputs
  resize            resize the selected window
  lang <code>       switch language (en, zh, es, pt)
  help              show this help
  quit              leave";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    List,
    Refresh,
    Select(usize),
    Width(String),
    Height(String),
    Size(String, String),
    Resize,
    Language(String),
    Help,
    Quit,
}

impl SessionCommand {
    /// Parses a line. Blank lines give `Ok(None)`.
    ///
    /// Width and height values are kept as typed; checking them is the
    /// resize step's job.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "list" | "ls" => Self::List,
            "refresh" | "r" => Self::Refresh,
            "select" | "s" => {
                let n = rest
                    .parse::<usize>()
                    .map_err(|_| format!("select needs a row number, got {rest:?}"))?;
                Self::Select(n)
            }
            "width" | "w" => Self::Width(rest.to_string()),
            "height" | "h" => Self::Height(rest.to_string()),
            "size" => match rest.split_whitespace().collect::<Vec<_>>().as_slice() {
                [w, h] => Self::Size(w.to_string(), h.to_string()),
                _ => return Err("size needs two values: size <w> <h>".into()),
            },
            "resize" | "go" => Self::Resize,
            "lang" => Self::Language(rest.to_string()),
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(format!("unknown command {other:?} (try help)")),
        };
        Ok(Some(command))
    }
}

pub fn execute(ctx: &Context) {
    let result = {
        // Claimed before the first refresh so our own console is filtered
        // out, and given back when this block ends.
        let _title = platform::claim_title(ctx.language.text(Message::Title));
        let mut session = ctx.open_session();
        run(&mut session, ctx.language, io::stdin().lock(), io::stdout().lock())
    };
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Reads commands until `quit` or end of input.
///
/// Refused resizes print the localized reason and leave every input as
/// it was so the user can correct it.
pub fn run<D, R, W>(
    session: &mut Session<D>,
    mut language: Language,
    input: R,
    mut out: W,
) -> io::Result<()>
where
    D: Desktop,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", language.text(Message::Title))?;
    print_state(session, language, &mut out)?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match SessionCommand::parse(&line) {
            Ok(None) => {}
            Ok(Some(SessionCommand::Quit)) => return Ok(()),
            Ok(Some(command)) => handle(session, &mut language, command, &mut out)?,
            Err(e) => writeln!(out, "{e}")?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    writeln!(out)
}

fn handle<D: Desktop, W: Write>(
    session: &mut Session<D>,
    language: &mut Language,
    command: SessionCommand,
    out: &mut W,
) -> io::Result<()> {
    match command {
        SessionCommand::List => print_state(session, *language, out)?,
        SessionCommand::Refresh => match session.refresh() {
            Ok(_) => print_state(session, *language, out)?,
            Err(e) => writeln!(out, "could not enumerate windows: {e}")?,
        },
        SessionCommand::Select(n) => {
            if !n.checked_sub(1).is_some_and(|i| session.select(i)) {
                writeln!(out, "no row {n} (1..={})", session.windows().len())?;
            } else if let Some(entry) = session.selected() {
                writeln!(out, "selected: {}", entry.title)?;
            }
        }
        SessionCommand::Width(w) => session.set_width_text(w),
        SessionCommand::Height(h) => session.set_height_text(h),
        SessionCommand::Size(w, h) => {
            session.set_width_text(w);
            session.set_height_text(h);
        }
        SessionCommand::Resize => match session.resize_selected() {
            Ok(resized) => writeln!(out, "{}", language.resized_text(&resized))?,
            Err(e) => writeln!(out, "{}", language.error_text(e))?,
        },
        SessionCommand::Language(code) => match Language::from_tag(&code) {
            Some(lang) => {
                *language = lang;
                writeln!(out, "{}", lang.display_name())?;
            }
            None => writeln!(out, "unknown language {code:?} (en, zh, es, pt)")?,
        },
        SessionCommand::Help => writeln!(out, "{HELP}")?,
        SessionCommand::Quit => {}
    }
    Ok(())
}

fn print_state<D: Desktop, W: Write>(
    session: &Session<D>,
    language: Language,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{}", list::table(session.windows(), session.selected_index()))?;
    writeln!(
        out,
        "{} {}  {} {}  [{} / {}]",
        language.text(Message::Width),
        session.width_text(),
        language.text(Message::Height),
        session.height_text(),
        language.text(Message::Resize).to_lowercase(),
        language.text(Message::Refresh).to_lowercase(),
    )
}
