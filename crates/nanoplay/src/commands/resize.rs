use clap::Args;

use nanoplay_core::{Desktop, ResizeError, Resized, Session};

use super::Context;

/// Arguments for the `resize` subcommand.
#[derive(Args)]
pub struct ResizeArgs {
    /// Row number from `nanoplay list` (starting at 1)
    #[arg(long)]
    index: usize,
    /// Width in pixels (defaults to the configured width)
    #[arg(long, allow_hyphen_values = true)]
    width: Option<String>,
    /// Height in pixels (defaults to the configured height)
    #[arg(long, allow_hyphen_values = true)]
    height: Option<String>,
}

pub fn execute(ctx: &Context, args: &ResizeArgs) {
    let mut session = ctx.open_session();

    match apply(&mut session, args) {
        Ok(resized) => println!("{}", ctx.language.resized_text(&resized)),
        Err(e) => {
            eprintln!("Error: {}", ctx.language.error_text(e));
            std::process::exit(1);
        }
    }
}

/// Selects row `args.index` and resizes it. An index outside the list
/// leaves nothing selected.
fn apply<D: Desktop>(
    session: &mut Session<D>,
    args: &ResizeArgs,
) -> Result<Resized, ResizeError> {
    let selected = args
        .index
        .checked_sub(1)
        .is_some_and(|i| session.select(i));
    if !selected {
        session.clear_selection();
    }
    if let Some(width) = &args.width {
        session.set_width_text(width.as_str());
    }
    if let Some(height) = &args.height {
        session.set_height_text(height.as_str());
    }
    session.resize_selected()
}
