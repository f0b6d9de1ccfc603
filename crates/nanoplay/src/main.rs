mod commands;
mod platform;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "nanoplay",
    version,
    about = "List top-level windows and resize them to an exact size"
)]
struct Cli {
    /// Message language (en, zh, es, pt). Defaults to the config file,
    /// then the system locale.
    #[arg(long, global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a window and resize it interactively (the default)
    Session,
    /// List the windows that can be resized
    List,
    /// Resize one window and exit
    Resize(commands::resize::ResizeArgs),
    /// Create the default configuration file
    Init,
}

fn main() {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Init => commands::init::execute(),
        Commands::List => commands::list::execute(&commands::Context::load(cli.lang)),
        Commands::Resize(args) => {
            commands::resize::execute(&commands::Context::load(cli.lang), &args)
        }
        Commands::Session => commands::session::execute(&commands::Context::load(cli.lang)),
    }
}
