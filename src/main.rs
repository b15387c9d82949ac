use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::io;
use weeknote::cli::NotesArgs;
use weeknote::Result;

#[derive(Parser)]
#[command(name = "weeknote")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Rotate last week's note into the archive and start this week's",
    long_about = None
)]
#[command(propagate_version = true)]
struct Cli {
    #[command(flatten)]
    notes: NotesArgs,

    /// Rotates and creates notes when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show this week's and last week's notes without changing anything
    Status {
        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None => {
            weeknote::cli::rotate::run(&cli.notes)?;
        }

        Some(Commands::Status { json }) => {
            weeknote::cli::status::run(&cli.notes, json)?;
        }

        Some(Commands::Completions { shell }) => {
            generate(shell, &mut Cli::command(), "weeknote", &mut io::stdout());
        }
    }

    Ok(())
}
