//! Command-line interface implementation for ngforge.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};

/// Command-line arguments structure for ngforge.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "ngforge: generate a pre-configured Angular project",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Create a new Angular project in the current directory
    Create {
        /// Name of the project and of the directory it is created in
        #[arg(value_name = "PROJECT_NAME")]
        project_name: String,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if no command is given
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                let _ = Args::command().print_help();
                std::process::exit(1);
            }
            _ => e.exit(),
        },
    }
}
