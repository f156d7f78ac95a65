//! Command-line interface implementation for featgen.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for featgen.
#[derive(Parser, Debug)]
#[command(author, version, about = "featgen: feature folder scaffolding for Next.js projects", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Project directory containing src/features [default: current directory]
    #[arg(short = 'C', long, value_name = "DIR", global = true)]
    pub project_dir: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Generate a new feature folder with boilerplate files
    #[command(visible_alias = "g")]
    Generate {
        /// Feature name, e.g. user-profile
        #[arg(value_name = "FEATURE_NAME")]
        name: Option<String>,
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
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingSubcommand
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
