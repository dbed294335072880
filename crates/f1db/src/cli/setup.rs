use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.3.0"
/// Format for dev builds: "v0.3.0\ndev: abc1234 2024-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Colored text for humans
    #[default]
    Term,
    /// Machine-readable JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "f1db",
    bin_name = "f1db",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(about = "Schema-driven editor for the f1db JSON datasets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Dataset to work on: Drivers, Constructors or "Race Results" (keys work too)
    #[arg(
        short,
        long,
        global = true,
        default_value = "Drivers",
        help_heading = "Options"
    )]
    pub dataset: String,

    /// Directory holding the dataset files (overrides configuration)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputMode::Term,
        help_heading = "Options"
    )]
    pub output: OutputMode,

    /// Verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// List records with their indexes
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Only records whose name contains this (case-insensitive)
        #[arg(short, long)]
        name: Option<String>,

        /// Only records of this year
        #[arg(short, long)]
        year: Option<i64>,
    },

    /// Show one record
    #[command(alias = "v", display_order = 2)]
    Show {
        /// Index of the record (as shown by `list`)
        index: usize,
    },

    /// Show the form for a new record, or for an existing one
    #[command(display_order = 3)]
    Form {
        /// Index of the record to edit
        index: Option<usize>,
    },

    /// Add a record from field=value pairs
    #[command(alias = "n", display_order = 10)]
    Add {
        /// Field inputs, e.g. id=max-verstappen totalRaceWins=63
        #[arg(value_name = "FIELD=VALUE")]
        assignments: Vec<String>,
    },

    /// Change fields of a record
    #[command(alias = "e", display_order = 11)]
    Edit {
        /// Index of the record
        index: usize,

        /// Field inputs, e.g. totalPoints=3023.5
        #[arg(value_name = "FIELD=VALUE", required = true, num_args = 1..)]
        assignments: Vec<String>,
    },

    /// Delete a record
    #[command(alias = "rm", display_order = 12)]
    Delete {
        /// Index of the record
        index: usize,
    },

    /// Append a copy of a record
    #[command(alias = "cp", display_order = 13)]
    Duplicate {
        /// Index of the record
        index: usize,
    },

    /// Bulk import records from a JSON object or array
    #[command(display_order = 20)]
    Import {
        /// File to read (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Fail when any record is rejected (valid records are still saved)
        #[arg(long)]
        strict: bool,
    },

    /// Replace the whole dataset with a JSON document (not validated)
    #[command(display_order = 21)]
    ReplaceAll {
        /// JSON file with the new records
        file: PathBuf,
    },

    /// Write the dataset document to a file or stdout
    #[command(display_order = 22)]
    Export {
        /// Output file (stdout when omitted)
        out: Option<PathBuf>,
    },

    /// List the datasets and their files
    #[command(display_order = 30)]
    Datasets,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("f1db").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_drivers() {
        let cli = parse(&[]);
        assert_eq!(cli.dataset, "Drivers");
        assert_eq!(cli.command, None);
        assert_eq!(cli.output, OutputMode::Term);
    }

    #[test]
    fn dataset_is_global() {
        let cli = parse(&["list", "-d", "Race Results", "--year", "2021"]);
        assert_eq!(cli.dataset, "Race Results");
        assert_eq!(
            cli.command,
            Some(Commands::List {
                name: None,
                year: Some(2021)
            })
        );
    }

    #[test]
    fn edit_requires_assignments() {
        assert!(Cli::try_parse_from(["f1db", "edit", "0"]).is_err());
        let cli = parse(&["edit", "0", "abbreviation=VER", "permanentNumber=1"]);
        match cli.command {
            Some(Commands::Edit { index, assignments }) => {
                assert_eq!(index, 0);
                assert_eq!(assignments.len(), 2);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn verbosity_counts() {
        assert_eq!(parse(&["-vv", "datasets"]).verbose, 2);
    }

    #[test]
    fn import_flags() {
        let cli = parse(&["import", "--strict"]);
        assert_eq!(
            cli.command,
            Some(Commands::Import {
                file: None,
                strict: true
            })
        );
    }
}
