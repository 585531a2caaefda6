use std::path::PathBuf;

use clap::Parser;

use crate::config::{CompareOptions, OutputFormat};

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_TIMESTAMP"),
    ")"
);

#[derive(Parser)]
#[command(
    name = "codesim",
    version,
    long_version = LONG_VERSION,
    about = "Compute similarity metrics between two files"
)]
pub struct Cli {
    /// Original code file path
    pub original: PathBuf,

    /// Converted/generated code file path
    pub converted: PathBuf,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print the scores as JSON
    #[arg(long)]
    pub json: bool,

    /// Also print a diff of the normalized lines
    #[arg(long)]
    pub diff: bool,
}

impl Cli {
    pub fn options(&self) -> CompareOptions {
        CompareOptions {
            format: if self.json { OutputFormat::Json } else { OutputFormat::Text },
            show_diff: self.diff,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_two_paths_parse() {
        let cli = Cli::try_parse_from(["codesim", "orig.asm", "conv.rs"]).unwrap();
        assert_eq!(cli.original, PathBuf::from("orig.asm"));
        assert_eq!(cli.converted, PathBuf::from("conv.rs"));
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.options().format, OutputFormat::Text);
        assert!(!cli.options().show_diff);
    }

    #[test]
    fn test_missing_path_is_rejected() {
        let err = Cli::try_parse_from(["codesim", "orig.asm"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.use_stderr());
    }

    #[test]
    fn test_no_paths_is_rejected() {
        assert!(Cli::try_parse_from(["codesim"]).is_err());
    }

    #[test]
    fn test_extra_path_is_rejected() {
        let err = Cli::try_parse_from(["codesim", "a", "b", "c"]).err().unwrap();
        assert!(err.use_stderr());
    }

    #[test]
    fn test_help_is_not_a_usage_error() {
        let err = Cli::try_parse_from(["codesim", "--help"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(!err.use_stderr());
    }

    #[test]
    fn test_flags_map_to_options() {
        let cli = Cli::try_parse_from(["codesim", "-vv", "--json", "--diff", "a", "b"]).unwrap();
        assert_eq!(cli.verbose, 2);
        let options = cli.options();
        assert_eq!(options.format, OutputFormat::Json);
        assert!(options.show_diff);
    }
}
