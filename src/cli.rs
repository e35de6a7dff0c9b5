use std::path::PathBuf;

use clap::Parser;

/// Writes the sample files used to check a file previewer by hand.
#[derive(Parser, Debug)]
#[command(name = "preview-fixtures", version, about = "Generate preview test files")]
pub struct Cli {
    /// Directory to create `test_preview_files` in (defaults to the current directory).
    #[arg(value_name = "BASE")]
    pub base: Option<PathBuf>,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_no_base() {
        let cli = Cli::try_parse_from(["preview-fixtures"]).unwrap();
        assert!(cli.base.is_none());
    }

    #[test]
    fn positional_base_is_captured() {
        let cli = Cli::try_parse_from(["preview-fixtures", "/tmp/somewhere"]).unwrap();
        assert_eq!(cli.base, Some(PathBuf::from("/tmp/somewhere")));
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Cli::try_parse_from(["preview-fixtures", "--count", "3"]).is_err());
    }
}
