use std::path::PathBuf;

use clap::Parser;

/// Year-at-a-glance PDF calendar generator.
#[derive(Parser, Debug)]
#[command(
    name = "calsheet",
    version,
    about = "Generate a one-page PDF calendar for a whole year"
)]
pub struct Cli {
    /// Output PDF file.
    #[arg(value_name = "OUTPUT_FILE")]
    pub output: PathBuf,

    /// Year to generate (defaults to the current year).
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Built-in locale for month names and weekday codes (en, de, fr, es).
    #[arg(short, long, value_name = "CODE")]
    pub locale: Option<String>,

    /// JSON style file overriding colors, fonts, sizes and margins.
    #[arg(short, long, value_name = "FILE")]
    pub style: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_positional_output_and_year() {
        let cli = Cli::try_parse_from(["calsheet", "-y", "2024", "out.pdf"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("out.pdf"));
        assert_eq!(cli.year, Some(2024));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn year_is_optional_and_verbosity_counts() {
        let cli = Cli::try_parse_from(["calsheet", "cal.pdf", "-vv", "--locale", "de"]).unwrap();
        assert_eq!(cli.year, None);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.locale.as_deref(), Some("de"));
    }

    #[test]
    fn rejects_missing_output_and_bad_year() {
        assert!(Cli::try_parse_from(["calsheet"]).is_err());
        assert!(Cli::try_parse_from(["calsheet", "-y", "twenty", "out.pdf"]).is_err());
    }
}
