use clap::Parser;

pub mod root_commands;

pub use root_commands::Commands;

/// Top-level CLI parser for the `svo` binary.
#[derive(Debug, Parser)]
#[command(name = "svo", version, about = "Summa Vision operations toolbox")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn smoke_parses_all_flags() {
        let cli = Cli::try_parse_from([
            "svo",
            "smoke",
            "--processed-dir",
            "data/processed",
            "--sql",
            "duckdb/smoke_rowcount.sql",
            "--json-report",
            "reports/smoke.json",
        ])
        .expect("cli should parse");

        let Commands::Smoke(args) = cli.command else {
            panic!("expected smoke command");
        };
        assert_eq!(args.processed_dir, Some(PathBuf::from("data/processed")));
        assert_eq!(args.sql, Some(PathBuf::from("duckdb/smoke_rowcount.sql")));
        assert_eq!(args.json_report, Some(PathBuf::from("reports/smoke.json")));
    }

    #[test]
    fn smoke_flags_are_all_optional() {
        let cli = Cli::try_parse_from(["svo", "smoke"]).expect("cli should parse");

        let Commands::Smoke(args) = cli.command else {
            panic!("expected smoke command");
        };
        assert!(args.processed_dir.is_none());
        assert!(args.sql.is_none());
        assert!(args.json_report.is_none());
    }

    #[test]
    fn baseline_parses_root_flag() {
        let cli = Cli::try_parse_from(["svo", "baseline", "--root", "/srv/repo"])
            .expect("cli should parse");

        let Commands::Baseline(args) = cli.command else {
            panic!("expected baseline command");
        };
        assert_eq!(args.root, Some(PathBuf::from("/srv/repo")));
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["svo", "--verbose", "smoke"]).expect("cli should parse");
        assert!(cli.verbose);
        assert!(!cli.quiet);
        assert!(matches!(cli.command, Commands::Smoke(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["svo", "baseline", "--quiet"]).expect("cli should parse");
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Baseline(_)));
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        let parsed = Cli::try_parse_from(["svo", "screenshot"]);
        assert!(parsed.is_err());
    }
}
