// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses command line arguments with clap and delegates all
// work to Layer 2 (application).
//
// Two commands are supported:
//   1. `split`   — builds folds from an image folder or list file
//   2. `inspect` — summarises and validates a saved split set

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, InspectArgs, SplitArgs};

/// Patient-grouped k-fold cross-validation splits for image datasets.
#[derive(Parser, Debug)]
#[command(name = "patient-crossval", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Split(args)   => run_split(args),
            Commands::Inspect(args) => run_inspect(args),
        }
    }
}

fn run_split(args: SplitArgs) -> Result<()> {
    use crate::application::split_use_case::SplitUseCase;

    let use_case = SplitUseCase::new(args.into());
    let splits   = use_case.execute()?;

    println!("Wrote {} folds.", splits.len());
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    use crate::application::inspect_use_case::InspectUseCase;

    let summaries = InspectUseCase::new(&args.splits_dir).execute()?;
    for s in &summaries {
        println!("{s}");
    }
    println!("All {} folds are patient-disjoint.", summaries.len());
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::split_use_case::{IdentifierSourceConfig, SplitConfig};

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("patient-crossval").chain(args.iter().copied()))
    }

    #[test]
    fn test_split_defaults() {
        let cli = parse(&["split", "--images-dir", "imgs", "--extension", "png"]).unwrap();
        let Commands::Split(args) = cli.command else { panic!("expected split") };

        let cfg: SplitConfig = args.into();
        assert_eq!(cfg.seed, 12345);
        assert_eq!(cfg.n_splits, 5);
        assert_eq!(cfg.output_dir, "splits");
        assert_eq!(
            cfg.source,
            IdentifierSourceConfig::Directory { dir: "imgs".into(), extension: Some("png".into()) }
        );
    }

    #[test]
    fn test_split_from_list_file() {
        let cli = parse(&["split", "--list-file", "ids.txt", "--seed", "0", "--n-splits", "3"]).unwrap();
        let Commands::Split(args) = cli.command else { panic!("expected split") };

        let cfg: SplitConfig = args.into();
        assert_eq!(cfg.seed, 0);
        assert_eq!(cfg.n_splits, 3);
        assert_eq!(cfg.source, IdentifierSourceConfig::ListFile { path: "ids.txt".into() });
    }

    #[test]
    fn test_split_requires_exactly_one_source() {
        assert!(parse(&["split"]).is_err());
        assert!(parse(&["split", "--images-dir", "a", "--list-file", "b"]).is_err());
    }

    #[test]
    fn test_inspect_args() {
        let cli = parse(&["inspect", "--splits-dir", "out"]).unwrap();
        assert!(matches!(cli.command, Commands::Inspect(InspectArgs { ref splits_dir }) if splits_dir == "out"));
    }
}
