// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `split` and `inspect`, and all
// their configurable flags.

use clap::{Args, Subcommand};

use crate::application::split_use_case::{IdentifierSourceConfig, SplitConfig};
use crate::data::splitter::{DEFAULT_N_SPLITS, DEFAULT_SEED};

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate patient-grouped cross-validation folds
    Split(SplitArgs),

    /// Summarise and validate a saved splits_final.json
    Inspect(InspectArgs),
}

/// All arguments for the `split` command.
#[derive(Args, Debug)]
#[command(group(
    clap::ArgGroup::new("source")
        .required(true)
        .args(["images_dir", "list_file"])
))]
pub struct SplitArgs {
    /// Directory whose file names are the sample identifiers
    #[arg(long)]
    pub images_dir: Option<String>,

    /// Only use files with this extension from --images-dir (e.g. png)
    #[arg(long, requires = "images_dir")]
    pub extension: Option<String>,

    /// Text file with one sample identifier per line
    #[arg(long)]
    pub list_file: Option<String>,

    /// Directory to write splits_final.json and split_config.json
    #[arg(long, default_value = "splits")]
    pub output_dir: String,

    /// Seed for the fold shuffle; same seed, same folds
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of folds (at least 2, at most the number of patients)
    #[arg(long, default_value_t = DEFAULT_N_SPLITS)]
    pub n_splits: usize,
}

/// Convert CLI SplitArgs into the application-layer SplitConfig.
/// The application layer never sees clap types.
impl From<SplitArgs> for SplitConfig {
    fn from(a: SplitArgs) -> Self {
        // The arg group guarantees exactly one source is present
        let source = match a.list_file {
            Some(path) => IdentifierSourceConfig::ListFile { path },
            None => IdentifierSourceConfig::Directory {
                dir:       a.images_dir.unwrap_or_default(),
                extension: a.extension,
            },
        };

        SplitConfig {
            source,
            output_dir: a.output_dir,
            seed:       a.seed,
            n_splits:   a.n_splits,
        }
    }
}

/// All arguments for the `inspect` command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Directory containing splits_final.json
    #[arg(long, default_value = "splits")]
    pub splits_dir: String,
}
