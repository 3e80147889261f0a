use clap::Parser;
use std::path::PathBuf;

use crate::models::RunConfig;

pub mod handlers;

/// timings-plot: Clean, build and chart per-target Cargo build timings.
///
/// The project is cleaned first so no target is served from cache, then built
/// with `-Z timings=json` on the configured toolchain. The resulting chart is
/// written to `<project>/assets/timings_<name>_<platform>.svg`, where `<name>`
/// encodes the feature selection.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Optional features to enable (comma- or space-delimited).
    #[arg(long, default_value = "")]
    pub features: String,

    /// Disable the project's default features.
    #[arg(long)]
    pub no_default_features: bool,

    /// The project to measure. Defaults to the current directory.
    #[arg(long, default_value = ".")]
    pub project_root: PathBuf,
}

impl Cli {
    /// The build-affecting options selected by these arguments.
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            features: self.features.clone(),
            no_default_features: self.no_default_features,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["timings-plot"]).unwrap();
        assert_eq!(cli.run_config(), RunConfig::default());
        assert_eq!(cli.project_root, PathBuf::from("."));
    }

    #[test]
    fn test_features_and_no_default() {
        let cli = Cli::try_parse_from([
            "timings-plot",
            "--features=compact,std",
            "--no-default-features",
        ])
        .unwrap();
        let config = cli.run_config();
        assert_eq!(config.features, "compact,std");
        assert!(config.no_default_features);
    }

    #[test]
    fn test_space_delimited_features_value() {
        let cli = Cli::try_parse_from(["timings-plot", "--features", "compact std"]).unwrap();
        assert_eq!(cli.run_config().features, "compact std");
    }

    #[test]
    fn test_unknown_flag_is_a_usage_error() {
        let err = Cli::try_parse_from(["timings-plot", "--release"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_no_default_features_takes_no_value() {
        assert!(Cli::try_parse_from(["timings-plot", "--no-default-features=yes"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
