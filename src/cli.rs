//! Command-line interface for nexus-sync.

use clap::Parser;
use std::path::PathBuf;

/// Nexus artifact version synchronization
#[derive(Parser, Debug)]
#[command(name = "nexus-sync")]
#[command(about = "Synchronize artifact versions between two Nexus servers", long_about = None)]
pub struct Cli {
    /// Path to config file (YAML)
    #[arg(short, long)]
    pub config: PathBuf,

    /// Show what would be migrated without uploading anything
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_arg_is_required() {
        assert!(Cli::try_parse_from(["nexus-sync"]).is_err());
    }

    #[test]
    fn test_parse_config_and_dry_run() {
        let cli = Cli::try_parse_from(["nexus-sync", "-c", "sync.yaml", "--dry-run"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("sync.yaml"));
        assert!(cli.dry_run);
    }
}
