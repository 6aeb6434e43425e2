//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

/// System information fetcher with terminal images and ASCII logos
#[derive(Parser, Debug)]
#[command(name = "lunarfetch")]
#[command(version, about = "System information with terminal images and ASCII logos", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Log rendering decisions and failures to stderr
    #[arg(long, short)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["lunarfetch"]);
        assert!(args.config.is_none());
        assert!(!args.debug);
    }

    #[test]
    fn test_args_config_option() {
        let args = Args::parse_from(["lunarfetch", "--config", "/tmp/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/config.toml")));

        let args = Args::parse_from(["lunarfetch", "-c", "/tmp/test.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/test.toml")));
    }

    #[test]
    fn test_args_debug_flag() {
        assert!(Args::parse_from(["lunarfetch", "--debug"]).debug);
        assert!(Args::parse_from(["lunarfetch", "-d"]).debug);
    }

    #[test]
    fn test_args_reject_subcommands() {
        assert!(Args::try_parse_from(["lunarfetch", "install"]).is_err());
    }
}
