//! Command-line interface definitions.
//!
//! Defines the CLI structure for quotebook using `clap`. `serve` runs the web
//! page; the remaining commands drive the same quote service from a terminal.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Generate, store and display AI-written quotes
#[derive(Parser, Debug)]
#[command(name = "quotebook")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file [default: config.toml if present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the web page (GET /, POST /generate, POST /clear)
    Serve(ServeArgs),

    /// Show the current quote and count
    Show,

    /// Generate a new quote and store it
    Generate,

    /// List every stored quote
    List,

    /// Delete every stored quote
    Clear(ClearArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for `serve`.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Keep quotes in memory only; nothing is written to disk
    #[arg(long)]
    pub ephemeral: bool,

    /// Override the listen port
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,
}

/// Arguments for `clear`.
#[derive(Parser, Debug)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Subcommands for `quotebook config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate the configuration for correctness.
    Validate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_command() {
        let cli = Cli::try_parse_from(["quotebook", "serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert!(!args.ephemeral);
                assert!(args.port.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(cli.config.is_none());
        assert!(!cli.json);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_serve_flags() {
        let cli =
            Cli::try_parse_from(["quotebook", "serve", "--ephemeral", "--port", "8080"]).unwrap();
        if let Commands::Serve(args) = cli.command {
            assert!(args.ephemeral);
            assert_eq!(args.port, Some(8080));
        } else {
            panic!("expected serve");
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["quotebook", "show", "--json", "-c", "alt.toml"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
        assert!(matches!(cli.command, Commands::Show));
    }

    #[test]
    fn test_parse_clear_yes() {
        let cli = Cli::try_parse_from(["quotebook", "clear", "-y"]).unwrap();
        assert!(matches!(cli.command, Commands::Clear(ClearArgs { yes: true })));
    }

    #[test]
    fn test_parse_config_subcommands() {
        let cli = Cli::try_parse_from(["quotebook", "config", "validate"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommand::Validate)
        ));

        let cli = Cli::try_parse_from(["quotebook", "config", "show"]).unwrap();
        assert!(matches!(cli.command, Commands::Config(ConfigCommand::Show)));
    }

    #[test]
    fn test_parse_color_never() {
        let cli = Cli::try_parse_from(["quotebook", "--color", "never", "list"]).unwrap();
        assert!(matches!(cli.color, ColorChoice::Never));
    }

    #[test]
    fn test_serve_rejects_port_zero() {
        assert!(Cli::try_parse_from(["quotebook", "serve", "--port", "0"]).is_err());
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["quotebook"]).is_err());
    }
}
