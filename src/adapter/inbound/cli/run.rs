//! Command dispatch.

use super::command::{Cli, ColorChoice, Commands, ConfigCommand};
use super::output::{self, OutputConfig};
use super::{config, paths, quote, serve};
use crate::error::Result;
use crate::port::inbound::operator::port::OperatorPort;

fn apply_color(choice: &ColorChoice) {
    match choice {
        ColorChoice::Auto => owo_colors::unset_override(),
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
    }
}

/// Run a parsed command line to completion.
///
/// # Errors
///
/// Returns the first error raised by configuration, wiring or the command.
pub async fn execute(cli: Cli, operator: &dyn OperatorPort) -> Result<()> {
    apply_color(&cli.color);
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let path = paths::resolve_config(cli.config);
    let config_toml = paths::read_config_toml(path.as_deref())?;
    let config_toml = config_toml.as_deref();

    match cli.command {
        Commands::Serve(args) => serve::execute(operator, config_toml, &args).await,
        Commands::Show => quote::show(operator.open_quotes(config_toml)?.as_ref()).await,
        Commands::Generate => quote::generate(operator.open_quotes(config_toml)?.as_ref()).await,
        Commands::List => quote::list(operator.open_quotes(config_toml)?.as_ref()).await,
        Commands::Clear(args) => {
            quote::clear(operator.open_quotes(config_toml)?.as_ref(), args.yes).await
        }
        Commands::Config(ConfigCommand::Show) => {
            config::execute_show(operator, config_toml, path.as_deref())
        }
        Commands::Config(ConfigCommand::Validate) => {
            config::execute_validate(operator, config_toml, path.as_deref())
        }
    }
}
