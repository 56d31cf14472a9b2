//! Handler for the `serve` command.

use crate::adapter::inbound::cli::command::ServeArgs;
use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::port::inbound::operator::port::OperatorPort;
use crate::port::inbound::operator::runtime::ServeRequest;

/// Execute the serve command.
pub async fn execute(
    operator: &dyn OperatorPort,
    config_toml: Option<&str>,
    args: &ServeArgs,
) -> Result<()> {
    let request = ServeRequest {
        config_toml: config_toml.map(str::to_string),
        port: args.port,
        ephemeral: args.ephemeral,
    };

    let snapshot = operator.prepare_serve(&request)?;
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Listening", format!("http://{}", snapshot.address));
    output::field("Storage", &snapshot.storage);
    output::field("Table", &snapshot.table);
    output::field("Model", &snapshot.model);
    if args.ephemeral {
        output::warning("Ephemeral mode: quotes are lost on exit");
    }
    output::hint("press Ctrl+C to stop");

    operator.serve(request).await
}
