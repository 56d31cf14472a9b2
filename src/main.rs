use clap::Parser;
use quotebook::adapter::inbound::cli::{command::Cli, output, run};
use quotebook::infrastructure::operator::entry::Operator;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if let Err(e) = run::execute(cli, &Operator::new()).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
