use std::sync::Arc;

use clap::Parser;
use foodcheck_api::{
    application::{analyze::analyze_file, http::server::http_server::serve, logging::init_logger},
    args::{Args, Command},
};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    match args.command.clone().unwrap_or(Command::Serve) {
        Command::Serve => serve(args).await,
        Command::Analyze { path } => analyze_file(args, &path).await,
    }
}
