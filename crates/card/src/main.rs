use card::{
    cli::{Args, usage_outcome},
    di::DependenciesInject,
    handler::CommandHandler,
};
use clap::Parser;
use shared::{config::Config, utils::Logger};
use std::{io, process::ExitCode};
use tracing::{error, info};

fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let printed = e.print();
            return usage_outcome(&e, printed).into();
        }
    };

    let config = match Config::init() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e:#}");
            return ExitCode::from(1);
        }
    };

    let _logger = Logger::new("creditcard", config.log_dir.as_deref());

    info!("🚀 Running {} command", args.command.name());

    let deps = DependenciesInject::new(&config, args.seed);

    let mut handler =
        CommandHandler::new(deps.card_service, io::stdout().lock(), io::stderr().lock());

    match handler.run(args.command, io::stdin().lock()) {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            error!("❌ Command failed: {e:#}");
            eprintln!("{e:#}");
            ExitCode::from(1)
        }
    }
}
