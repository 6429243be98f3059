use clap::Parser;
use cpu_utilization::utils::{logger, validation::Validate};
use cpu_utilization::{CliConfig, Engine, LocalStorage, UtilizationPipeline};

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        println!("ERROR: {}", e);
        std::process::exit(e.exit_code());
    }

    let pipeline = UtilizationPipeline::new(LocalStorage::default(), config);
    let engine = Engine::new(pipeline);

    if let Err(e) = engine.run() {
        tracing::error!("Utilization report failed: {:?}", e);
        println!("ERROR: {}", e);
        std::process::exit(e.exit_code());
    }
}
