use clap::Parser;
use crm_launcher::utils::{logger, validation::Validate};
use crm_launcher::{config, CliArgs, LaunchEngine, Ports, SystemRunner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting crm-launcher");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let ports = Ports::from_env();
    if let Err(e) = ports.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let project_dir = config::project_dir();
    let engine = LaunchEngine::new(SystemRunner, ports, project_dir);

    if args.down {
        if let Err(e) = engine.shutdown().await {
            tracing::error!("❌ Stopping services failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
        println!("✅ CRM services stopped");
        return Ok(());
    }

    match engine.run().await {
        Ok(url) => {
            println!("✅ CRM is running at {}", url);
            println!("To stop: run with --down or: docker compose down");
        }
        Err(e) => {
            tracing::error!("❌ Launch failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }

    Ok(())
}
