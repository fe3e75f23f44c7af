use btc_ticker::cli::{print_exchanges, Cli, Commands};
use btc_ticker::config::Config;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) if std::path::Path::new(&cli.config).exists() => {
            return Err(e.context(format!("Invalid config file {}", cli.config)));
        }
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            Config::default()
        }
    };

    // Initialize telemetry
    btc_ticker::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Fetch(args) => {
            args.execute(&config).await?;
        }
        Commands::Exchanges => {
            print_exchanges(&config);
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Fetch: timeout={}s connect_timeout={}s",
                config.fetch.timeout_secs, config.fetch.connect_timeout_secs
            );
            let names: Vec<String> = config.fetch.exchanges.iter().map(|e| e.to_string()).collect();
            println!("  Exchanges: {}", names.join(", "));
            for (exchange, url) in &config.endpoints {
                println!("  Endpoint: {} -> {}", exchange, url);
            }
            println!(
                "  Telemetry: level={} format={:?}",
                config.telemetry.log_level, config.telemetry.log_format
            );
        }
    }

    Ok(())
}
