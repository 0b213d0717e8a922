use clap::Parser;
use nz_tours::core::flow::{FLOW_MARKER, RESTART_TOKEN};
use nz_tours::utils::{logger, validation::Validate};
use nz_tours::{
    CatalogCache, ChatEngine, CliConfig, GeminiClient, Selections, SheetsCatalogSource,
    SystemClock,
};
use std::io::{BufRead, Write};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting nz-tours chat");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let source = SheetsCatalogSource::new(&config)?;
    let assistant = GeminiClient::new(&config)?;
    let cache = CatalogCache::new(source, SystemClock, config.cache_ttl_seconds);
    let engine = ChatEngine::new(cache, assistant);

    // Minimal console transport: a typed option token becomes a structured
    // selection, anything else is free text for the assistant.
    let stdin = std::io::stdin();
    let mut reply = engine
        .handle_turn(
            &format!("{}{}", FLOW_MARKER, RESTART_TOKEN),
            None,
            Selections::new(),
        )
        .await;

    loop {
        println!("\n{}", reply.message);
        if let Some(packages) = &reply.packages {
            for package in packages {
                println!(
                    "  {} - {} (${} NZD, {} days, {})",
                    package.id, package.name, package.price, package.duration, package.region
                );
            }
        }
        for option in reply.options {
            println!("  [{}] {}", option.value, option.label);
        }

        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "/quit" {
            break;
        }

        let message = if reply.options.iter().any(|o| o.value == trimmed) {
            format!("{}{}", FLOW_MARKER, trimmed)
        } else {
            trimmed.to_string()
        };

        reply = engine
            .handle_turn(
                &message,
                Some(reply.flow_state.as_str()),
                reply.selections.clone(),
            )
            .await;
    }

    tracing::info!("Haere ra!");
    Ok(())
}
