use anyhow::{Context as _, Result};
use clap::{Arg, Command};
use std::fs;
use std::sync::Arc;

use qmlcard::{default_registry, render_card_root, Card, HostConfig, RenderContext};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("qmlcard")
        .about("Convert Adaptive Card JSON to QML markup")
        .arg(
            Arg::new("input")
                .help("Input card JSON file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("host-config")
                .long("host-config")
                .help("Host config JSON file overriding the default palette"),
        )
        .get_matches();

    let input_file = matches.get_one::<String>("input").unwrap();
    let json_content = fs::read_to_string(input_file)
        .with_context(|| format!("Failed to read card file {}", input_file))?;
    let card: Card = serde_json::from_str(&json_content)
        .with_context(|| format!("Failed to parse card JSON in {}", input_file))?;

    let host_config: HostConfig = match matches.get_one::<String>("host-config") {
        Some(path) => {
            let config_content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read host config file {}", path))?;
            serde_json::from_str(&config_content)
                .with_context(|| format!("Failed to parse host config JSON in {}", path))?
        }
        None => HostConfig::default(),
    };

    let mut context = RenderContext::new(Arc::new(host_config), Arc::new(default_registry()));
    let rendered = context.render_card(&card, render_card_root);

    for warning in context.warnings() {
        tracing::warn!(code = ?warning.code, "{}", warning.message);
    }

    match rendered {
        Some(tag) => {
            println!("{}", tag);
            Ok(())
        }
        None => anyhow::bail!("card could not be rendered"),
    }
}
