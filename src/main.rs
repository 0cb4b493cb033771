use std::collections::BTreeMap;

use clap::Parser;
use cli::{Cli, Command};
use color_eyre::eyre::Result;
use recipient_resolver::{FileRecipientProvider, RecipientResolver};
use tracing::{debug, warn, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

mod cli;

const DEFAULT_CONFIG: &str = "/etc/recipient-resolver/recipients.yaml";

fn main() -> Result<()> {
    let (stderr, _guard) = tracing_appender::non_blocking(std::io::stderr());
    let format_stderr = tracing_subscriber::fmt::format()
        .with_line_number(true)
        .with_source_location(false);
    let filter_stderr = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .from_env_lossy();
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(stderr)
        .event_format(format_stderr)
        .with_filter(filter_stderr);

    tracing_subscriber::Registry::default()
        .with(stderr_layer)
        .init();

    color_eyre::install()?;

    let args = Cli::parse();
    let config = args.config.as_deref().unwrap_or(DEFAULT_CONFIG);
    debug!("Using recipient configuration {config}");

    let resolver = RecipientResolver::new(FileRecipientProvider::new(config));

    let output = match args.command {
        Command::List => {
            let lists: BTreeMap<_, _> = resolver.all()?.into_iter().collect();
            serde_json::to_string_pretty(&lists)?
        }
        Command::Resolve { name } => {
            let recipient = match resolver.find(&name)? {
                Some(v) => v,
                None => {
                    warn!("No recipient list named {name}");
                    Default::default()
                }
            };
            serde_json::to_string_pretty(&recipient)?
        }
    };
    println!("{output}");

    Ok(())
}
