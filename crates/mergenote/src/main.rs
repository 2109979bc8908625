use clap::Parser;
use tokio::runtime::Runtime;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mergenote::cli::Cli;
use mergenote::config::Config;
use mergenote::orchestrator::{run_announcement, Outcome};
use mergenote::provider::source_from_config;

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "mergenote=info,warn",
        _ => "mergenote=debug,info",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout is reserved for the preview and the echoed message
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.clone())?;
    let source = source_from_config(&config);
    let client = reqwest::Client::new();
    let request = cli.request();

    let rt = Runtime::new()?;
    let result = rt.block_on(run_announcement(
        &request,
        source.as_ref(),
        &config,
        &client,
        &|key| std::env::var(key).ok(),
    ));

    match result {
        Ok(Outcome::Previewed { message }) => {
            println!("=== DRY RUN — Message preview ===\n");
            println!("{message}");
            println!("\n=== End preview ===");
        }
        Ok(Outcome::Posted { number, .. }) => {
            println!("✅ Posted PR #{number} merge announcement to Slack!");
        }
        Ok(Outcome::DeliveryFailed { message, .. }) => {
            eprintln!("❌ Failed to post to Slack.");
            println!("\nMessage was:\n");
            println!("{message}");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}
