use anyhow::Result;
use clap::{Parser, Subcommand};
use gemini_studio::app::App;
use gemini_studio::config::Config;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "gemini-studio")]
#[command(about = "Chat with Gemini or generate images from the terminal")]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Send a chat prompt, or start an interactive session when omitted.
    Chat {
        /// The prompt to send.
        prompt: Option<String>,
    },
    /// Generate an image from a prompt and save it locally.
    Image {
        /// The prompt describing the image.
        prompt: String,
        /// Destination path; defaults to gemini-generated-image.png in the
        /// working directory.
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gemini_studio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    info!("Starting gemini-studio");
    let mut app = App::new(&config);

    let result = match args.command {
        Command::Chat {
            prompt: Some(prompt),
        } => app.chat_once(&prompt).await,
        Command::Chat { prompt: None } => app.chat_interactive().await,
        Command::Image { prompt, out } => app.image_once(&prompt, out).await,
    };

    if let Err(e) = result {
        error!("Request failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
