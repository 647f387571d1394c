use clap::Parser;
use log::{debug, error};
use recipe_analyzer::{AnalyzeError, AnalyzerConfig, RecipeAnalyzer};
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::AsyncReadExt;

/// Analyze a recipe's nutrition, allergens, diets and taste
#[derive(Parser)]
#[command(name = "recipe-analyzer")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Recipe page to fetch
    #[arg(long, conflicts_with = "file")]
    url: Option<String>,

    /// Recipe text file (reads stdin when neither --url nor --file is given)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Identifier forwarded to the remote analysis service
    #[arg(long)]
    context_id: Option<String>,

    /// Never call the remote analysis service
    #[arg(long)]
    local_only: bool,

    /// Path to configuration file (defaults to analyzer.toml)
    #[arg(long)]
    config: Option<String>,

    /// Timeout in seconds for the remote service and page fetches
    #[arg(long)]
    timeout: Option<u64>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = AnalyzerConfig::load(cli.config.as_deref()).map_err(AnalyzeError::from)?;
    debug!(
        "Remote analysis {}",
        if config.remote.enabled { "enabled" } else { "disabled" }
    );

    let mut builder = RecipeAnalyzer::builder().config(config);
    builder = match (cli.url, cli.file) {
        (Some(url), _) => builder.url(url),
        (None, Some(path)) => builder.text(tokio::fs::read_to_string(&path).await?),
        (None, None) => {
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            builder.text(text)
        }
    };
    if let Some(context_id) = cli.context_id {
        builder = builder.context_id(context_id);
    }
    if let Some(secs) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    if cli.local_only {
        builder = builder.local_only();
    }

    let result = builder.build().await?;
    let json = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", json);
    Ok(())
}
