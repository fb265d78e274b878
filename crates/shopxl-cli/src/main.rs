mod export;
mod prompt;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use shopxl_core::RunStatus;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shopxl-cli")]
#[command(about = "Export a storefront's public product catalog to a spreadsheet")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Export every product variant from one storefront
    Export {
        /// Any URL on the storefront; only its origin is used
        url: String,

        /// Directory to write the workbook into (defaults to `SHOPXL_OUTPUT_DIR`)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Read storefront URLs from stdin, one per line, and export each in turn
    Prompt {
        /// Directory to write workbooks into (defaults to `SHOPXL_OUTPUT_DIR`)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let config = shopxl_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Export { url, output_dir }) => {
            let output_dir = output_dir.unwrap_or_else(|| config.output_dir.clone());
            let client = export::build_catalog_client(&config)?;

            println!("{}", RunStatus::Running);
            let outcome = export::run_export(&client, &url, &output_dir).await;
            let failed = outcome.is_failure();
            println!("{}", RunStatus::Done(outcome));

            Ok(if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Some(Commands::Prompt { output_dir }) => {
            let output_dir = output_dir.unwrap_or_else(|| config.output_dir.clone());
            let client = export::build_catalog_client(&config)?;
            let mut trigger = prompt::Trigger::new(&client, output_dir, config.cooldown());
            prompt::run_prompt(&mut trigger, tokio::io::stdin()).await?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("shopxl-cli: run `shopxl-cli export <URL>` or see `shopxl-cli --help`");
            Ok(ExitCode::SUCCESS)
        }
    }
}
