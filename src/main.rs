use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use component_guide::Lang;
use component_guide::catalog::CatalogSource;
use component_guide::catalog::sources::build_source;
use component_guide::core::config::{self, CliOverrides, GuideConfig};
use component_guide::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(
    name = "component-guide",
    about = "Bilingual (zh/en) frontend component reference"
)]
struct Args {
    /// Catalog API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Read the catalog from a JSON file instead of the API
    #[arg(long)]
    catalog_file: Option<PathBuf>,

    /// Interface language
    #[arg(short, long, value_enum)]
    lang: Option<Lang>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Browse the catalog interactively (default)
    Browse,
    /// Print one component record as JSON
    Show {
        /// Component id, e.g. `button`
        id: String,
    },
    /// List category keys in catalog order
    Categories,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to component-guide.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("component-guide.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {}", e);
        GuideConfig::default()
    });
    let cli = CliOverrides {
        language: args.lang,
        base_url: args.base_url,
        catalog_file: args.catalog_file,
    };
    let resolved = config::resolve(&file_config, &cli);
    let source = build_source(&resolved);

    log::info!(
        "component-guide starting up with source {} (language {:?})",
        source.name(),
        resolved.language
    );

    match args.command.unwrap_or(Command::Browse) {
        Command::Browse => tui::run(resolved, source),
        Command::Show { id } => show(source, &id).await,
        Command::Categories => categories(source).await,
    }
}

async fn show(source: Arc<dyn CatalogSource>, id: &str) -> io::Result<()> {
    let component = source.get_component(id).await.map_err(io::Error::other)?;
    let json = serde_json::to_string_pretty(&component).map_err(io::Error::other)?;
    println!("{json}");
    Ok(())
}

async fn categories(source: Arc<dyn CatalogSource>) -> io::Result<()> {
    let keys = source.list_categories().await.map_err(io::Error::other)?;
    for key in keys {
        println!("{key}");
    }
    Ok(())
}
