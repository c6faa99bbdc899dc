use std::path::PathBuf;
use std::sync::Arc;

use base64::Engine;
use clap::{Parser, Subcommand};
use derm_core::{
    sections, AnalysisService, ChatCompletionClient, CoreConfig, DiseaseInfoService,
    RemoteClassifier,
};

#[derive(Parser)]
#[command(name = "derm")]
#[command(about = "Skin disease detection CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a saved LLM reply into sections
    Parse {
        /// Text file holding the reply
        file: PathBuf,
    },
    /// Look up disease information through the configured LLM
    Info {
        /// Disease label as produced by the classifier
        disease: String,
    },
    /// Analyse an image file with the configured collaborators
    Analyze {
        /// JPEG or PNG image
        image: PathBuf,
    },
}

fn analysis_service(cfg: &CoreConfig) -> anyhow::Result<AnalysisService> {
    let classifier = RemoteClassifier::new(cfg.classifier())?;
    Ok(AnalysisService::new(Arc::new(classifier), disease_info_service(cfg)?))
}

fn disease_info_service(cfg: &CoreConfig) -> anyhow::Result<DiseaseInfoService> {
    let completion = ChatCompletionClient::new(cfg.completion().clone())?;
    Ok(DiseaseInfoService::new(
        Arc::new(completion),
        cfg.disease_info_cache_size(),
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Parse { file }) => {
            let content = std::fs::read_to_string(&file)?;
            let info = sections::parse(&content);
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Some(Commands::Info { disease }) => {
            let cfg = CoreConfig::from_env()?;
            let info = disease_info_service(&cfg)?.get_disease_info(&disease).await;
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Some(Commands::Analyze { image }) => {
            let cfg = CoreConfig::from_env()?;
            let bytes = std::fs::read(&image)?;
            let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
            let result = analysis_service(&cfg)?.analyze(&encoded).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        None => {
            println!("Use 'derm --help' for commands");
        }
    }

    Ok(())
}
