use clap::Parser;
use xid_fetch::core::Sink;
use xid_fetch::utils::{logger, validation::Validate};
use xid_fetch::{CliConfig, CodepointPipeline, EtlEngine, FileSink, Result, Settings, StdoutSink};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli).await {
        tracing::error!("❌ {} (Category: {:?})", e, e.category());
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: &CliConfig) -> Result<()> {
    let settings = Settings::from_cli(cli)?;
    settings.validate()?;

    tracing::info!("Fetching {} code points from {}", settings.property, settings.endpoint);

    match settings.output_path.clone() {
        Some(path) => execute(FileSink::new(path), settings).await,
        None => execute(StdoutSink, settings).await,
    }
}

async fn execute<S: Sink>(sink: S, settings: Settings) -> Result<()> {
    let pipeline = CodepointPipeline::new(sink, settings)?;
    let engine = EtlEngine::new(pipeline);

    let destination = engine.run().await?;
    tracing::debug!("✅ Line written to {}", destination);
    Ok(())
}
