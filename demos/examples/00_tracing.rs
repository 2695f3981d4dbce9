use finestra_demos::common::DemoArgs;
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let args = DemoArgs::from_env()?;
    let data = args.data_dir()?;
    let finestra = args.finestra()?;

    let corpus = finestra.load_dir(&data.path)?;
    let matrix = finestra.align(&corpus)?;
    let _ = finestra.summarize(&corpus);

    tracing::info!(rows = matrix.rows(), cols = matrix.cols(), "pipeline finished");
    Ok(())
}
