use finestra::WindowSummary;
use finestra_demos::common::{DemoArgs, init_tracing, r4};

fn line(label: &str, s: &WindowSummary) -> String {
    format!(
        "  Window {} ({label}): windows={} | mean-range=[{}, {}] | std-range=[{}, {}] | peaks={} | troughs={}",
        s.window_size,
        s.num_windows,
        r4(s.range_of_means.min),
        r4(s.range_of_means.max),
        r4(s.range_of_stddevs.min),
        r4(s.range_of_stddevs.max),
        s.total_peaks,
        s.total_troughs,
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = DemoArgs::from_env()?;
    let data = args.data_dir()?;
    let finestra = args.finestra()?;
    let step = finestra.config().summary.overlap_step;

    let corpus = finestra.load_dir(&data.path)?;
    for summary in finestra.summarize(&corpus) {
        println!("\nTicker: {} (n={})", summary.display_name, summary.points);
        for w in &summary.windows {
            println!("{}", line(&format!("overlap step={step}"), &w.overlapping));
            println!("{}", line("no overlap", &w.non_overlapping));
        }
    }
    Ok(())
}
