use finestra_demos::common::{DemoArgs, init_tracing};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = DemoArgs::from_env()?;
    let data = args.data_dir()?;
    let finestra = args.finestra()?;

    let corpus = finestra.load_dir(&data.path)?;
    let report = finestra.coverage(&corpus);

    println!("Files: {}", report.entries.len());
    println!("Per-ticker ranges:");
    for e in &report.entries {
        let first = e.first.map_or_else(|| "-".to_string(), |d| d.to_string());
        let last = e.last.map_or_else(|| "-".to_string(), |d| d.to_string());
        println!("  {}: {} rows | {first} -> {last}", e.instrument, e.rows);
    }

    if report.all_empty() {
        println!("\nAll files parsed 0 rows. Check headers/delimiters.");
        return Ok(());
    }

    match report.overlap {
        Some(w) => {
            println!("\nGlobal overlap window (non-empty only): {} -> {}", w.start, w.end);
            println!(
                "There is an overlap window. If the intersection is empty, some tickers lack dates inside it."
            );
        }
        None => println!("\nNo overlapping window across non-empty files."),
    }
    Ok(())
}
