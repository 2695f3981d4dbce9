use std::fmt::Write;

use finestra_core::normalize_wide;
use finestra_demos::common::{DemoArgs, init_tracing, r4};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = DemoArgs::from_env()?;
    let data = args.data_dir()?;
    let finestra = args.finestra()?;

    // Write the aligned matrix as one wide table and read it back.
    let corpus = finestra.load_dir(&data.path)?;
    let matrix = finestra.align(&corpus)?;
    let mut wide = String::from("Date");
    for id in &matrix.instrument_ids {
        let _ = write!(wide, ",{id}");
    }
    wide.push('\n');
    for i in 0..matrix.rows() {
        if let Some((date, row)) = matrix.row(i) {
            let _ = write!(wide, "{date}");
            for v in row {
                let _ = write!(wide, ",{v}");
            }
            wide.push('\n');
        }
    }

    let aligned = normalize_wide(&wide)?;
    let recap = finestra.recap(&matrix)?;
    println!(
        "start-date: {}, end-date: {}, companies: {}, points-per-series: {}",
        recap.start, recap.end, recap.instruments, recap.points
    );

    for summary in finestra.summarize(&aligned) {
        println!("\nTicker: {} (n={})", summary.display_name, summary.points);
        for w in &summary.windows {
            let o = &w.overlapping;
            println!(
                "  Window {}: windows={} | mean-range=[{}, {}] | peaks={} | troughs={}",
                o.window_size,
                o.num_windows,
                r4(o.range_of_means.min),
                r4(o.range_of_means.max),
                o.total_peaks,
                o.total_troughs,
            );
        }
    }
    Ok(())
}
