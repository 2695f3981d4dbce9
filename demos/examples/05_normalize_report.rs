use finestra_core::normalize_with_report;
use finestra_demos::common::{DemoArgs, init_tracing};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = DemoArgs::from_env()?;
    let data = args.data_dir()?;

    let mut paths: Vec<_> = std::fs::read_dir(&data.path)?
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|e| e.eq_ignore_ascii_case("csv")))
        .collect();
    paths.sort();

    for path in paths {
        let raw = std::fs::read_to_string(&path)?;
        let name = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
        match normalize_with_report(&raw) {
            Ok((series, report)) => println!(
                "{name}: delimiter={:?} read={} kept={} dropped={} duplicates={} span={}",
                report.delimiter,
                report.rows_read,
                report.rows_kept,
                report.rows_dropped,
                report.duplicates_dropped,
                match (series.first(), series.last()) {
                    (Some(a), Some(b)) => format!("{} -> {}", a.date, b.date),
                    _ => "-".to_string(),
                },
            ),
            Err(e) => println!("{name}: {e}"),
        }
    }
    Ok(())
}
