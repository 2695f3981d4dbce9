use finestra_demos::common::{DemoArgs, init_tracing};

fn fmt(v: f64) -> String {
    if v.is_finite() {
        format!("{v:.2}")
    } else {
        "NA".to_string()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = DemoArgs::from_env()?;
    let data = args.data_dir()?;
    let finestra = args.finestra()?;

    let corpus = finestra.load_dir(&data.path)?;
    let matrix = finestra.align(&corpus)?;
    let recap = finestra.recap(&matrix)?;

    println!("Recap:");
    println!("Start date: {}", recap.start);
    println!("End date: {}", recap.end);
    println!("Number of companies: {}", recap.instruments);
    println!("Number of points in each time series: {}", recap.points);
    println!("List of tickers: {}", recap.display_names.join(", "));

    let head = matrix.head(3);
    let tail = matrix.tail(3);
    println!(
        "\nData preview (first {} and last {} rows):",
        head.len(),
        tail.len()
    );
    println!("{:<12}{}", "Date", recap.display_names.iter().map(|n| format!("{n:>12}")).collect::<String>());
    for i in head.chain(tail) {
        if let Some((date, row)) = matrix.row(i) {
            let cells: String = row.iter().map(|v| format!("{:>12}", fmt(*v))).collect();
            println!("{:<12}{cells}", date.to_string());
        }
    }
    Ok(())
}
