use fecha::{Calendar, Date, DateTime, Period, Precision};
use log::LevelFilter;
use std::process::ExitCode;

fn init_logging(verbose: bool) {
    let mut builder = env_logger::builder();
    builder.format_timestamp_secs();
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.parse_default_env();
    builder.init();
}

// Accepts a full date/time or a plain date (read as midnight)
fn parse_input(input: &str) -> fecha::Result<DateTime> {
    input.parse::<DateTime>()
        .or_else(|e| input.parse::<Date>().map(DateTime::from).map_err(|_| e))
}

fn describe(dt: &DateTime) -> fecha::Result<()> {
    let calendar = Calendar::global();
    let date = dt.date();
    println!("{}", dt);
    println!("iso:       {}", dt.iso_string());
    println!("weekday:   {}{}", date.weekday(),
             if date.is_weekend() { " (weekend)" } else { "" });
    for period in [Period::Week, Period::Month, Period::Year] {
        let (first, last) = date.envelope_in(calendar, period, None)?;
        println!("{:<10} {} - {} ({} days)", format!("{}:", period),
                 first, last, date.length(period));
    }
    match dt.timestamp() {
        Ok(ts) => println!("timestamp: {}", ts),
        Err(e) => println!("timestamp: {}", e),
    }
    Ok(())
}

fn main() -> ExitCode {
    let verbose = std::env::args().any(|arg| arg == "-v");
    init_logging(verbose);
    let input = std::env::args().skip(1)
        .filter(|arg| arg != "-v")
        .collect::<Vec<String>>().join(" ");

    let dt = if input.is_empty() {
        log::debug!("now: {} ms", fecha::timestamp_now(Precision::Milliseconds));
        DateTime::now()
    } else {
        parse_input(&input)
    };
    match dt.and_then(|dt| describe(&dt)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("fecha: {}", e);
            ExitCode::FAILURE
        }
    }
}
