use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use crate::CliError;
use crate::commands::parse_count;

/// Rate report for one transfer, as emitted in JSON mode.
#[derive(Serialize)]
struct RateReport {
    bytes: u64,
    seconds: f64,
    human: String,
    byte_rate: String,
    bits_per_second: f64,
    bit_rate: String,
}

/// Run the rate command.
pub(crate) fn run_rate(count: &str, seconds: f64, json: bool) -> Result<(), CliError> {
    if !(seconds > 0.0) {
        return Err(CliError::InvalidSeconds(seconds));
    }

    let count = parse_count(count)?;
    log::debug!(
        "computing rates for {} bytes over {}s",
        count.as_u64(),
        seconds,
    );

    if json {
        let report = RateReport {
            bytes: count.as_u64(),
            seconds,
            human: count.to_string(),
            byte_rate: count.rate(seconds),
            bits_per_second: count.bits_per_second(seconds),
            bit_rate: count.bit_rate(seconds),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "  {}  {} over {} s",
        "Transfer:".if_supports_color(Stdout, |t| t.cyan()),
        count.to_string().if_supports_color(Stdout, |t| t.bold()),
        seconds,
    );
    println!(
        "  {} {}",
        "Byte rate:".if_supports_color(Stdout, |t| t.cyan()),
        count.rate(seconds),
    );
    println!(
        "  {}  {} ({} bits/s)",
        "Bit rate:".if_supports_color(Stdout, |t| t.cyan()),
        count.bit_rate(seconds),
        count.bits_per_second(seconds),
    );
    Ok(())
}
