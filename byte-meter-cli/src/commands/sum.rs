use byte_meter_core::ByteCount;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use crate::CliError;
use crate::commands::parse_count;

/// Accumulated total, as emitted in JSON mode.
#[derive(Serialize)]
struct SumReport {
    terms: usize,
    bytes: u64,
    human: String,
    byte_rate: Option<String>,
    bit_rate: Option<String>,
}

/// Run the sum command.
pub(crate) fn run_sum(
    counts: &[String],
    seconds: Option<f64>,
    json: bool,
) -> Result<(), CliError> {
    if let Some(secs) = seconds {
        if !(secs > 0.0) {
            return Err(CliError::InvalidSeconds(secs));
        }
    }

    let mut total = ByteCount::default();
    for arg in counts {
        total.increment_by(parse_count(arg)?);
    }

    log::debug!(
        "accumulated {} term(s) into {} bytes",
        counts.len(),
        total.as_u64(),
    );

    if json {
        let report = SumReport {
            terms: counts.len(),
            bytes: total.as_u64(),
            human: total.to_string(),
            byte_rate: seconds.map(|secs| total.rate(secs)),
            bit_rate: seconds.map(|secs| total.bit_rate(secs)),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "  {}      {}",
        "Terms:".if_supports_color(Stdout, |t| t.cyan()),
        counts.len(),
    );
    println!(
        "  {}      {}",
        "Total:".if_supports_color(Stdout, |t| t.cyan()),
        total.as_u64(),
    );
    println!(
        "  {}       {}",
        "Size:".if_supports_color(Stdout, |t| t.cyan()),
        total.to_string().if_supports_color(Stdout, |t| t.bold()),
    );
    if let Some(secs) = seconds {
        println!(
            "  {}  {}",
            "Byte rate:".if_supports_color(Stdout, |t| t.cyan()),
            total.rate(secs),
        );
        println!(
            "  {}   {}",
            "Bit rate:".if_supports_color(Stdout, |t| t.cyan()),
            total.bit_rate(secs),
        );
    }
    Ok(())
}
