use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use crate::CliError;
use crate::commands::parse_count;

/// One formatted count, as emitted in JSON mode.
#[derive(Serialize)]
struct FormattedCount {
    bytes: u64,
    human: String,
}

/// Run the format command.
pub(crate) fn run_format(counts: &[String], json: bool) -> Result<(), CliError> {
    let parsed = counts
        .iter()
        .map(|arg| parse_count(arg))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("formatting {} byte count(s)", parsed.len());

    if json {
        let rows: Vec<FormattedCount> = parsed
            .iter()
            .map(|count| FormattedCount {
                bytes: count.as_u64(),
                human: count.to_string(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let width = parsed
        .iter()
        .map(|count| count.as_u64().to_string().len())
        .max()
        .unwrap_or(0);

    for count in &parsed {
        println!(
            "  {:>width$}  {}",
            count.as_u64(),
            count.to_string().if_supports_color(Stdout, |t| t.cyan()),
        );
    }
    Ok(())
}
