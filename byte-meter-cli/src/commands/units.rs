use byte_meter_core::Unit;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Run the units command.
pub(crate) fn run_units() -> Result<(), CliError> {
    println!("Binary units:");
    println!();

    for unit in Unit::all().iter().rev() {
        println!(
            "  {} [{}]",
            unit.symbol().if_supports_color(Stdout, |t| t.bold()),
            unit.name().if_supports_color(Stdout, |t| t.cyan()),
        );
        if unit.scale() == 1 {
            println!("    Scale: 1 byte");
        } else {
            println!(
                "    Scale: {} bytes (2^{})",
                unit.scale(),
                unit.scale().trailing_zeros(),
            );
        }
    }
    Ok(())
}
