use byte_meter_core::ByteCount;

use crate::CliError;

pub(crate) mod format;
pub(crate) mod rate;
pub(crate) mod sum;
pub(crate) mod units;

/// Parse a byte-count argument: a plain unsigned 64-bit integer, with
/// optional '_' digit separators (e.g. "1_048_576").
///
/// Human-readable sizes like "1.5KiB" are not accepted. This tool formats
/// counts, it does not parse them back.
pub(crate) fn parse_count(arg: &str) -> Result<ByteCount, CliError> {
    if arg.starts_with('_') || arg.ends_with('_') {
        return Err(CliError::invalid_count(arg));
    }
    let digits: String = arg.chars().filter(|&c| c != '_').collect();
    digits
        .parse::<u64>()
        .map(ByteCount::new)
        .map_err(|_| CliError::invalid_count(arg))
}
