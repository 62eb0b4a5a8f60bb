/// Binary (IEC) units from bytes up to exbibytes.
///
/// One variant per tier of the size formatter: each unit's scale is a
/// power of 1024, and the scale doubles as the tier threshold. A count
/// formats in the largest unit whose scale it reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Byte,
    Kibibyte,
    Mebibyte,
    Gibibyte,
    Tebibyte,
    Pebibyte,
    Exbibyte,
}

/// All unit variants, largest first (the order tier selection scans them).
const ALL_UNITS: &[Unit] = &[
    Unit::Exbibyte,
    Unit::Pebibyte,
    Unit::Tebibyte,
    Unit::Gibibyte,
    Unit::Mebibyte,
    Unit::Kibibyte,
    Unit::Byte,
];

impl Unit {
    /// Number of bytes in one of this unit.
    pub const fn scale(&self) -> u64 {
        match self {
            Self::Byte => 1,
            Self::Kibibyte => 1 << 10,
            Self::Mebibyte => 1 << 20,
            Self::Gibibyte => 1 << 30,
            Self::Tebibyte => 1 << 40,
            Self::Pebibyte => 1 << 50,
            Self::Exbibyte => 1 << 60,
        }
    }

    /// IEC suffix printed after a formatted value.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Byte => "B",
            Self::Kibibyte => "KiB",
            Self::Mebibyte => "MiB",
            Self::Gibibyte => "GiB",
            Self::Tebibyte => "TiB",
            Self::Pebibyte => "PiB",
            Self::Exbibyte => "EiB",
        }
    }

    /// Full lowercase unit name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Kibibyte => "kibibyte",
            Self::Mebibyte => "mebibyte",
            Self::Gibibyte => "gibibyte",
            Self::Tebibyte => "tebibyte",
            Self::Pebibyte => "pebibyte",
            Self::Exbibyte => "exbibyte",
        }
    }

    /// The largest unit whose scale `bytes` reaches.
    ///
    /// Values below 1024 (including zero) land on [`Unit::Byte`].
    pub fn for_value(bytes: u64) -> Unit {
        for &unit in ALL_UNITS {
            if bytes >= unit.scale() {
                return unit;
            }
        }
        Unit::Byte
    }

    /// All 7 unit variants, largest first.
    pub fn all() -> &'static [Unit] {
        ALL_UNITS
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_7_variants() {
        assert_eq!(Unit::all().len(), 7);
    }

    #[test]
    fn all_is_ordered_largest_first() {
        for pair in Unit::all().windows(2) {
            assert!(
                pair[0].scale() > pair[1].scale(),
                "{:?} should outrank {:?}",
                pair[0],
                pair[1],
            );
        }
    }

    #[test]
    fn scales_step_by_1024() {
        for pair in Unit::all().windows(2) {
            assert_eq!(
                pair[0].scale(),
                pair[1].scale() * 1024,
                "{:?} should be 1024x {:?}",
                pair[0],
                pair[1],
            );
        }
    }

    #[test]
    fn for_value_picks_largest_fitting_unit() {
        let cases = [
            (0, Unit::Byte),
            (1, Unit::Byte),
            (1023, Unit::Byte),
            (1024, Unit::Kibibyte),
            ((1 << 20) - 1, Unit::Kibibyte),
            (1 << 20, Unit::Mebibyte),
            (1 << 30, Unit::Gibibyte),
            (1 << 40, Unit::Tebibyte),
            (1 << 50, Unit::Pebibyte),
            (1 << 60, Unit::Exbibyte),
            (u64::MAX, Unit::Exbibyte),
        ];
        for (bytes, expected) in cases {
            assert_eq!(
                Unit::for_value(bytes),
                expected,
                "{} bytes should select {:?}",
                bytes,
                expected,
            );
        }
    }

    #[test]
    fn display_returns_symbol() {
        assert_eq!(Unit::Byte.to_string(), "B");
        assert_eq!(Unit::Kibibyte.to_string(), "KiB");
        assert_eq!(Unit::Exbibyte.to_string(), "EiB");
    }
}
