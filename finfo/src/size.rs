//! Human-readable byte-size formatting.
//!
//! Uses SI (decimal, 1000-based) units, not binary (1024-based) units:
//! `1000` bytes is `1.0 kB`, not `1000 B` or `0.98 KiB`.

/// Format a byte count using SI units.
///
/// Values under 1000 render as an exact integer (`"999 B"`); larger values
/// render with one decimal place and the unit prefix advancing through
/// k, M, G, T, P, E.
///
/// Total function: every input has a result and no failure mode exists.
///
/// # Examples
///
/// ```
/// use finfo::size::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(999), "999 B");
/// assert_eq!(format_size(1000), "1.0 kB");
/// assert_eq!(format_size(1_500_000), "1.5 MB");
/// ```
#[must_use]
pub fn format_size(bytes: u64) -> String {
    const UNIT: u64 = 1000;
    const PREFIXES: [char; 6] = ['k', 'M', 'G', 'T', 'P', 'E'];

    if bytes < UNIT {
        return format!("{bytes} B");
    }

    let mut divisor = UNIT;
    let mut exponent = 0;
    let mut remaining = bytes / UNIT;
    while remaining >= UNIT {
        divisor *= UNIT;
        exponent += 1;
        remaining /= UNIT;
    }

    #[allow(clippy::cast_precision_loss)]
    let value = bytes as f64 / divisor as f64;
    format!("{value:.1} {}B", PREFIXES[exponent])
}
