const BINARY_BASE: f64 = 1024.0;
const IEC_SYMBOLS: [&str; 5] = ["", "Ki", "Mi", "Gi", "Ti"];

/// Formats a byte count with one decimal and an IEC prefix, e.g. `15.6 GiB`.
/// Values beyond the tebibyte range stay in `TiB`.
pub fn format_bytes_human(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut exponent = 0;
    while size >= BINARY_BASE && exponent < IEC_SYMBOLS.len() - 1 {
        size /= BINARY_BASE;
        exponent += 1;
    }
    format!("{:.1} {}B", size, IEC_SYMBOLS[exponent])
}

pub fn format_percentage(percent: f64, pct_mark: &str) -> String {
    format!("{percent:.1}{pct_mark}")
}

/// `100 * part / total` without clamping; a zero total yields NaN or infinity.
pub fn percent_of(part: i64, total: i64) -> f64 {
    100.0 * part as f64 / total as f64
}
