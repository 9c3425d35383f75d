const UNITS: &[&str] = &["B", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Formats a byte count the way `pretty-bytes` does: SI units, three
/// significant digits, trailing zeros dropped.
pub fn pretty_size(bytes: u64) -> String {
    if bytes < 1 {
        return "0 B".to_string();
    }

    let mut exponent = 0;
    let mut scaled = bytes;
    while scaled >= 1000 && exponent < UNITS.len() - 1 {
        scaled /= 1000;
        exponent += 1;
    }

    let value = bytes as f64 / 1000f64.powi(exponent as i32);
    let integer_digits = value.trunc().to_string().len();
    let decimals = 3usize.saturating_sub(integer_digits);
    let formatted = format!("{:.*}", decimals, value);
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        &formatted
    };

    format!("{} {}", trimmed, UNITS[exponent])
}
