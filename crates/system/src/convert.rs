/// Parse a base-10 integer the way `strtol` does on a whole field: leading
/// whitespace and a sign are accepted, anything left over is a failure.
pub fn parse_int(raw: &str) -> Option<i64> {
    raw.trim_start().parse().ok()
}

/// `num / den * 100`, or `None` when the denominator is zero.
pub fn percent(num: i64, den: i64) -> Option<f64> {
    (den != 0).then(|| num as f64 / den as f64 * 100.0)
}

/// Scale a raw kernel reading down to display units.
pub fn scaled(raw: Option<i64>, divisor: f64) -> Option<f64> {
    raw.map(|v| v as f64 / divisor)
}
