// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

const SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Format a byte count into a human-readable size string.
///
/// Two decimal places with trailing zeros stripped, so `1536` renders as
/// `"1.5 KB"` and `1024` as `"1 KB"`. Counts past the end of the unit table
/// stay in the last unit.
#[inline]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return String::from("0 Bytes");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[unit])
}
