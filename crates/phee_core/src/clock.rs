//! Elapsed-time display.

/// Formats seconds as zero-padded `HH:MM:SS`.
///
/// Hours are not wrapped: 100 hours prints as `100:00:00`.
pub fn format_elapsed(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
