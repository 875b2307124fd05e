//! Utility functions for common operations.

/// Format elapsed milliseconds as HH:MM:SS:CC
///
/// Negative input is treated as zero. The hours field is padded to two
/// digits but never truncated, so a run of 100 hours renders as
/// `100:00:00:00`.
pub fn format_run_time(elapsed_ms: i64) -> String {
    let ms = elapsed_ms.max(0);
    let total_secs = ms / 1000;
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    let centis = (ms % 1000) / 10;
    format!("{:02}:{:02}:{:02}:{:02}", hours, mins, secs, centis)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches_display_pattern(s: &str) -> bool {
        let fields: Vec<&str> = s.split(':').collect();
        fields.len() == 4
            && fields.iter().all(|f| !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()))
            && fields[0].len() >= 2
            && fields[1..].iter().all(|f| f.len() == 2)
    }

    #[test]
    fn test_format_run_time_zero() {
        assert_eq!(format_run_time(0), "00:00:00:00");
    }

    #[test]
    fn test_format_run_time_minute_second_centis() {
        assert_eq!(format_run_time(61 * 1000 + 250), "00:01:01:25");
    }

    #[test]
    fn test_format_run_time_hour_minute_second() {
        assert_eq!(format_run_time(3661 * 1000), "01:01:01:00");
    }

    #[test]
    fn test_format_run_time_truncates_sub_centisecond() {
        assert_eq!(format_run_time(999), "00:00:00:99");
        assert_eq!(format_run_time(1009), "00:00:01:00");
    }

    #[test]
    fn test_format_run_time_negative_clamps() {
        assert_eq!(format_run_time(-5), format_run_time(0));
        assert_eq!(format_run_time(i64::MIN), "00:00:00:00");
    }

    #[test]
    fn test_format_run_time_hours_not_capped() {
        assert_eq!(format_run_time(100 * 3600 * 1000), "100:00:00:00");
    }

    #[test]
    fn test_format_run_time_shape() {
        let samples = [
            0,
            9,
            10,
            59_999,
            60_000,
            3_599_990,
            86_400_000,
            359_999_999,
            360_000_000,
            i64::MAX,
        ];
        for t in samples {
            let s = format_run_time(t);
            assert!(matches_display_pattern(&s), "{} -> {}", t, s);
        }
        assert_eq!(format_run_time(359_999_999).len(), 11);
    }
}
