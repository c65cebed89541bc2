//! Status-bar clock formatting.

use chrono::{DateTime, Local, Offset, TimeZone};

/// 24-hour wall clock, e.g. `14:03:27`.
pub fn format_clock<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    t.format("%H:%M:%S").to_string()
}

/// `UTC+7` style badge. Offsets with minutes keep them: `UTC+5:30`.
pub fn format_utc_offset(offset_seconds: i32) -> String {
    let hours = offset_seconds / 3600;
    let minutes = (offset_seconds.abs() % 3600) / 60;
    if minutes == 0 {
        format!("UTC{:+}", hours)
    } else {
        format!("UTC{:+}:{:02}", hours, minutes)
    }
}

/// The local zone's current offset from UTC, in seconds.
pub fn local_offset_seconds() -> i32 {
    Local::now().offset().fix().local_minus_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn clock_is_24h_zero_padded() {
        let t = Utc.with_ymd_and_hms(2025, 6, 1, 9, 5, 3).unwrap();
        assert_eq!(format_clock(&t), "09:05:03");

        let t = Utc.with_ymd_and_hms(2025, 6, 1, 23, 59, 59).unwrap();
        assert_eq!(format_clock(&t), "23:59:59");
    }

    #[test]
    fn whole_hour_offsets() {
        assert_eq!(format_utc_offset(7 * 3600), "UTC+7");
        assert_eq!(format_utc_offset(0), "UTC+0");
        assert_eq!(format_utc_offset(-3 * 3600), "UTC-3");
    }

    #[test]
    fn half_hour_offsets_keep_minutes() {
        assert_eq!(format_utc_offset(5 * 3600 + 1800), "UTC+5:30");
        assert_eq!(format_utc_offset(-(3 * 3600 + 1800)), "UTC-3:30");
    }
}
