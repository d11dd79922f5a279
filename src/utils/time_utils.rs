use chrono::{DateTime, Datelike};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const MS_IN_W: i64 = Self::MS_IN_D * 7;

    /// Short `month/day` chart label (1-indexed, UTC) for an epoch-millis
    /// timestamp. Out-of-range timestamps fall back to "?".
    pub fn month_day_label(epoch_ms: i64) -> String {
        match DateTime::from_timestamp_millis(epoch_ms) {
            Some(dt) => format!("{}/{}", dt.month(), dt.day()),
            None => "?".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_zero_is_january_first() {
        assert_eq!(TimeUtils::month_day_label(0), "1/1");
    }

    #[test]
    fn one_week_after_epoch() {
        assert_eq!(TimeUtils::month_day_label(TimeUtils::MS_IN_W), "1/8");
    }

    #[test]
    fn month_rollover() {
        // 31 full days after epoch lands on Feb 1
        assert_eq!(TimeUtils::month_day_label(31 * TimeUtils::MS_IN_D), "2/1");
    }

    #[test]
    fn invalid_timestamp_falls_back() {
        assert_eq!(TimeUtils::month_day_label(i64::MAX), "?");
    }
}
