//! 班次時間換算
//!
//! 畫面上的班次時間以小時顯示（例如 7.75），存檔與計算一律使用分鐘。

use rust_decimal::{Decimal, RoundingStrategy};

/// 每小時分鐘數
pub const MINUTES_PER_HOUR: u32 = 60;

/// 新料號的預設班次時間（7.75 小時）
pub const DEFAULT_SHIFT_MINUTES: u32 = 465;

/// 小時轉分鐘，四捨五入到整數分鐘；溢位時回傳 0（視為未輸入）
pub fn hours_to_minutes(hours: Decimal) -> Decimal {
    hours
        .checked_mul(Decimal::from(MINUTES_PER_HOUR))
        .map(|minutes| minutes.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .unwrap_or(Decimal::ZERO)
}

/// 分鐘轉小時
pub fn minutes_to_hours(minutes: Decimal) -> Decimal {
    minutes / Decimal::from(MINUTES_PER_HOUR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Decimal::new(775, 2), Decimal::from(465))]
    #[case(Decimal::from(8), Decimal::from(480))]
    #[case(Decimal::ZERO, Decimal::ZERO)]
    // 7.7583 h = 465.498 min
    #[case(Decimal::new(77583, 4), Decimal::from(465))]
    // 7.7584 h = 465.504 min
    #[case(Decimal::new(77584, 4), Decimal::from(466))]
    fn test_hours_to_minutes(#[case] hours: Decimal, #[case] expected: Decimal) {
        assert_eq!(hours_to_minutes(hours), expected);
    }

    #[test]
    fn test_hours_to_minutes_overflow() {
        assert_eq!(hours_to_minutes(Decimal::MAX), Decimal::ZERO);
        assert_eq!(hours_to_minutes(Decimal::MIN), Decimal::ZERO);
    }

    #[test]
    fn test_minutes_to_hours() {
        assert_eq!(minutes_to_hours(Decimal::from(465)), Decimal::new(775, 2));
        assert_eq!(minutes_to_hours(Decimal::from(DEFAULT_SHIFT_MINUTES)), Decimal::new(775, 2));
    }
}
