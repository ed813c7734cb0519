//! 理論目標（100% 效率）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use target_core::MINUTES_PER_HOUR;

use crate::rounding::{ratio, round_count, round_product};

/// 理論目標計算結果
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TheoreticalTargets {
    /// 每人每班目標（未取整，供後續計算使用）
    pub target_per_head_per_shift: Decimal,
    /// 每班目標
    pub shift_target: u32,
    /// 每小時目標
    pub hourly_target: u32,
}

impl TheoreticalTargets {
    /// 每人每班目標的顯示值
    pub fn target_per_head_display(&self) -> u32 {
        round_count(self.target_per_head_per_shift)
    }
}

/// 計算理論目標
///
/// 單件工時或班次時間 ≤ 0 視為輸入未完成，回傳全 0。
/// 每班目標使用未取整的每人目標相乘後再取整。
pub fn compute_theoretical_targets(
    mh_per_part: Decimal,
    time_per_shift_minutes: Decimal,
    headcount_target: u32,
) -> TheoreticalTargets {
    if time_per_shift_minutes <= Decimal::ZERO {
        return TheoreticalTargets::default();
    }

    let Some(target_per_head_per_shift) = ratio(time_per_shift_minutes, mh_per_part) else {
        return TheoreticalTargets::default();
    };

    let shift_target = round_product(target_per_head_per_shift, Decimal::from(headcount_target));

    let shift_hours = time_per_shift_minutes / Decimal::from(MINUTES_PER_HOUR);
    let hourly_target = ratio(Decimal::from(shift_target), shift_hours)
        .map(round_count)
        .unwrap_or(0);

    TheoreticalTargets {
        target_per_head_per_shift,
        shift_target,
        hourly_target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_theoretical_reference_case() {
        let targets = compute_theoretical_targets(Decimal::new(55, 2), Decimal::from(465), 2);

        // 465 / 0.55 = 845.4545...
        assert!(targets.target_per_head_per_shift > Decimal::new(8454545, 4));
        assert!(targets.target_per_head_per_shift < Decimal::new(8454546, 4));
        assert_eq!(targets.target_per_head_display(), 845);
        // round(845.4545 × 2) = round(1690.909) = 1691
        assert_eq!(targets.shift_target, 1691);
        // round(1691 / 7.75) = round(218.19) = 218
        assert_eq!(targets.hourly_target, 218);
    }

    #[test]
    fn test_shift_target_uses_unrounded_per_head() {
        // 每人目標 100 / 0.3 = 333.33，取整後再乘 3 會得到 999，正確應為 1000
        let targets = compute_theoretical_targets(Decimal::new(3, 1), Decimal::from(100), 3);
        assert_eq!(targets.target_per_head_display(), 333);
        assert_eq!(targets.shift_target, 1000);
    }

    #[rstest]
    #[case(Decimal::ZERO, Decimal::from(465), 2)]
    #[case(Decimal::from(-1), Decimal::from(465), 2)]
    #[case(Decimal::new(55, 2), Decimal::ZERO, 2)]
    fn test_incomplete_input_yields_zero(
        #[case] mh_per_part: Decimal,
        #[case] minutes: Decimal,
        #[case] headcount: u32,
    ) {
        let targets = compute_theoretical_targets(mh_per_part, minutes, headcount);
        assert_eq!(targets, TheoreticalTargets::default());
    }

    #[test]
    fn test_zero_headcount() {
        let targets = compute_theoretical_targets(Decimal::new(55, 2), Decimal::from(465), 0);

        assert_eq!(targets.target_per_head_display(), 845);
        assert_eq!(targets.shift_target, 0);
        assert_eq!(targets.hourly_target, 0);
    }
}
