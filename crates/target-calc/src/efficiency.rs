//! 實際效率

use rust_decimal::Decimal;

use crate::rounding::{ratio, round_count};

/// 計算實際效率百分比
///
/// `round((每班目標 × 單件工時) / (人數 × 班次分鐘) × 100)`，
/// 每班目標、人數或班次時間 ≤ 0 時回傳 0。效率永遠由推導而來，不可編輯。
pub fn compute_real_efficiency(
    real_shift_target: u32,
    mh_per_part: Decimal,
    headcount_target: u32,
    time_per_shift_minutes: Decimal,
) -> u32 {
    if real_shift_target == 0 || headcount_target == 0 || time_per_shift_minutes <= Decimal::ZERO {
        return 0;
    }

    let Some(earned) = Decimal::from(real_shift_target).checked_mul(mh_per_part) else {
        return 0;
    };
    let Some(available) = Decimal::from(headcount_target).checked_mul(time_per_shift_minutes)
    else {
        return 0;
    };

    ratio(earned, available)
        .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
        .map(round_count)
        .unwrap_or(0)
}
