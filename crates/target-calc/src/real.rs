//! 實際目標（依瓶頸站推導，可由使用者編輯）
//!
//! 依賴鏈：每小時 → 每班 → 每人。編輯某欄位只重算下游，不回寫上游。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use target_core::MINUTES_PER_HOUR;

use crate::rounding::{ratio, round_count, round_product};

/// 三個實際目標欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RealTargets {
    pub real_hourly_target: u32,
    pub real_shift_target: u32,
    pub real_target_per_head: u32,
}

/// 編輯每小時目標後的下游結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HourlyEditOutcome {
    pub real_shift_target: u32,
    pub real_target_per_head: u32,
}

/// 編輯每班目標後的下游結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShiftEditOutcome {
    pub real_target_per_head: u32,
}

/// 編輯每人目標後的下游結果（無下游欄位）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PerHeadEditOutcome;

/// 依瓶頸站週期時間重新播種三個實際目標
///
/// 瓶頸 ≤ 0 時回傳全 0。
pub fn recalculate_real_from_bottleneck(
    bottleneck_cycle_time_minutes: Decimal,
    time_per_shift_minutes: Decimal,
    headcount_target: u32,
) -> RealTargets {
    let Some(per_hour) = ratio(Decimal::from(MINUTES_PER_HOUR), bottleneck_cycle_time_minutes)
    else {
        return RealTargets::default();
    };

    let real_hourly_target = round_count(per_hour);
    let downstream =
        on_real_hourly_target_edited(real_hourly_target, time_per_shift_minutes, headcount_target);

    RealTargets {
        real_hourly_target,
        real_shift_target: downstream.real_shift_target,
        real_target_per_head: downstream.real_target_per_head,
    }
}

/// 使用者修改每小時目標：重算每班與每人目標
pub fn on_real_hourly_target_edited(
    new_hourly: u32,
    time_per_shift_minutes: Decimal,
    headcount_target: u32,
) -> HourlyEditOutcome {
    let real_shift_target = if time_per_shift_minutes > Decimal::ZERO {
        let shift_hours = time_per_shift_minutes / Decimal::from(MINUTES_PER_HOUR);
        round_product(Decimal::from(new_hourly), shift_hours)
    } else {
        0
    };

    let per_head = on_real_shift_target_edited(real_shift_target, headcount_target);

    HourlyEditOutcome {
        real_shift_target,
        real_target_per_head: per_head.real_target_per_head,
    }
}

/// 使用者修改每班目標：只重算每人目標，不動每小時目標
pub fn on_real_shift_target_edited(new_shift: u32, headcount_target: u32) -> ShiftEditOutcome {
    let real_target_per_head = ratio(Decimal::from(new_shift), Decimal::from(headcount_target))
        .map(round_count)
        .unwrap_or(0);

    ShiftEditOutcome {
        real_target_per_head,
    }
}

/// 使用者修改每人目標：位於依賴鏈末端，沒有下游欄位
pub fn on_real_target_per_head_edited(_new_value: u32) -> PerHeadEditOutcome {
    PerHeadEditOutcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_seed_from_bottleneck() {
        let real = recalculate_real_from_bottleneck(Decimal::new(27, 2), Decimal::from(465), 2);

        // round(60 / 0.27) = 222
        assert_eq!(real.real_hourly_target, 222);
        // round(222 × 7.75) = round(1720.5) = 1721
        assert_eq!(real.real_shift_target, 1721);
        // round(1721 / 2) = round(860.5) = 861
        assert_eq!(real.real_target_per_head, 861);
    }

    #[test]
    fn test_seed_without_bottleneck() {
        assert_eq!(
            recalculate_real_from_bottleneck(Decimal::ZERO, Decimal::from(465), 2),
            RealTargets::default()
        );
        assert_eq!(
            recalculate_real_from_bottleneck(Decimal::from(-1), Decimal::from(465), 2),
            RealTargets::default()
        );
    }

    #[test]
    fn test_seed_with_zero_headcount() {
        let real = recalculate_real_from_bottleneck(Decimal::new(27, 2), Decimal::from(465), 0);

        assert_eq!(real.real_hourly_target, 222);
        assert_eq!(real.real_shift_target, 1721);
        assert_eq!(real.real_target_per_head, 0);
    }

    #[test]
    fn test_hourly_edit_cascades() {
        let outcome = on_real_hourly_target_edited(200, Decimal::from(480), 4);

        assert_eq!(outcome.real_shift_target, 1600);
        assert_eq!(outcome.real_target_per_head, 400);
    }

    #[test]
    fn test_hourly_edit_without_shift_time() {
        let outcome = on_real_hourly_target_edited(200, Decimal::ZERO, 4);
        assert_eq!(outcome, HourlyEditOutcome::default());
    }

    #[test]
    fn test_shift_edit() {
        assert_eq!(on_real_shift_target_edited(1721, 2).real_target_per_head, 861);
        assert_eq!(on_real_shift_target_edited(1000, 3).real_target_per_head, 333);
        assert_eq!(on_real_shift_target_edited(1721, 0).real_target_per_head, 0);
    }

    #[test]
    fn test_per_head_edit_is_terminal() {
        assert_eq!(on_real_target_per_head_edited(900), PerHeadEditOutcome);
    }

    proptest! {
        #[test]
        fn prop_seed_is_idempotent(
            bottleneck_hundredths in 0u32..10_000,
            minutes in 0u32..1_440,
            headcount in 0u32..200,
        ) {
            let bottleneck = Decimal::new(i64::from(bottleneck_hundredths), 2);
            let minutes = Decimal::from(minutes);

            let first = recalculate_real_from_bottleneck(bottleneck, minutes, headcount);
            let second = recalculate_real_from_bottleneck(bottleneck, minutes, headcount);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_seed_matches_hourly_cascade(
            bottleneck_hundredths in 1u32..10_000,
            minutes in 1u32..1_440,
            headcount in 0u32..200,
        ) {
            let bottleneck = Decimal::new(i64::from(bottleneck_hundredths), 2);
            let minutes = Decimal::from(minutes);

            let seeded = recalculate_real_from_bottleneck(bottleneck, minutes, headcount);
            let cascade = on_real_hourly_target_edited(seeded.real_hourly_target, minutes, headcount);

            prop_assert_eq!(seeded.real_shift_target, cascade.real_shift_target);
            prop_assert_eq!(seeded.real_target_per_head, cascade.real_target_per_head);
        }
    }
}
