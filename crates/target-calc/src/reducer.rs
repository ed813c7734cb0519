//! 目標配置的編輯歸約
//!
//! `apply(config, edit) -> config'`：不修改輸入，回傳套用編輯後的新配置。
//!
//! 規則：
//! - 瓶頸、人數、班次時間變更時，若瓶頸 > 0，重新播種三個實際目標
//! - 未設定瓶頸時，人數變更只依目前每班目標重算每人目標，班次時間變更不動實際目標
//! - 清除瓶頸不會清空既有的實際目標
//! - 編輯實際欄位只更新自身與下游欄位

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use target_core::{hours_to_minutes, RealField, TargetConfiguration};

use crate::real::{
    on_real_hourly_target_edited, on_real_shift_target_edited, on_real_target_per_head_edited,
    recalculate_real_from_bottleneck,
};

/// 表單上的單一欄位編輯
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TargetEdit {
    /// 單件工時
    MhPerPart(Decimal),
    /// 班次時間（分鐘）
    TimePerShiftMinutes(Decimal),
    /// 班次時間（小時，畫面輸入值）
    TimePerShiftHours(Decimal),
    /// 目標人數
    Headcount(u32),
    /// 瓶頸站週期時間（分鐘）
    BottleneckCycleTime(Decimal),
    /// 實際每小時目標
    RealHourly(u32),
    /// 實際每班目標
    RealShift(u32),
    /// 實際每人目標
    RealPerHead(u32),
}

impl TargetEdit {
    /// 對應的實際目標欄位（輸入欄位回傳 `None`）
    pub fn real_field(&self) -> Option<RealField> {
        match self {
            TargetEdit::RealHourly(_) => Some(RealField::Hourly),
            TargetEdit::RealShift(_) => Some(RealField::Shift),
            TargetEdit::RealPerHead(_) => Some(RealField::PerHead),
            _ => None,
        }
    }

    /// 存檔內容中的欄位名稱
    pub fn field_name(&self) -> &'static str {
        match self {
            TargetEdit::MhPerPart(_) => "mh_per_part",
            TargetEdit::TimePerShiftMinutes(_) | TargetEdit::TimePerShiftHours(_) => {
                "time_per_shift"
            }
            TargetEdit::Headcount(_) => "headcount_target",
            TargetEdit::BottleneckCycleTime(_) => "bottleneck_cycle_time",
            TargetEdit::RealHourly(_) => "real_hourly_target",
            TargetEdit::RealShift(_) => "real_shift_target",
            TargetEdit::RealPerHead(_) => "real_target_per_head",
        }
    }
}

/// 套用單一編輯
pub fn apply(config: &TargetConfiguration, edit: TargetEdit) -> TargetConfiguration {
    let mut next = config.clone();

    match edit {
        TargetEdit::MhPerPart(value) => {
            // 只影響理論目標與效率，兩者皆為推導值
            next.mh_per_part = value;
        }
        TargetEdit::TimePerShiftMinutes(minutes) => {
            next.time_per_shift_minutes = minutes;
            reseed_if_bottleneck(&mut next);
        }
        TargetEdit::TimePerShiftHours(hours) => {
            next.time_per_shift_minutes = hours_to_minutes(hours);
            reseed_if_bottleneck(&mut next);
        }
        TargetEdit::Headcount(headcount) => {
            next.headcount_target = headcount;
            if !reseed_if_bottleneck(&mut next) {
                next.real_target_per_head =
                    on_real_shift_target_edited(next.real_shift_target, headcount)
                        .real_target_per_head;
            }
        }
        TargetEdit::BottleneckCycleTime(minutes) => {
            next.bottleneck_cycle_time_minutes = minutes;
            reseed_if_bottleneck(&mut next);
        }
        TargetEdit::RealHourly(hourly) => {
            let outcome = on_real_hourly_target_edited(
                hourly,
                next.time_per_shift_minutes,
                next.headcount_target,
            );
            next.real_hourly_target = hourly;
            next.real_shift_target = outcome.real_shift_target;
            next.real_target_per_head = outcome.real_target_per_head;
            next.last_edited = Some(RealField::Hourly);
        }
        TargetEdit::RealShift(shift) => {
            let outcome = on_real_shift_target_edited(shift, next.headcount_target);
            next.real_shift_target = shift;
            next.real_target_per_head = outcome.real_target_per_head;
            next.last_edited = Some(RealField::Shift);
        }
        TargetEdit::RealPerHead(per_head) => {
            on_real_target_per_head_edited(per_head);
            next.real_target_per_head = per_head;
            next.last_edited = Some(RealField::PerHead);
        }
    }

    tracing::debug!(
        field = edit.field_name(),
        recomputed = ?edit.real_field().map(RealField::downstream),
        real_hourly = next.real_hourly_target,
        real_shift = next.real_shift_target,
        real_per_head = next.real_target_per_head,
        "套用目標編輯"
    );

    next
}

/// 依序套用多個編輯
pub fn apply_all<I>(config: &TargetConfiguration, edits: I) -> TargetConfiguration
where
    I: IntoIterator<Item = TargetEdit>,
{
    edits
        .into_iter()
        .fold(config.clone(), |current, edit| apply(&current, edit))
}

/// 瓶頸 > 0 時重新播種實際目標，回傳是否有播種
fn reseed_if_bottleneck(config: &mut TargetConfiguration) -> bool {
    if !config.has_bottleneck() {
        return false;
    }

    let seeded = recalculate_real_from_bottleneck(
        config.bottleneck_cycle_time_minutes,
        config.time_per_shift_minutes,
        config.headcount_target,
    );
    config.real_hourly_target = seeded.real_hourly_target;
    config.real_shift_target = seeded.real_shift_target;
    config.real_target_per_head = seeded.real_target_per_head;
    config.last_edited = None;
    true
}
