//! 料號目標配置模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::part::PartRecord;
use crate::shift::{hours_to_minutes, minutes_to_hours, DEFAULT_SHIFT_MINUTES};
use crate::{Result, TargetError};

/// 可編輯的實際目標欄位
///
/// 依賴順序為 `Hourly -> Shift -> PerHead`，編輯某欄位只會更新其下游欄位。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RealField {
    /// 實際每小時目標
    Hourly,
    /// 實際每班目標
    Shift,
    /// 實際每人目標
    PerHead,
}

impl RealField {
    /// 依賴鏈上位於此欄位之後的欄位
    pub fn downstream(self) -> &'static [RealField] {
        match self {
            RealField::Hourly => &[RealField::Shift, RealField::PerHead],
            RealField::Shift => &[RealField::PerHead],
            RealField::PerHead => &[],
        }
    }
}

/// 料號目標配置
///
/// 開啟料號的新增或編輯表單時建立，存檔或取消後即丟棄，伺服器才是正式資料來源。
/// 理論目標不存於此結構，每次都由輸入欄位重新推導。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetConfiguration {
    /// 單件工時（MH/件）
    pub mh_per_part: Decimal,

    /// 班次時間（分鐘）
    pub time_per_shift_minutes: Decimal,

    /// 目標人數
    pub headcount_target: u32,

    /// 瓶頸站週期時間（分鐘），0 表示未設定
    pub bottleneck_cycle_time_minutes: Decimal,

    /// 實際每小時目標（可編輯）
    pub real_hourly_target: u32,

    /// 實際每班目標（可編輯）
    pub real_shift_target: u32,

    /// 實際每人目標（可編輯）
    pub real_target_per_head: u32,

    /// 最後一次由使用者編輯的實際欄位
    pub last_edited: Option<RealField>,
}

impl TargetConfiguration {
    /// 創建新的目標配置（預設班次 7.75 小時）
    pub fn new() -> Self {
        Self {
            mh_per_part: Decimal::ZERO,
            time_per_shift_minutes: Decimal::from(DEFAULT_SHIFT_MINUTES),
            headcount_target: 0,
            bottleneck_cycle_time_minutes: Decimal::ZERO,
            real_hourly_target: 0,
            real_shift_target: 0,
            real_target_per_head: 0,
            last_edited: None,
        }
    }

    /// 由伺服器回傳的料號記錄建立配置，缺少的欄位使用預設值
    pub fn from_record(record: &PartRecord) -> Self {
        let defaults = Self::new();
        Self {
            mh_per_part: record.mh_per_part.unwrap_or(defaults.mh_per_part),
            time_per_shift_minutes: record
                .time_per_shift
                .unwrap_or(defaults.time_per_shift_minutes),
            headcount_target: record.headcount_target.unwrap_or(0),
            bottleneck_cycle_time_minutes: record
                .bottleneck_cycle_time
                .unwrap_or(Decimal::ZERO),
            real_hourly_target: record.real_hourly_target.unwrap_or(0),
            real_shift_target: record.real_shift_target.unwrap_or(0),
            real_target_per_head: record.real_target_per_head.unwrap_or(0),
            last_edited: None,
        }
    }

    /// 建構器模式：設置單件工時
    pub fn with_mh_per_part(mut self, mh_per_part: Decimal) -> Self {
        self.mh_per_part = mh_per_part;
        self
    }

    /// 建構器模式：設置班次時間（分鐘）
    pub fn with_time_per_shift_minutes(mut self, minutes: Decimal) -> Self {
        self.time_per_shift_minutes = minutes;
        self
    }

    /// 建構器模式：以小時設置班次時間
    pub fn with_time_per_shift_hours(mut self, hours: Decimal) -> Self {
        self.time_per_shift_minutes = hours_to_minutes(hours);
        self
    }

    /// 建構器模式：設置目標人數
    pub fn with_headcount_target(mut self, headcount: u32) -> Self {
        self.headcount_target = headcount;
        self
    }

    /// 建構器模式：設置瓶頸站週期時間（分鐘）
    pub fn with_bottleneck_cycle_time(mut self, minutes: Decimal) -> Self {
        self.bottleneck_cycle_time_minutes = minutes;
        self
    }

    /// 建構器模式：直接設置三個實際目標（不做任何重算）
    pub fn with_real_targets(mut self, hourly: u32, shift: u32, per_head: u32) -> Self {
        self.real_hourly_target = hourly;
        self.real_shift_target = shift;
        self.real_target_per_head = per_head;
        self
    }

    /// 班次時間（小時），供畫面顯示
    pub fn time_per_shift_hours(&self) -> Decimal {
        minutes_to_hours(self.time_per_shift_minutes)
    }

    /// 是否設定了瓶頸站週期時間
    pub fn has_bottleneck(&self) -> bool {
        self.bottleneck_cycle_time_minutes > Decimal::ZERO
    }

    /// 檢查輸入是否足以推導理論目標
    pub fn is_complete(&self) -> bool {
        self.mh_per_part > Decimal::ZERO && self.time_per_shift_minutes > Decimal::ZERO
    }

    /// 存檔前的表單檢查：必要數值欄位不可為空或 ≤ 0
    ///
    /// 計算引擎本身從不呼叫此方法。
    pub fn validate_for_save(&self) -> Result<()> {
        if self.mh_per_part <= Decimal::ZERO {
            return Err(TargetError::NonPositive {
                field: "mh_per_part",
                value: self.mh_per_part.to_string(),
            });
        }

        if self.time_per_shift_minutes <= Decimal::ZERO {
            return Err(TargetError::NonPositive {
                field: "time_per_shift",
                value: self.time_per_shift_minutes.to_string(),
            });
        }

        if self.headcount_target == 0 {
            return Err(TargetError::NonPositive {
                field: "headcount_target",
                value: self.headcount_target.to_string(),
            });
        }

        if self.bottleneck_cycle_time_minutes < Decimal::ZERO {
            return Err(TargetError::Other(format!(
                "瓶頸站週期時間不可為負值: {}",
                self.bottleneck_cycle_time_minutes
            )));
        }

        Ok(())
    }
}

impl Default for TargetConfiguration {
    fn default() -> Self {
        Self::new()
    }
}
