//! 料號記錄與存檔內容
//!
//! 後端 API 正在從 PascalCase 舊欄位遷移到 snake_case 新欄位，
//! 讀取時兩種名稱都接受，輸出一律使用 snake_case。

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::config::TargetConfiguration;
use crate::{Result, TargetError};

/// 料號記錄（REST API 回傳）
///
/// 讀取時同一欄位的新舊名稱可同時出現，取第一個非 null 的值，snake_case 優先。
/// 整數欄位接受小數，四捨五入後存為計數。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PartRecord {
    /// 料號主鍵（新增時為空）
    pub id: Option<i64>,

    /// 料號
    pub part_number: String,

    /// 品名
    pub designation: Option<String>,

    /// 專案
    pub project: Option<String>,

    /// 圖片路徑
    pub picture: Option<String>,

    /// 單件工時
    pub mh_per_part: Option<Decimal>,

    /// 班次時間（分鐘）
    pub time_per_shift: Option<Decimal>,

    /// 目標人數
    pub headcount_target: Option<u32>,

    /// 瓶頸站週期時間（分鐘）
    pub bottleneck_cycle_time: Option<Decimal>,

    pub real_hourly_target: Option<u32>,

    pub real_shift_target: Option<u32>,

    pub real_target_per_head: Option<u32>,

    /// 理論每班目標（舊欄位）
    pub shift_target: Option<u32>,

    /// 效率（%）
    pub efficiency: Option<u32>,
}

impl<'de> Deserialize<'de> for PartRecord {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_fields(&fields).map_err(de::Error::custom)
    }
}

impl PartRecord {
    /// 創建新的料號記錄
    pub fn new(part_number: String) -> Self {
        Self {
            part_number,
            ..Default::default()
        }
    }

    /// 從 API 回傳的 JSON 解析
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 解析料號列表
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    fn from_fields(fields: &Map<String, Value>) -> serde_json::Result<Self> {
        Ok(Self {
            id: field(fields, &["id", "Id", "ID"])?,
            part_number: field(fields, &["part_number", "PartNumber", "Part_Number"])?
                .unwrap_or_default(),
            designation: field(fields, &["designation", "Designation"])?,
            project: field(fields, &["project", "Project"])?,
            picture: field(fields, &["picture", "Picture"])?,
            mh_per_part: field(fields, &["mh_per_part", "MH_per_part", "MhPerPart"])?,
            time_per_shift: field(fields, &["time_per_shift", "Time_per_shift", "TimePerShift"])?,
            headcount_target: count_field(
                fields,
                &["headcount_target", "Headcount_target", "HeadcountTarget"],
            )?,
            bottleneck_cycle_time: field(
                fields,
                &["bottleneck_cycle_time", "Bottleneck_cycle_time", "BottleneckCycleTime"],
            )?,
            real_hourly_target: count_field(fields, &["real_hourly_target", "RealHourlyTarget"])?,
            real_shift_target: count_field(fields, &["real_shift_target", "RealShiftTarget"])?,
            real_target_per_head: count_field(
                fields,
                &["real_target_per_head", "RealTargetPerHead"],
            )?,
            shift_target: count_field(fields, &["shift_target", "Shift_target", "ShiftTarget"])?,
            efficiency: count_field(fields, &["efficiency", "Efficiency"])?,
        })
    }

    /// 建構器模式：設置品名
    pub fn with_designation(mut self, designation: String) -> Self {
        self.designation = Some(designation);
        self
    }

    /// 建構器模式：設置專案
    pub fn with_project(mut self, project: String) -> Self {
        self.project = Some(project);
        self
    }

    /// 是否為尚未存檔的新料號
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// 檢查識別欄位
    pub fn validate(&self) -> Result<()> {
        if self.part_number.trim().is_empty() {
            return Err(TargetError::MissingField("part_number"));
        }
        Ok(())
    }
}

/// 依序查找欄位名稱，取第一個非 null 的值
fn field<T>(fields: &Map<String, Value>, names: &[&str]) -> serde_json::Result<Option<T>>
where
    T: DeserializeOwned,
{
    names
        .iter()
        .filter_map(|name| fields.get(*name))
        .find(|value| !value.is_null())
        .map(|value| T::deserialize(value))
        .transpose()
}

/// 計數欄位：負數為 0，四捨五入，超出範圍取 `u32::MAX`
fn count_field(fields: &Map<String, Value>, names: &[&str]) -> serde_json::Result<Option<u32>> {
    Ok(field::<Decimal>(fields, names)?.map(|value| {
        if value <= Decimal::ZERO {
            return 0;
        }
        value
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .unwrap_or(u32::MAX)
    }))
}

/// 新增/更新料號時送出的 JSON 內容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub part_number: String,
    pub designation: Option<String>,
    pub project: Option<String>,
    pub picture: Option<String>,
    pub mh_per_part: f64,
    /// 分鐘
    pub time_per_shift: u32,
    pub headcount_target: u32,
    /// 分鐘
    pub bottleneck_cycle_time: f64,
    pub real_hourly_target: u32,
    pub real_shift_target: u32,
    pub real_target_per_head: u32,
    pub shift_target: u32,
    pub efficiency: u32,
}

impl PartPayload {
    /// 組合存檔內容
    ///
    /// `shift_target` 與 `efficiency` 由呼叫端（計算引擎）提供，
    /// 送出前會先做表單檢查。
    pub fn build(
        record: &PartRecord,
        config: &TargetConfiguration,
        shift_target: u32,
        efficiency: u32,
    ) -> Result<Self> {
        record.validate()?;
        config.validate_for_save()?;

        let time_per_shift = config
            .time_per_shift_minutes
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .ok_or_else(|| {
                TargetError::Other(format!(
                    "班次時間超出範圍: {}",
                    config.time_per_shift_minutes
                ))
            })?;

        Ok(Self {
            id: record.id,
            part_number: record.part_number.trim().to_string(),
            designation: record.designation.clone(),
            project: record.project.clone(),
            picture: record.picture.clone(),
            mh_per_part: config.mh_per_part.to_f64().unwrap_or_default(),
            time_per_shift,
            headcount_target: config.headcount_target,
            bottleneck_cycle_time: config
                .bottleneck_cycle_time_minutes
                .to_f64()
                .unwrap_or_default(),
            real_hourly_target: config.real_hourly_target,
            real_shift_target: config.real_shift_target,
            real_target_per_head: config.real_target_per_head,
            shift_target,
            efficiency,
        })
    }

    /// 序列化為 JSON 字串
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
