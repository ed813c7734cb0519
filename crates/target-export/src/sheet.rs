//! 料號目標表資料列

use rayon::prelude::*;
use rust_decimal::Decimal;
use target_calc::TargetSummary;
use target_core::{PartRecord, TargetConfiguration};

/// 目標表的一列
#[derive(Debug, Clone, PartialEq)]
pub struct TargetSheetRow {
    pub part_number: String,
    pub designation: String,
    pub project: String,
    pub mh_per_part: Decimal,
    pub time_per_shift_hours: Decimal,
    pub headcount_target: u32,
    pub bottleneck_cycle_time: Decimal,
    pub target_per_head_per_shift: u32,
    pub shift_target: u32,
    pub hourly_target: u32,
    pub real_hourly_target: u32,
    pub real_shift_target: u32,
    pub real_target_per_head: u32,
    pub real_efficiency_percent: u32,
}

impl TargetSheetRow {
    /// 由料號記錄與其目標快照組成一列
    pub fn new(record: &PartRecord, config: &TargetConfiguration, summary: &TargetSummary) -> Self {
        Self {
            part_number: record.part_number.clone(),
            designation: record.designation.clone().unwrap_or_default(),
            project: record.project.clone().unwrap_or_default(),
            mh_per_part: config.mh_per_part,
            time_per_shift_hours: config.time_per_shift_hours().normalize(),
            headcount_target: config.headcount_target,
            bottleneck_cycle_time: config.bottleneck_cycle_time_minutes,
            target_per_head_per_shift: summary.theoretical.target_per_head_display(),
            shift_target: summary.theoretical.shift_target,
            hourly_target: summary.theoretical.hourly_target,
            real_hourly_target: summary.real.real_hourly_target,
            real_shift_target: summary.real.real_shift_target,
            real_target_per_head: summary.real.real_target_per_head,
            real_efficiency_percent: summary.real_efficiency_percent,
        }
    }

    /// 轉為 CSV 欄位字串
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.part_number.clone(),
            self.designation.clone(),
            self.project.clone(),
            self.mh_per_part.to_string(),
            self.time_per_shift_hours.to_string(),
            self.headcount_target.to_string(),
            self.bottleneck_cycle_time.to_string(),
            self.target_per_head_per_shift.to_string(),
            self.shift_target.to_string(),
            self.hourly_target.to_string(),
            self.real_hourly_target.to_string(),
            self.real_shift_target.to_string(),
            self.real_target_per_head.to_string(),
            self.real_efficiency_percent.to_string(),
        ]
    }
}

/// 為每個料號計算目標並組成資料列，保持輸入順序
pub fn build_rows(records: &[PartRecord]) -> Vec<TargetSheetRow> {
    tracing::debug!("建立目標表：料號 {} 筆", records.len());

    records
        .par_iter()
        .map(|record| {
            let config = TargetConfiguration::from_record(record);
            let summary = TargetSummary::evaluate(&config);
            TargetSheetRow::new(record, &config, &summary)
        })
        .collect()
}
