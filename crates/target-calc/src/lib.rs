//! # Target Calculation Engine
//!
//! 依單件工時、人數、班次時間與瓶頸站週期時間推導產線目標。
//! 所有計算都是純函式，在欄位變更時同步重算；不完整的輸入回傳 0，不拋出錯誤。

pub mod efficiency;
pub mod real;
pub mod reducer;
pub mod rounding;
pub mod session;
pub mod theoretical;
pub mod tracking;

// Re-export 主要類型
pub use efficiency::compute_real_efficiency;
pub use real::{
    on_real_hourly_target_edited, on_real_shift_target_edited, on_real_target_per_head_edited,
    recalculate_real_from_bottleneck, RealTargets,
};
pub use reducer::{apply, apply_all, TargetEdit};
pub use session::TargetSession;
pub use theoretical::{compute_theoretical_targets, TheoreticalTargets};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use target_core::TargetConfiguration;

/// 目標計算快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSummary {
    /// 理論目標（100% 效率）
    pub theoretical: TheoreticalTargets,

    /// 實際目標（配置中的目前值）
    pub real: RealTargets,

    /// 實際效率（%）
    pub real_efficiency_percent: u32,

    /// 輸入不完整的提示
    pub warnings: Vec<TargetWarning>,
}

impl TargetSummary {
    /// 由配置推導完整快照
    pub fn evaluate(config: &TargetConfiguration) -> Self {
        let theoretical = compute_theoretical_targets(
            config.mh_per_part,
            config.time_per_shift_minutes,
            config.headcount_target,
        );

        let real = RealTargets {
            real_hourly_target: config.real_hourly_target,
            real_shift_target: config.real_shift_target,
            real_target_per_head: config.real_target_per_head,
        };

        let real_efficiency_percent = compute_real_efficiency(
            config.real_shift_target,
            config.mh_per_part,
            config.headcount_target,
            config.time_per_shift_minutes,
        );

        let mut summary = Self {
            theoretical,
            real,
            real_efficiency_percent,
            warnings: Vec::new(),
        };
        summary.collect_warnings(config);
        summary
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: TargetWarning) {
        self.warnings.push(warning);
    }

    /// 是否有 Warning 等級以上的提示
    pub fn has_blocking_warnings(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| w.severity == WarningSeverity::Warning)
    }

    fn collect_warnings(&mut self, config: &TargetConfiguration) {
        if config.mh_per_part <= Decimal::ZERO {
            self.add_warning(TargetWarning::warning(
                "mh_per_part",
                "單件工時未設定，無法計算理論目標".to_string(),
            ));
        }

        if config.time_per_shift_minutes <= Decimal::ZERO {
            self.add_warning(TargetWarning::warning(
                "time_per_shift",
                "班次時間未設定".to_string(),
            ));
        }

        if config.headcount_target == 0 {
            self.add_warning(TargetWarning::info(
                "headcount_target",
                "目標人數為 0，每人目標與效率皆為 0".to_string(),
            ));
        }

        if !config.has_bottleneck() {
            self.add_warning(TargetWarning::info(
                "bottleneck_cycle_time",
                "未設定瓶頸站週期時間，實際目標由使用者維護".to_string(),
            ));
        }
    }
}

/// 計算提示
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetWarning {
    pub field: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl TargetWarning {
    pub fn new(field: &str, message: String, severity: WarningSeverity) -> Self {
        Self {
            field: field.to_string(),
            message,
            severity,
        }
    }

    pub fn info(field: &str, message: String) -> Self {
        Self::new(field, message, WarningSeverity::Info)
    }

    pub fn warning(field: &str, message: String) -> Self {
        Self::new(field, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningSeverity {
    Info,
    Warning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_reference_part() {
        let config = apply(
            &TargetConfiguration::new()
                .with_mh_per_part(Decimal::new(55, 2))
                .with_headcount_target(2),
            TargetEdit::BottleneckCycleTime(Decimal::new(27, 2)),
        );

        let summary = TargetSummary::evaluate(&config);

        assert_eq!(summary.theoretical.shift_target, 1691);
        assert_eq!(summary.theoretical.hourly_target, 218);
        assert_eq!(summary.real.real_shift_target, 1721);
        assert_eq!(summary.real_efficiency_percent, 102);
        assert!(summary.warnings.is_empty());
    }

    #[test]
    fn test_evaluate_incomplete_input() {
        let summary = TargetSummary::evaluate(&TargetConfiguration::new());

        assert_eq!(summary.theoretical, TheoreticalTargets::default());
        assert_eq!(summary.real, RealTargets::default());
        assert_eq!(summary.real_efficiency_percent, 0);
        assert!(summary.has_blocking_warnings());

        let fields: Vec<_> = summary.warnings.iter().map(|w| w.field.as_str()).collect();
        assert_eq!(fields, vec!["mh_per_part", "headcount_target", "bottleneck_cycle_time"]);
    }

    #[test]
    fn test_zero_headcount_zeroes_per_head_and_efficiency() {
        let config = apply(
            &TargetConfiguration::new().with_mh_per_part(Decimal::new(55, 2)),
            TargetEdit::BottleneckCycleTime(Decimal::new(27, 2)),
        );

        let summary = TargetSummary::evaluate(&config);

        assert_eq!(summary.real.real_target_per_head, 0);
        assert_eq!(summary.real_efficiency_percent, 0);
        assert_eq!(summary.theoretical.shift_target, 0);
        assert!(!summary.has_blocking_warnings());
    }
}
