//! # Target Core
//!
//! 產線目標計算的核心資料模型與類型定義

pub mod config;
pub mod part;
pub mod shift;

// Re-export 主要類型
pub use config::{RealField, TargetConfiguration};
pub use part::{PartPayload, PartRecord};
pub use shift::{hours_to_minutes, minutes_to_hours, DEFAULT_SHIFT_MINUTES, MINUTES_PER_HOUR};

/// 目標計算錯誤類型
///
/// 計算函式本身不回傳錯誤，此類型只用於表單存檔前的檢查、JSON 解析與匯出。
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    #[error("缺少必要欄位: {0}")]
    MissingField(&'static str),

    #[error("欄位 {field} 必須大於 0（目前值: {value}）")]
    NonPositive { field: &'static str, value: String },

    #[error("無效的 JSON: {0}")]
    InvalidJson(String),

    #[error("匯出錯誤: {0}")]
    Export(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

impl From<serde_json::Error> for TargetError {
    fn from(err: serde_json::Error) -> Self {
        TargetError::InvalidJson(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TargetError>;
