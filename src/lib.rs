//! # linetarget
//!
//! 產線人工工時目標計算：理論目標、依瓶頸推導的實際目標、實際效率，
//! 以及料號目標表匯出。

pub use target_calc as calc;
pub use target_core as model;
pub use target_export as export;

pub use target_calc::{
    apply, apply_all, TargetEdit, TargetSession, TargetSummary, TargetWarning, WarningSeverity,
};
pub use target_core::{
    PartPayload, PartRecord, RealField, Result, TargetConfiguration, TargetError,
};
