//! 料號表單編輯工作階段
//!
//! 一個工作階段對應一次新增或編輯料號的表單：開啟時建立配置，
//! 存檔或取消後丟棄。配置只屬於此工作階段，不與其他表單共用。

use target_core::{PartPayload, PartRecord, RealField, TargetConfiguration};
use uuid::Uuid;

use crate::reducer::{apply, TargetEdit};
use crate::tracking::ChangeTracker;
use crate::TargetSummary;

/// 料號目標編輯工作階段
#[derive(Debug, Clone)]
pub struct TargetSession {
    id: Uuid,
    record: PartRecord,
    original: TargetConfiguration,
    config: TargetConfiguration,
    tracker: ChangeTracker,
}

impl TargetSession {
    /// 開啟既有料號的編輯表單
    ///
    /// 沿用伺服器儲存的實際目標，不重新播種。
    pub fn open(record: PartRecord) -> Self {
        let config = TargetConfiguration::from_record(&record);
        let session = Self {
            id: Uuid::new_v4(),
            original: config.clone(),
            config,
            record,
            tracker: ChangeTracker::new(),
        };

        tracing::info!(
            session_id = %session.id,
            part_number = %session.record.part_number,
            is_new = session.record.is_new(),
            "開啟料號目標表單"
        );

        session
    }

    /// 開啟新增料號表單
    pub fn open_new(part_number: String) -> Self {
        Self::open(PartRecord::new(part_number))
    }

    /// 工作階段ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// 目前的料號記錄（識別欄位）
    pub fn record(&self) -> &PartRecord {
        &self.record
    }

    /// 目前的目標配置
    pub fn config(&self) -> &TargetConfiguration {
        &self.config
    }

    /// 套用一筆欄位編輯
    pub fn apply(&mut self, edit: TargetEdit) -> &TargetConfiguration {
        self.config = apply(&self.config, edit);
        self.tracker.mark_changed(edit.field_name());
        &self.config
    }

    /// 最後一次編輯的實際欄位
    pub fn last_edited(&self) -> Option<RealField> {
        self.config.last_edited
    }

    /// 配置是否與開啟時不同
    pub fn is_dirty(&self) -> bool {
        self.config != self.original
    }

    /// 曾被編輯過的欄位
    pub fn changed_fields(&self) -> Vec<&'static str> {
        self.tracker.changed_fields()
    }

    /// 還原到開啟時的狀態
    pub fn reset(&mut self) {
        self.config = self.original.clone();
        self.tracker.clear();
    }

    /// 目前配置的完整目標快照
    pub fn summary(&self) -> TargetSummary {
        TargetSummary::evaluate(&self.config)
    }

    /// 組合存檔內容；必要欄位未填時回傳錯誤，由表單阻止送出
    pub fn payload(&self) -> target_core::Result<PartPayload> {
        let summary = self.summary();
        let payload = PartPayload::build(
            &self.record,
            &self.config,
            summary.theoretical.shift_target,
            summary.real_efficiency_percent,
        );

        match &payload {
            Ok(_) => tracing::info!(
                session_id = %self.id,
                changed = ?self.tracker.changed_fields(),
                "料號目標存檔內容已建立"
            ),
            Err(err) => tracing::warn!(session_id = %self.id, error = %err, "料號目標表單檢查未通過"),
        }

        payload
    }

    /// 取消表單，丟棄配置
    pub fn discard(self) -> PartRecord {
        tracing::info!(
            session_id = %self.id,
            edited = self.tracker.has_changes(),
            dirty = self.is_dirty(),
            "取消料號目標表單"
        );
        self.record
    }
}
