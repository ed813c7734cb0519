//! 欄位變更追蹤

use std::collections::BTreeSet;

/// 表單欄位變更追蹤器
///
/// 記錄自表單開啟以來被編輯過的欄位名稱。
#[derive(Debug, Clone, Default)]
pub struct ChangeTracker {
    changed_fields: BTreeSet<&'static str>,
}

impl ChangeTracker {
    /// 創建新的追蹤器
    pub fn new() -> Self {
        Self::default()
    }

    /// 標記欄位已變更
    pub fn mark_changed(&mut self, field: &'static str) {
        self.changed_fields.insert(field);
    }

    /// 是否有任何欄位變更
    pub fn has_changes(&self) -> bool {
        !self.changed_fields.is_empty()
    }

    /// 清除所有變更標記
    pub fn clear(&mut self) {
        self.changed_fields.clear();
    }

    /// 獲取所有已變更欄位（依名稱排序）
    pub fn changed_fields(&self) -> Vec<&'static str> {
        self.changed_fields.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_and_clear() {
        let mut tracker = ChangeTracker::new();
        assert!(!tracker.has_changes());

        tracker.mark_changed("real_shift_target");
        tracker.mark_changed("headcount_target");
        tracker.mark_changed("real_shift_target");

        assert!(tracker.has_changes());
        assert_eq!(
            tracker.changed_fields(),
            vec!["headcount_target", "real_shift_target"]
        );

        tracker.clear();
        assert!(!tracker.has_changes());
    }
}
