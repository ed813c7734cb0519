//! # Target Export
//!
//! 料號目標表匯出（CSV）

pub mod csv_writer;
pub mod sheet;

// Re-export 主要類型
pub use csv_writer::{export_file_name, write_csv, SHEET_HEADER};
pub use sheet::{build_rows, TargetSheetRow};
