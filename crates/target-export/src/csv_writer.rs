//! CSV 寫出

use std::io::Write;

use chrono::NaiveDate;
use csv::Writer;
use target_core::{Result, TargetError};

use crate::sheet::TargetSheetRow;

/// CSV 表頭
pub const SHEET_HEADER: &[&str] = &[
    "part_number",
    "designation",
    "project",
    "mh_per_part",
    "time_per_shift_h",
    "headcount_target",
    "bottleneck_cycle_time_min",
    "target_per_head_per_shift",
    "shift_target",
    "hourly_target",
    "real_hourly_target",
    "real_shift_target",
    "real_target_per_head",
    "real_efficiency_pct",
];

/// 寫出目標表
pub fn write_csv<W: Write>(rows: &[TargetSheetRow], writer: W) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);

    csv_writer.write_record(SHEET_HEADER).map_err(export_error)?;
    for row in rows {
        csv_writer.write_record(row.to_record()).map_err(export_error)?;
    }
    csv_writer
        .flush()
        .map_err(|e| TargetError::Export(e.to_string()))?;

    tracing::info!("目標表匯出完成：{} 筆", rows.len());
    Ok(())
}

/// 匯出檔名：`<prefix>_<YYYYMMDD>.csv`
pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", prefix, date.format("%Y%m%d"))
}

fn export_error(err: csv::Error) -> TargetError {
    TargetError::Export(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::build_rows;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use target_core::PartRecord;

    #[test]
    fn test_write_csv() {
        let record = PartRecord {
            part_number: "HB-2040".to_string(),
            designation: Some("Housing, left".to_string()),
            mh_per_part: Some(Decimal::new(55, 2)),
            headcount_target: Some(2),
            ..Default::default()
        };
        let rows = build_rows(&[record]);

        let mut buffer = Vec::new();
        write_csv(&rows, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let mut lines = output.lines();
        assert_eq!(lines.next(), Some(SHEET_HEADER.join(",").as_str()));
        assert_eq!(
            lines.next(),
            Some("HB-2040,\"Housing, left\",,0.55,7.75,2,0,845,1691,218,0,0,0,0")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_write_empty_sheet() {
        let mut buffer = Vec::new();
        write_csv(&[], &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.lines().count(), 1);
    }

    #[rstest]
    #[case("part_targets", 2025, 11, 3, "part_targets_20251103.csv")]
    #[case("mh", 2026, 1, 31, "mh_20260131.csv")]
    fn test_export_file_name(
        #[case] prefix: &str,
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
        #[case] expected: &str,
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        assert_eq!(export_file_name(prefix, date), expected);
    }
}
