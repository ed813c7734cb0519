//! 料號目標計算示例

use linetarget::export::{build_rows, export_file_name, write_csv};
use linetarget::{PartRecord, TargetEdit, TargetSession};
use rust_decimal::Decimal;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // RUST_LOG 未設定時預設 info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).init();

    println!("=== 料號目標計算示例 ===\n");

    let mut session = TargetSession::open(
        PartRecord::new("HB-2040".to_string()).with_designation("Housing".to_string()),
    );

    session.apply(TargetEdit::MhPerPart(Decimal::new(55, 2)));
    session.apply(TargetEdit::TimePerShiftHours(Decimal::new(775, 2)));
    session.apply(TargetEdit::Headcount(2));
    session.apply(TargetEdit::BottleneckCycleTime(Decimal::new(27, 2)));

    let summary = session.summary();
    println!("理論目標:");
    println!(
        "  - 每人每班: {}, 每班: {}, 每小時: {}",
        summary.theoretical.target_per_head_display(),
        summary.theoretical.shift_target,
        summary.theoretical.hourly_target
    );
    println!("實際目標:");
    println!(
        "  - 每小時: {}, 每班: {}, 每人: {}, 效率: {}%",
        summary.real.real_hourly_target,
        summary.real.real_shift_target,
        summary.real.real_target_per_head,
        summary.real_efficiency_percent
    );

    // 手動調整每班目標
    session.apply(TargetEdit::RealShift(1650));
    let payload = session.payload()?;
    println!("\n存檔內容:\n{}", payload.to_json()?);

    let rows = build_rows(&[PartRecord::from_json(&payload.to_json()?)?]);
    let file_name = export_file_name("part_targets", chrono::Local::now().date_naive());
    println!("\n匯出 {}:", file_name);
    write_csv(&rows, std::io::stdout())?;

    Ok(())
}
