//! 取整規則
//!
//! 所有目標數量與效率百分比都四捨五入到整數（0.5 進位），畫面上不出現小數件數。

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// 四捨五入到整數（0.5 進位）
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// 取整為件數；負值視為 0，超出範圍時取上限
pub fn round_count(value: Decimal) -> u32 {
    if value <= Decimal::ZERO {
        return 0;
    }
    round_half_up(value).to_u32().unwrap_or(u32::MAX)
}

/// 受保護的除法：分母 ≤ 0 時回傳 `None`
pub fn ratio(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    if denominator <= Decimal::ZERO {
        return None;
    }
    numerator.checked_div(denominator)
}

/// 乘積取整為件數，溢位時取上限
pub fn round_product(left: Decimal, right: Decimal) -> u32 {
    left.checked_mul(right).map(round_count).unwrap_or(u32::MAX)
}
