//! 订单模型

use chrono::NaiveDateTime;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::random_timestamp_within;

/// 下单时间的回溯窗口（约 18 个月）
pub const ORDER_LOOKBACK_DAYS: i64 = 547;

/// 订单
///
/// `total_amount` 在订单项生成之前为 0，由对账步骤回填
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: u64,
    pub user_id: u64,
    pub order_date: NaiveDateTime,
    pub total_amount: f64,
}

impl Order {
    /// 为指定用户生成随机订单
    pub fn random<R: Rng + ?Sized>(
        order_id: u64,
        user_id: u64,
        reference: NaiveDateTime,
        rng: &mut R,
    ) -> Self {
        Self {
            order_id,
            user_id,
            order_date: random_timestamp_within(rng, reference, ORDER_LOOKBACK_DAYS),
            total_amount: 0.0,
        }
    }
}
