//! 支付模型
//!
//! 每个订单恰好对应一笔支付，支付 ID 即订单 ID。

use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Order;

/// 支付时间相对下单时间的延迟范围（小时）
pub const PAYMENT_DELAY_HOURS: std::ops::RangeInclusive<i64> = 1..=72;

/// 支付
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: u64,
    pub order_id: u64,
    pub payment_method: PaymentMethod,
    pub status: PaymentStatus,
    pub paid_at: NaiveDateTime,
}

/// 支付方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    Paypal,
    BankTransfer,
    GiftCard,
}

/// 支付状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Failed,
}

impl Payment {
    /// 为订单生成支付记录
    ///
    /// 支付时间 = 下单时间 + 1-72 小时，严格晚于下单时间
    pub fn for_order<R: Rng + ?Sized>(order: &Order, rng: &mut R) -> Self {
        let delay = Duration::hours(rng.random_range(PAYMENT_DELAY_HOURS));
        let status = PaymentStatus::random(rng);
        let payment_method = PaymentMethod::random(rng);

        Self {
            payment_id: order.order_id,
            order_id: order.order_id,
            payment_method,
            status,
            paid_at: order.order_date + delay,
        }
    }
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        Self::CreditCard,
        Self::Paypal,
        Self::BankTransfer,
        Self::GiftCard,
    ];

    /// 均匀随机抽取支付方式
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl PaymentStatus {
    /// 按权重随机抽取支付状态
    ///
    /// 权重分布: Paid 80%，Pending 15%，Failed 5%
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.random_range(0..100) {
            0..=79 => Self::Paid,
            80..=94 => Self::Pending,
            _ => Self::Failed,
        }
    }
}
