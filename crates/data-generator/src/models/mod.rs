//! 数据模型
//!
//! 五张关联表的行结构：用户、商品、订单、订单项、支付。
//! 字段顺序即 CSV 列顺序。

pub mod order;
pub mod order_item;
pub mod payment;
pub mod product;
pub mod user;

pub use order::Order;
pub use order_item::OrderItem;
pub use payment::{Payment, PaymentMethod, PaymentStatus};
pub use product::{Category, Product};
pub use user::User;

use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use shop_shared::TableKind;

/// 一次生成得到的完整数据集
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub users: Vec<User>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub payments: Vec<Payment>,
}

impl Dataset {
    /// 指定表的行数
    pub fn row_count(&self, table: TableKind) -> usize {
        match table {
            TableKind::Users => self.users.len(),
            TableKind::Products => self.products.len(),
            TableKind::Orders => self.orders.len(),
            TableKind::OrderItems => self.order_items.len(),
            TableKind::Payments => self.payments.len(),
        }
    }
}

/// 金额保留两位小数
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 在 `[reference - lookback_days, reference]` 内均匀抽取一个整秒时间点
pub(crate) fn random_timestamp_within<R: Rng + ?Sized>(
    rng: &mut R,
    reference: NaiveDateTime,
    lookback_days: i64,
) -> NaiveDateTime {
    let window = Duration::days(lookback_days).num_seconds();
    let offset = rng.random_range(0..=window);
    reference - Duration::seconds(offset)
}
