//! 订单项模型

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Product, round2};

/// 单价相对商品基础价格的浮动区间（±10%）
pub const PRICE_VARIATION: std::ops::RangeInclusive<f64> = 0.9..=1.1;

/// 订单项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_item_id: u64,
    pub order_id: u64,
    pub product_id: u64,
    pub quantity: u32,
    pub item_price: f64,
}

impl OrderItem {
    /// 为订单生成一行订单项
    ///
    /// 数量 1-5，单价 = 商品价格 × [0.9, 1.1] 内的随机系数，保留两位小数
    pub fn random<R: Rng + ?Sized>(
        order_item_id: u64,
        order_id: u64,
        product: &Product,
        rng: &mut R,
    ) -> Self {
        let quantity = rng.random_range(1..=5);
        let variation = rng.random_range(PRICE_VARIATION);

        Self {
            order_item_id,
            order_id,
            product_id: product.product_id,
            quantity,
            item_price: round2(product.price * variation),
        }
    }

    /// 行金额（数量 × 单价），未取整
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.item_price
    }
}
