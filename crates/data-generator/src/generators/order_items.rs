//! 订单项生成器
//!
//! 按订单表顺序循环分配订单（到末尾后回到开头），保证目标行数不小于订单数时每个订单至少一项。
//! 目标行数不是订单数的整数倍时，靠前的订单会多分到一项。

use rand::Rng;
use rand::seq::IndexedRandom;
use shop_shared::{DatasetError, Result};
use tracing::debug;

use crate::models::{Order, OrderItem, Product};

/// 生成恰好 `target_rows` 行订单项
///
/// 第 k 行属于订单表中下标为 `k % orders.len()` 的订单，商品和数量均匀随机。
/// 订单表或商品表为空时返回 [`DatasetError::EmptyPool`]，不会静默返回空结果。
pub fn generate_order_items<R: Rng + ?Sized>(
    products: &[Product],
    orders: &[Order],
    target_rows: usize,
    rng: &mut R,
) -> Result<Vec<OrderItem>> {
    if orders.is_empty() {
        return Err(DatasetError::EmptyPool { table: "orders" });
    }
    if products.is_empty() {
        return Err(DatasetError::EmptyPool { table: "products" });
    }

    let items: Vec<OrderItem> = orders
        .iter()
        .cycle()
        .take(target_rows)
        .zip(1u64..)
        .map(|(order, order_item_id)| {
            let product = products
                .choose(rng)
                .ok_or(DatasetError::EmptyPool { table: "products" })?;
            Ok(OrderItem::random(order_item_id, order.order_id, product, rng))
        })
        .collect::<Result<_>>()?;

    debug!(
        orders = orders.len(),
        target_rows,
        covered = target_rows.min(orders.len()),
        "订单项生成完成"
    );

    Ok(items)
}
