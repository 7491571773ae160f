//! 订单金额对账
//!
//! 根据订单项重新计算订单总额，属于纯聚合，不消耗随机数。

use std::collections::HashMap;

use crate::models::{Order, OrderItem, round2};

/// 用订单项汇总回填订单总额
///
/// 每个订单的总额 = 其订单项 数量 × 单价 之和，保留两位小数；没有订单项的订单为 0。
/// 返回新的订单表，行顺序与输入一致，输入不被修改。
pub fn reconcile_order_totals(orders: &[Order], order_items: &[OrderItem]) -> Vec<Order> {
    let mut totals: HashMap<u64, f64> = HashMap::with_capacity(orders.len());
    for item in order_items {
        *totals.entry(item.order_id).or_insert(0.0) += item.line_total();
    }

    orders
        .iter()
        .map(|order| Order {
            total_amount: round2(totals.get(&order.order_id).copied().unwrap_or(0.0)),
            ..order.clone()
        })
        .collect()
}
