//! 支付生成器

use rand::Rng;

use crate::models::{Order, Payment};

/// 为每个订单生成一笔支付
///
/// 必须传入已对账的订单表；支付时间以订单的下单时间为锚点。
pub fn generate_payments<R: Rng + ?Sized>(orders: &[Order], rng: &mut R) -> Vec<Payment> {
    orders
        .iter()
        .map(|order| Payment::for_order(order, rng))
        .collect()
}
