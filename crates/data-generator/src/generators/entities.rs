//! 实体生成器
//!
//! 用户、商品、订单三张基础表，ID 从 1 开始连续递增。

use std::collections::HashSet;

use chrono::NaiveDateTime;
use rand::Rng;
use rand::seq::IndexedRandom;
use shop_shared::{DatasetError, Result};

use crate::models::{Order, Product, User};

/// 生成 `count` 个用户，邮箱全表唯一
pub fn generate_users<R: Rng + ?Sized>(
    count: usize,
    reference: NaiveDateTime,
    rng: &mut R,
) -> Vec<User> {
    let mut used_emails = HashSet::with_capacity(count);

    (1..=count as u64)
        .map(|user_id| User::random(user_id, reference, &mut used_emails, rng))
        .collect()
}

/// 生成 `count` 个商品
pub fn generate_products<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Product> {
    (1..=count as u64)
        .map(|product_id| Product::random(product_id, rng))
        .collect()
}

/// 生成 `count` 个订单
///
/// 每个订单从现有用户中有放回地均匀抽取下单用户，一个用户可以有零个或多个订单。
/// `count > 0` 而用户表为空时返回 [`DatasetError::EmptyPool`]。
pub fn generate_orders<R: Rng + ?Sized>(
    users: &[User],
    count: usize,
    reference: NaiveDateTime,
    rng: &mut R,
) -> Result<Vec<Order>> {
    if count > 0 && users.is_empty() {
        return Err(DatasetError::EmptyPool { table: "users" });
    }

    let user_ids: Vec<u64> = users.iter().map(|u| u.user_id).collect();
    let mut orders = Vec::with_capacity(count);

    for order_id in 1..=count as u64 {
        let user_id = *user_ids
            .choose(rng)
            .ok_or(DatasetError::EmptyPool { table: "users" })?;
        orders.push(Order::random(order_id, user_id, reference, rng));
    }

    Ok(orders)
}
