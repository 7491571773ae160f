//! 商品模型

use fake::Fake;
use fake::faker::company::en::CatchPhrase;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::round2;

/// 商品基础价格区间
pub const PRICE_RANGE: std::ops::RangeInclusive<f64> = 5.0..=500.0;

/// 商品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: u64,
    pub name: String,
    pub category: Category,
    pub price: f64,
}

/// 商品类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Home,
    Beauty,
    Books,
    Sports,
    Toys,
    Groceries,
}

impl Product {
    /// 生成随机商品，价格保留两位小数
    pub fn random<R: Rng + ?Sized>(product_id: u64, rng: &mut R) -> Self {
        let name: String = CatchPhrase().fake_with_rng(rng);
        let category = Category::random(rng);
        let price = round2(rng.random_range(PRICE_RANGE));

        Self {
            product_id,
            name,
            category,
            price,
        }
    }
}

impl Category {
    pub const ALL: [Category; 7] = [
        Self::Electronics,
        Self::Home,
        Self::Beauty,
        Self::Books,
        Self::Sports,
        Self::Toys,
        Self::Groceries,
    ];

    /// 均匀随机抽取类别
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}
