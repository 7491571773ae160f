//! 数据生成器
//!
//! 按固定顺序串联各表的生成步骤：用户 → 商品 → 订单 → 订单项 → 对账 → 支付。
//! 所有步骤共享同一个随机数生成器，改变任何一步的行数都会改变后续所有随机值。

use chrono::{NaiveDate, NaiveDateTime, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use shop_shared::config::GeneratorSettings;
use shop_shared::{Result, TableKind};
use tracing::info;

use super::{
    generate_order_items, generate_orders, generate_payments, generate_products, generate_users,
    reconcile_order_totals,
};
use crate::models::Dataset;

/// 数据生成器配置
///
/// 控制生成数据的数量和时间窗口
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// 随机数种子
    pub seed: u64,
    /// 用户数量
    pub user_count: usize,
    /// 商品数量
    pub product_count: usize,
    /// 订单数量
    pub order_count: usize,
    /// 订单项目标行数
    pub order_item_count: usize,
    /// 时间窗口的终点，所有回溯窗口都以它为基准
    pub reference_time: NaiveDateTime,
}

impl Default for GeneratorConfig {
    /// 默认配置：100 用户，50 商品，200 订单，400 订单项，以当天 UTC 零点为基准
    fn default() -> Self {
        Self {
            seed: 42,
            user_count: 100,
            product_count: 50,
            order_count: 200,
            order_item_count: 400,
            reference_time: start_of_today(),
        }
    }
}

impl GeneratorConfig {
    /// 从配置文件中的生成配置构建
    pub fn from_settings(settings: &GeneratorSettings) -> Result<Self> {
        let reference_time = settings
            .parsed_reference_date()?
            .map(midnight)
            .unwrap_or_else(start_of_today);

        Ok(Self {
            seed: settings.seed,
            user_count: settings.users,
            product_count: settings.products,
            order_count: settings.orders,
            order_item_count: settings.order_items,
            reference_time,
        })
    }
}

/// 当天 UTC 零点
pub fn start_of_today() -> NaiveDateTime {
    midnight(Utc::now().date_naive())
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(chrono::NaiveTime::MIN)
}

/// 批量数据生成器
///
/// 一次性生成五张表的完整数据，全部物化在内存中
pub struct DataGenerator {
    config: GeneratorConfig,
}

impl DataGenerator {
    /// 创建数据生成器
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// 使用配置中的种子生成数据集
    pub fn generate_seeded(&self) -> Result<Dataset> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.generate(&mut rng)
    }

    /// 使用调用方提供的随机数生成器生成数据集
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Dataset> {
        let config = &self.config;

        let users = generate_users(config.user_count, config.reference_time, rng);
        let products = generate_products(config.product_count, rng);
        let orders = generate_orders(&users, config.order_count, config.reference_time, rng)?;
        let order_items =
            generate_order_items(&products, &orders, config.order_item_count, rng)?;
        let orders = reconcile_order_totals(&orders, &order_items);
        let payments = generate_payments(&orders, rng);

        let dataset = Dataset {
            users,
            products,
            orders,
            order_items,
            payments,
        };

        info!(
            seed = config.seed,
            reference_time = %config.reference_time,
            users = dataset.users.len(),
            products = dataset.products.len(),
            orders = dataset.orders.len(),
            order_items = dataset.order_items.len(),
            payments = dataset.payments.len(),
            "数据集生成完成"
        );

        Ok(dataset)
    }
}

/// 统计数据生成结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationStats {
    pub users_count: usize,
    pub products_count: usize,
    pub orders_count: usize,
    pub order_items_count: usize,
    pub payments_count: usize,
}

impl GenerationStats {
    /// 从数据集中收集统计信息
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            users_count: dataset.row_count(TableKind::Users),
            products_count: dataset.row_count(TableKind::Products),
            orders_count: dataset.row_count(TableKind::Orders),
            order_items_count: dataset.row_count(TableKind::OrderItems),
            payments_count: dataset.row_count(TableKind::Payments),
        }
    }

    /// 总行数
    pub fn total_rows(&self) -> usize {
        self.users_count
            + self.products_count
            + self.orders_count
            + self.order_items_count
            + self.payments_count
    }
}
