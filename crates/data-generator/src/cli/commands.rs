//! CLI 参数定义
//!
//! 使用 clap derive 宏定义命令行接口结构，所有参数都是可选的配置覆盖项。

use std::path::PathBuf;

use clap::Parser;
use shop_shared::config::AppConfig;

/// 电商数据集生成工具
#[derive(Parser, Debug, Default)]
#[command(name = "datagen")]
#[command(version, about = "生成用户、商品、订单、订单项、支付五张关联表的 CSV 文件")]
pub struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// 随机数种子
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// 用户数量
    #[arg(short, long)]
    pub users: Option<usize>,

    /// 商品数量
    #[arg(short, long)]
    pub products: Option<usize>,

    /// 订单数量
    #[arg(long)]
    pub orders: Option<usize>,

    /// 订单项目标行数
    #[arg(long)]
    pub order_items: Option<usize>,

    /// CSV 输出目录
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// 时间窗口的基准日期（YYYY-MM-DD）
    #[arg(long)]
    pub reference_date: Option<String>,
}

impl Cli {
    /// 把命令行覆盖项合并进配置
    pub fn apply(&self, config: &mut AppConfig) {
        let generator = &mut config.generator;
        if let Some(seed) = self.seed {
            generator.seed = seed;
        }
        if let Some(users) = self.users {
            generator.users = users;
        }
        if let Some(products) = self.products {
            generator.products = products;
        }
        if let Some(orders) = self.orders {
            generator.orders = orders;
        }
        if let Some(order_items) = self.order_items {
            generator.order_items = order_items;
        }
        if let Some(ref date) = self.reference_date {
            generator.reference_date = Some(date.clone());
        }
        if let Some(ref dir) = self.output_dir {
            config.paths.data_dir = dir.clone();
        }
        if let Some(ref level) = self.log_level {
            config.observability.log_level = level.clone();
        }
    }
}

// ============================================================================
// 单元测试
// ============================================================================
