//! Data Generator
//!
//! 生成一个小型关联电商数据集（用户、商品、订单、订单项、支付）并写出为 CSV。
//!
//! # 主要模块
//!
//! - `models`: 五张表的行结构
//! - `generators`: 各表的随机生成、订单金额对账
//! - `output`: CSV 写出
//! - `cli`: 命令行入口
//!
//! # 使用示例
//!
//! ```rust
//! use chrono::NaiveDate;
//! use data_generator::generators::{DataGenerator, GeneratorConfig};
//!
//! let config = GeneratorConfig {
//!     seed: 42,
//!     user_count: 10,
//!     product_count: 5,
//!     order_count: 20,
//!     order_item_count: 40,
//!     reference_time: NaiveDate::from_ymd_opt(2024, 6, 30)
//!         .unwrap()
//!         .and_hms_opt(0, 0, 0)
//!         .unwrap(),
//! };
//! let dataset = DataGenerator::new(config).generate_seeded().unwrap();
//! assert_eq!(dataset.payments.len(), 20);
//! ```

pub mod cli;
pub mod generators;
pub mod models;
pub mod output;

pub use models::Dataset;
