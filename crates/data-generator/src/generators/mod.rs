//! 生成器模块
//!
//! 所有生成函数都显式接收同一个随机数生成器，调用顺序决定输出。

pub mod data_generator;
pub mod entities;
pub mod order_items;
pub mod payments;
pub mod reconcile;

pub use data_generator::{DataGenerator, GenerationStats, GeneratorConfig};
pub use entities::{generate_orders, generate_products, generate_users};
pub use order_items::generate_order_items;
pub use payments::generate_payments;
pub use reconcile::reconcile_order_totals;
