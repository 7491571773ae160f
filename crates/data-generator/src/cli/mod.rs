//! CLI 模块
//!
//! 不带参数运行即按配置重新生成全部 CSV 文件，命令行参数只用于临时覆盖配置。
//!
//! # 使用示例
//!
//! ```bash
//! # 按配置生成
//! datagen
//!
//! # 覆盖种子和订单数量，固定基准日期以获得可复现输出
//! datagen --seed 7 --orders 500 --order-items 1200 --reference-date 2024-06-30
//! ```

pub mod commands;
pub mod runner;

pub use commands::Cli;
pub use runner::CommandRunner;
