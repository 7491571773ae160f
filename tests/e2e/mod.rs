//! 数据集流水线端到端测试
//!
//! 测试覆盖完整的生成与导入流程，包括：
//! - 按配置生成五个 CSV 文件
//! - 导入本地 SQLite 数据库
//! - 行数、外键覆盖、订单金额对账、时间先后
//! - 缺失输入文件时的失败路径

pub mod helpers;
pub mod setup;
pub mod suites;

pub use setup::TestEnvironment;
