//! 测试环境设置模块
//!
//! 每个测试使用独立的临时目录，测试结束时自动清理。

mod environment;

pub use environment::TestEnvironment;
