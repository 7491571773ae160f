//! 测试辅助工具模块
//!
//! 提供数据库验证和断言宏。

mod assertions;
mod db_verifier;

pub use db_verifier::*;
