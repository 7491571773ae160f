//! 测试套件模块

pub mod data_consistency;
pub mod missing_input;
pub mod pipeline;
