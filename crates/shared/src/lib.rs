//! 共享库
//!
//! 包含数据生成程序和导入程序共用的配置、错误处理、日志初始化和数据集清单。

pub mod config;
pub mod dataset;
pub mod error;
pub mod observability;

pub use dataset::TableKind;
pub use error::{DatasetError, Result};
