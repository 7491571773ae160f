//! 统一可观测性模块
//!
//! 两个命令行程序通过同一入口初始化日志，确保一致的输出格式和过滤规则。

pub mod tracing;

use ::tracing::debug;
use anyhow::Result;

use crate::config::ObservabilityConfig;

/// 统一初始化可观测性
///
/// # Example
///
/// ```ignore
/// use shop_shared::{config::AppConfig, observability};
///
/// fn main() -> anyhow::Result<()> {
///     let config = AppConfig::load("datagen").unwrap_or_default();
///     observability::init(&config.observability)?;
///
///     // 应用逻辑...
///
///     Ok(())
/// }
/// ```
pub fn init(config: &ObservabilityConfig) -> Result<()> {
    tracing::init(config)?;

    debug!(
        log_level = %config.log_level,
        log_format = %config.log_format,
        "Observability initialized"
    );

    Ok(())
}
