//! 统一错误处理模块
//!
//! 定义生成与导入两个阶段共享的错误类型，使用 thiserror 提供良好的错误信息。

use std::path::PathBuf;

use thiserror::Error;

/// 数据集错误类型
#[derive(Debug, Error)]
pub enum DatasetError {
    // ==================== 前置条件错误 ====================
    /// 需要从某张表中随机抽取，但该表为空
    #[error("前置条件不满足: 表 {table} 为空，无法抽取关联记录")]
    EmptyPool { table: &'static str },

    // ==================== 文件错误 ====================
    #[error("缺少必需的 CSV 文件: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("文件读写失败: {} - {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV 错误: {0}")]
    Csv(#[from] csv::Error),

    // ==================== 数据库错误 ====================
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),

    // ==================== 配置错误 ====================
    #[error("配置加载失败: {0}")]
    Config(#[from] config::ConfigError),

    #[error("无效的参数: {field} - {message}")]
    InvalidArgument { field: String, message: String },
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, DatasetError>;

impl DatasetError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyPool { .. } => "EMPTY_POOL",
            Self::MissingInput { .. } => "MISSING_INPUT",
            Self::Io { .. } => "IO_ERROR",
            Self::Csv(_) => "CSV_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
        }
    }

    /// 包装带路径的 IO 错误
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// 是否为前置条件错误（调用方的编程错误，而非运行环境问题）
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::EmptyPool { .. })
    }
}
