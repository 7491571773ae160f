//! 配置管理模块
//!
//! 支持多格式配置文件加载，环境变量覆盖，以及类型安全的配置访问。

use chrono::NaiveDate;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{DatasetError, Result};

/// 数据生成配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// 随机数种子，相同种子 + 相同基准日期产生逐字节相同的输出
    pub seed: u64,
    pub users: usize,
    pub products: usize,
    pub orders: usize,
    /// 订单项目标行数
    pub order_items: usize,
    /// 时间窗口的基准日期（YYYY-MM-DD），为空时使用当天 UTC 零点
    pub reference_date: Option<String>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            seed: 42,
            users: 100,
            products: 50,
            orders: 200,
            order_items: 400,
            reference_date: None,
        }
    }
}

impl GeneratorSettings {
    /// 解析基准日期
    pub fn parsed_reference_date(&self) -> Result<Option<NaiveDate>> {
        self.reference_date
            .as_deref()
            .map(parse_reference_date)
            .transpose()
    }
}

/// 解析 YYYY-MM-DD 格式的基准日期
pub fn parse_reference_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        DatasetError::InvalidArgument {
            field: "reference_date".to_string(),
            message: format!("{value}: {e}"),
        }
    })
}

/// 路径配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// CSV 输出/输入目录
    pub data_dir: PathBuf,
    /// SQLite 数据库文件路径
    pub database_path: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            database_path: PathBuf::from("ecommerce.db"),
        }
    }
}

/// 可观测性配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub log_level: String,
    /// 日志输出格式：json（结构化）或 pretty（人类可读）
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

impl ObservabilityConfig {
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub app_name: String,
    pub environment: String,
    pub generator: GeneratorSettings,
    pub paths: PathsConfig,
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. config/default.toml（默认配置）
    /// 2. config/{environment}.toml（环境特定配置）
    /// 3. config/{app_name}.toml（程序特定配置，如 datagen.toml）
    /// 4. 环境变量（SHOP_ 前缀，`__` 分隔层级，如 SHOP_GENERATOR__SEED -> generator.seed）
    pub fn load(app_name: &str) -> std::result::Result<Self, ConfigError> {
        let env = std::env::var("SHOP_ENV").unwrap_or_else(|_| "development".to_string());
        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

        Self::load_from(app_name, &env, Path::new(&config_dir))
    }

    /// 从指定目录加载配置
    pub fn load_from(
        app_name: &str,
        env: &str,
        config_dir: &Path,
    ) -> std::result::Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("app_name", app_name)?
            .set_default("environment", env)?
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(File::from(config_dir.join(format!("{}.toml", env))).required(false))
            .add_source(File::from(config_dir.join(format!("{}.toml", app_name))).required(false))
            .add_source(
                Environment::with_prefix("SHOP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}
