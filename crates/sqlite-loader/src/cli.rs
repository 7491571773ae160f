//! CLI 参数定义

use std::path::PathBuf;

use clap::Parser;
use shop_shared::config::AppConfig;

/// CSV 导入 SQLite 工具
#[derive(Parser, Debug, Default)]
#[command(name = "ingest")]
#[command(version, about = "把数据目录下的五个 CSV 文件导入本地 SQLite 数据库")]
pub struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// CSV 所在目录
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// SQLite 数据库文件路径
    #[arg(long)]
    pub database: Option<PathBuf>,
}

impl Cli {
    /// 把命令行覆盖项合并进配置
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(ref dir) = self.data_dir {
            config.paths.data_dir = dir.clone();
        }
        if let Some(ref database) = self.database {
            config.paths.database_path = database.clone();
        }
        if let Some(ref level) = self.log_level {
            config.observability.log_level = level.clone();
        }
    }
}
