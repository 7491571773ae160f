//! 测试环境管理
//!
//! 把生成配置、数据目录和数据库文件收拢到一个临时目录下。

use std::path::{Path, PathBuf};

use anyhow::Result;
use data_generator::cli::{CommandRunner, runner::GenerateSummary};
use shop_shared::config::AppConfig;
use sqlite_loader::{LoadReport, ingest_csvs_to_sqlite};
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use super::super::helpers::DbVerifier;

/// 固定基准日期，保证输出与运行当天无关
const REFERENCE_DATE: &str = "2024-06-30";

/// 测试环境
pub struct TestEnvironment {
    pub config: AppConfig,
    root: PathBuf,
}

impl TestEnvironment {
    /// 默认规模的环境：100 用户，50 商品，200 订单，400 订单项
    pub fn new(label: &str) -> Self {
        let root = std::env::temp_dir().join(format!("shop-e2e-{label}-{}", uuid::Uuid::new_v4()));

        let mut config = AppConfig::default();
        config.generator.reference_date = Some(REFERENCE_DATE.to_string());
        config.paths.data_dir = root.join("data");
        config.paths.database_path = root.join("ecommerce.db");

        Self { config, root }
    }

    pub fn data_dir(&self) -> &Path {
        &self.config.paths.data_dir
    }

    pub fn database_path(&self) -> &Path {
        &self.config.paths.database_path
    }

    /// 生成 CSV 文件
    pub fn generate(&self) -> Result<GenerateSummary> {
        CommandRunner::new(self.config.clone()).run_generate()
    }

    /// 导入 SQLite
    pub async fn ingest(&self) -> Result<LoadReport> {
        Ok(ingest_csvs_to_sqlite(self.data_dir(), self.database_path()).await?)
    }

    /// 生成并导入，返回数据库验证工具
    pub async fn run_pipeline(&self) -> Result<DbVerifier> {
        self.generate()?;
        self.ingest().await?;
        self.verifier().await
    }

    /// 连接已导入的数据库
    pub async fn verifier(&self) -> Result<DbVerifier> {
        let options = SqliteConnectOptions::new().filename(self.database_path());
        let pool = SqlitePool::connect_with(options).await?;
        Ok(DbVerifier::new(pool))
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}
