//! 导入程序入口
//!
//! 不带参数运行：把配置中数据目录下的 CSV 导入到配置的 SQLite 数据库文件。

use clap::Parser;
use shop_shared::{config::AppConfig, observability};
use sqlite_loader::{cli::Cli, ingest_csvs_to_sqlite};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load("ingest")?;
    cli.apply(&mut config);

    observability::init(&config.observability)?;

    let report = ingest_csvs_to_sqlite(&config.paths.data_dir, &config.paths.database_path).await?;
    println!("{}", report.summary_line());

    Ok(())
}
