//! 数据集生成程序入口
//!
//! 不带参数运行：按配置重新生成并覆盖输出目录下的五个 CSV 文件。

use clap::Parser;
use data_generator::cli::{Cli, CommandRunner};
use shop_shared::{config::AppConfig, observability};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 统一加载配置：config/default.toml → config/datagen.toml → SHOP_* 环境变量 → 命令行
    let mut config = AppConfig::load("datagen")?;
    cli.apply(&mut config);

    observability::init(&config.observability)?;

    let summary = CommandRunner::new(config).run_generate()?;
    println!("{}", summary.summary_line());

    Ok(())
}
