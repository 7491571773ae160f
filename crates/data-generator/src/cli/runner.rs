//! 命令执行器
//!
//! 把合并后的配置转化为一次完整的生成与写出。

use std::path::PathBuf;

use anyhow::{Context, Result};
use shop_shared::config::AppConfig;
use tracing::info;

use crate::generators::{DataGenerator, GenerationStats, GeneratorConfig};
use crate::output::write_dataset;

/// 一次生成运行的结果
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    pub stats: GenerationStats,
    pub output_dir: PathBuf,
    pub files: usize,
}

impl GenerateSummary {
    /// 运行结束时打印的摘要行
    pub fn summary_line(&self) -> String {
        format!(
            "Generated {} datasets ({} rows) in {}",
            self.files,
            self.stats.total_rows(),
            self.output_dir.display()
        )
    }
}

/// 命令执行器
pub struct CommandRunner {
    config: AppConfig,
}

impl CommandRunner {
    /// 创建命令执行器
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// 生成数据集并写出 CSV
    pub fn run_generate(&self) -> Result<GenerateSummary> {
        let generator_config = GeneratorConfig::from_settings(&self.config.generator)
            .context("解析生成配置失败")?;
        let output_dir = self.config.paths.data_dir.clone();

        info!(
            seed = generator_config.seed,
            users = generator_config.user_count,
            products = generator_config.product_count,
            orders = generator_config.order_count,
            order_items = generator_config.order_item_count,
            output_dir = %output_dir.display(),
            "开始生成数据集"
        );

        let generator = DataGenerator::new(generator_config);
        let dataset = generator.generate_seeded().context("生成数据集失败")?;
        let written = write_dataset(&output_dir, &dataset)
            .with_context(|| format!("写出 CSV 失败: {}", output_dir.display()))?;

        let output_dir = output_dir.canonicalize().unwrap_or(output_dir);

        Ok(GenerateSummary {
            stats: GenerationStats::from_dataset(&dataset),
            output_dir,
            files: written.len(),
        })
    }
}

// ============================================================================
// 单元测试
// ============================================================================
