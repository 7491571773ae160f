//! 批量导入
//!
//! 按固定顺序（users → products → orders → order_items → payments）读取数据目录下的 CSV，
//! 逐表整表替换到写入目标。写入任何表之前先读取并解析全部五个文件，缺文件或格式错误时整个导入直接失败。
//! 目标端不做外键校验，顺序只用于保证日志可复现。

use std::path::{Path, PathBuf};

use shop_shared::{DatasetError, Result, TableKind};
use tracing::{debug, info};

use crate::sink::{SqliteSink, TableSink};
use crate::table::{CsvTable, read_csv_table};

/// 单表导入结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTable {
    pub table: TableKind,
    pub rows: u64,
}

/// 一次导入的结果
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub tables: Vec<LoadedTable>,
    pub database_path: Option<PathBuf>,
}

impl LoadReport {
    /// 全部表的总行数
    pub fn total_rows(&self) -> u64 {
        self.tables.iter().map(|t| t.rows).sum()
    }

    /// 指定表导入的行数
    pub fn rows_for(&self, table: TableKind) -> Option<u64> {
        self.tables
            .iter()
            .find(|t| t.table == table)
            .map(|t| t.rows)
    }

    /// 运行结束时打印的摘要行
    pub fn summary_line(&self) -> String {
        match &self.database_path {
            Some(path) => format!(
                "Ingestion complete ({} tables, {} rows). SQLite DB located at {}",
                self.tables.len(),
                self.total_rows(),
                path.display()
            ),
            None => format!(
                "Ingestion complete ({} tables, {} rows)",
                self.tables.len(),
                self.total_rows()
            ),
        }
    }
}

/// 已解析、等待写入的一张表
pub struct ParsedTable {
    pub table: TableKind,
    pub data: CsvTable,
}

/// 批量导入器
pub struct BulkLoader {
    data_dir: PathBuf,
}

impl BulkLoader {
    /// 创建导入器
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// 按固定顺序检查全部输入文件，返回第一个缺失文件的错误
    pub fn check_inputs(&self) -> Result<Vec<(TableKind, PathBuf)>> {
        TableKind::ALL
            .iter()
            .map(|&table| {
                let path = table.path_in(&self.data_dir);
                if path.is_file() {
                    Ok((table, path))
                } else {
                    Err(DatasetError::MissingInput { path })
                }
            })
            .collect()
    }

    /// 读取并解析全部输入文件
    ///
    /// 缺文件或格式错误都在这一步失败，此时还没有任何表被写入
    pub fn read_tables(&self) -> Result<Vec<ParsedTable>> {
        self.check_inputs()?
            .into_iter()
            .map(|(table, path)| {
                let data = read_csv_table(&path, table.table_name())?;
                debug!(table = %table, rows = data.row_count(), "CSV 已解析");
                Ok(ParsedTable { table, data })
            })
            .collect()
    }

    /// 把全部表导入写入目标
    ///
    /// 先解析全部文件再开始写入；写入阶段任何一张表失败都会立即中止，之前已替换的表保持替换后的状态
    pub async fn load_into<S>(&self, sink: &mut S) -> Result<LoadReport>
    where
        S: TableSink + ?Sized,
    {
        let tables = self.read_tables()?;
        replace_all(sink, tables).await
    }
}

/// 按顺序把已解析的表逐个替换到写入目标
async fn replace_all<S>(sink: &mut S, tables: Vec<ParsedTable>) -> Result<LoadReport>
where
    S: TableSink + ?Sized,
{
    let mut report = LoadReport::default();

    for ParsedTable { table, data } in tables {
        let rows = sink.replace_table(&data).await?;

        info!(table = %table, rows, "Loaded {} rows into '{}'", rows, table);
        report.tables.push(LoadedTable { table, rows });
    }

    Ok(report)
}

/// 把数据目录导入到 SQLite 数据库文件
///
/// 输入文件缺失或无法解析时不会创建或改动数据库文件
pub async fn ingest_csvs_to_sqlite(data_dir: &Path, db_path: &Path) -> Result<LoadReport> {
    let tables = BulkLoader::new(data_dir).read_tables()?;

    let mut sink = SqliteSink::open(db_path).await?;
    let mut report = replace_all(&mut sink, tables).await?;
    sink.close().await?;

    report.database_path = Some(db_path.canonicalize().unwrap_or_else(|_| db_path.to_path_buf()));
    info!(
        database = %db_path.display(),
        tables = report.tables.len(),
        rows = report.total_rows(),
        "导入完成"
    );

    Ok(report)
}
