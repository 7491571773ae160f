//! 表写入目标
//!
//! 通过 `TableSink` trait 抽象"整表替换"行为，导入流程只依赖该 trait。
//! `SqliteSink` 是基于 sqlx 的 SQLite 实现：整个批次共用一个连接，每张表的替换在独立事务中完成。

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use shop_shared::{DatasetError, Result};
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;
use tracing::{debug, info, instrument};

use crate::table::{CsvTable, SqlValue};

/// 整表替换的写入目标
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TableSink: Send {
    /// 用 `table` 的全部内容替换同名表，返回写入行数
    ///
    /// 已存在的同名表会被整体删除后重建，不做增量合并
    async fn replace_table(&mut self, table: &CsvTable) -> Result<u64>;
}

/// SQLite 写入目标
pub struct SqliteSink {
    conn: SqliteConnection,
    path: PathBuf,
}

impl SqliteSink {
    /// 打开（不存在时创建）SQLite 数据库文件
    #[instrument(skip_all, fields(path = %path.display()))]
    pub async fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| DatasetError::io(parent, e))?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let conn = SqliteConnection::connect_with(&options).await?;

        info!("SQLite 数据库已打开");

        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// 关闭连接
    pub async fn close(self) -> Result<()> {
        self.conn.close().await?;
        debug!(path = %self.path.display(), "SQLite 连接已关闭");
        Ok(())
    }
}

#[async_trait]
impl TableSink for SqliteSink {
    async fn replace_table(&mut self, table: &CsvTable) -> Result<u64> {
        let drop_sql = format!("DROP TABLE IF EXISTS {}", quote_ident(&table.name));
        let create_sql = create_table_sql(table);
        let insert_sql = insert_sql(table);

        let mut tx = self.conn.begin().await?;

        sqlx::query(&drop_sql).execute(&mut *tx).await?;
        sqlx::query(&create_sql).execute(&mut *tx).await?;

        let mut written = 0;
        for row in &table.rows {
            let query = row
                .iter()
                .fold(sqlx::query(&insert_sql), |query, value| bind_value(query, value));
            written += query.execute(&mut *tx).await?.rows_affected();
        }

        tx.commit().await?;

        debug!(table = %table.name, rows = written, "表已替换");
        Ok(written)
    }
}

/// 给 SQLite 标识符加双引号
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// 建表语句：不建索引、不加约束
pub fn create_table_sql(table: &CsvTable) -> String {
    let columns = table
        .columns
        .iter()
        .map(|c| format!("{} {}", quote_ident(&c.name), c.column_type.sql_type()))
        .collect::<Vec<_>>()
        .join(", ");

    format!("CREATE TABLE {} ({})", quote_ident(&table.name), columns)
}

/// 单行插入语句
pub fn insert_sql(table: &CsvTable) -> String {
    let columns = table
        .columns
        .iter()
        .map(|c| quote_ident(&c.name))
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = vec!["?"; table.columns.len()].join(", ");

    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote_ident(&table.name),
        columns,
        placeholders
    )
}

fn bind_value<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    value: &'q SqlValue,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        SqlValue::Null => query.bind(None::<String>),
        SqlValue::Integer(v) => query.bind(*v),
        SqlValue::Real(v) => query.bind(*v),
        SqlValue::Text(v) => query.bind(v.as_str()),
    }
}
