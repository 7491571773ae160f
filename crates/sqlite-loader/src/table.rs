//! CSV 表读取
//!
//! 把一个 CSV 文件读成带类型的表：列类型由该列的全部取值推断。
//! 全是整数为 INTEGER，全是数字为 REAL，否则为 TEXT；空单元格为 NULL，不参与推断。

use std::path::Path;

use csv::StringRecord;
use shop_shared::Result;

/// 列类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Real,
    Text,
}

impl ColumnType {
    /// SQLite 中的类型名
    pub fn sql_type(&self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
            Self::Text => "TEXT",
        }
    }

    /// 能容纳该取值的最窄类型
    fn of(value: &str) -> Self {
        if value.parse::<i64>().is_ok() {
            Self::Integer
        } else if value.parse::<f64>().is_ok() {
            Self::Real
        } else {
            Self::Text
        }
    }

    /// 两种类型中较宽的一个：Integer < Real < Text
    fn widen(self, other: Self) -> Self {
        match (self, other) {
            (Self::Text, _) | (_, Self::Text) => Self::Text,
            (Self::Real, _) | (_, Self::Real) => Self::Real,
            _ => Self::Integer,
        }
    }
}

/// 单元格取值
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

/// 列定义
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub column_type: ColumnType,
}

/// 内存中的一张带类型表
#[derive(Debug, Clone, PartialEq)]
pub struct CsvTable {
    pub name: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<SqlValue>>,
}

impl CsvTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// 读取 CSV 文件并推断列类型
///
/// 表头即列名；行字段数与表头不一致等格式错误直接返回 CSV 错误
pub fn read_csv_table(path: &Path, table_name: &str) -> Result<CsvTable> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let records = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(build_table(table_name, &headers, &records))
}

fn build_table(table_name: &str, headers: &StringRecord, records: &[StringRecord]) -> CsvTable {
    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(index, name)| Column {
            name: name.to_string(),
            column_type: infer_column_type(records, index),
        })
        .collect();

    let rows = records
        .iter()
        .map(|record| {
            columns
                .iter()
                .zip(record.iter())
                .map(|(column, raw)| convert(raw, column.column_type))
                .collect()
        })
        .collect();

    CsvTable {
        name: table_name.to_string(),
        columns,
        rows,
    }
}

/// 全空的列按 TEXT 处理
fn infer_column_type(records: &[StringRecord], index: usize) -> ColumnType {
    records
        .iter()
        .filter_map(|record| record.get(index))
        .filter(|value| !value.is_empty())
        .map(ColumnType::of)
        .reduce(ColumnType::widen)
        .unwrap_or(ColumnType::Text)
}

fn convert(raw: &str, column_type: ColumnType) -> SqlValue {
    if raw.is_empty() {
        return SqlValue::Null;
    }

    match column_type {
        ColumnType::Integer => raw
            .parse()
            .map(SqlValue::Integer)
            .unwrap_or_else(|_| SqlValue::Text(raw.to_string())),
        ColumnType::Real => raw
            .parse()
            .map(SqlValue::Real)
            .unwrap_or_else(|_| SqlValue::Text(raw.to_string())),
        ColumnType::Text => SqlValue::Text(raw.to_string()),
    }
}
