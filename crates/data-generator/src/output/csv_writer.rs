//! CSV 写出
//!
//! 五张表先全部序列化到内存，成功后再逐个写入临时文件并改名覆盖旧文件，
//! 序列化失败时磁盘上的旧输出保持不变，读方也不会看到写了一半的文件。

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use shop_shared::{DatasetError, Result, TableKind};
use tracing::{debug, info};

use crate::models::Dataset;

/// 已写出的表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenTable {
    pub table: TableKind,
    pub path: PathBuf,
    pub rows: usize,
}

/// 把数据集写入目录，目录不存在时自动创建
///
/// 返回按固定表顺序排列的写出结果
pub fn write_dataset(dir: &Path, dataset: &Dataset) -> Result<Vec<WrittenTable>> {
    fs::create_dir_all(dir).map_err(|e| DatasetError::io(dir, e))?;

    let mut buffers = Vec::with_capacity(TableKind::ALL.len());
    for table in TableKind::ALL {
        let bytes = match table {
            TableKind::Users => serialize_table(table, &dataset.users)?,
            TableKind::Products => serialize_table(table, &dataset.products)?,
            TableKind::Orders => serialize_table(table, &dataset.orders)?,
            TableKind::OrderItems => serialize_table(table, &dataset.order_items)?,
            TableKind::Payments => serialize_table(table, &dataset.payments)?,
        };
        buffers.push((table, bytes));
    }

    let mut written = Vec::with_capacity(buffers.len());
    for (table, bytes) in buffers {
        let path = table.path_in(dir);
        replace_file(&path, &bytes)?;

        let rows = dataset.row_count(table);
        debug!(table = %table, path = %path.display(), rows, "CSV 已写出");
        written.push(WrittenTable { table, path, rows });
    }

    info!(dir = %dir.display(), tables = written.len(), "数据集已写出");
    Ok(written)
}

/// 序列化一张表，表头固定写出，空表也有表头
fn serialize_table<T: Serialize>(table: TableKind, rows: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(table.columns())?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| DatasetError::io(table.file_name(), e.into_error()))
}

/// 先写临时文件再改名，替换目标文件
fn replace_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let staging = path.with_file_name(format!(".{file_name}.tmp"));

    fs::write(&staging, bytes).map_err(|e| DatasetError::io(&staging, e))?;
    fs::rename(&staging, path).map_err(|e| DatasetError::io(path, e))?;
    Ok(())
}
