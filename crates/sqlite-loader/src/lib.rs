//! SQLite 批量导入
//!
//! 把数据目录下的五个 CSV 文件整表替换写入本地 SQLite 数据库文件。
//! 导入流程只依赖 `TableSink` trait，SQLite 之外的目标可以按同样的方式接入。

pub mod cli;
pub mod loader;
pub mod sink;
pub mod table;

pub use loader::{ingest_csvs_to_sqlite, BulkLoader, LoadReport, LoadedTable};
pub use sink::{SqliteSink, TableSink};
