//! 输出模块
//!
//! 把内存中的数据集写成每张表一个 CSV 文件。

pub mod csv_writer;

pub use csv_writer::{WrittenTable, write_dataset};
