//! 数据集清单
//!
//! 生成阶段与导入阶段之间唯一的约定：五张表的表名、文件名和处理顺序。

use std::path::{Path, PathBuf};

/// 数据集中的实体表
///
/// 声明顺序即写出与导入的顺序，导入端不做外键校验，顺序只影响日志的可复现性。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Users,
    Products,
    Orders,
    OrderItems,
    Payments,
}

impl TableKind {
    /// 全部表，按固定顺序排列
    pub const ALL: [TableKind; 5] = [
        Self::Users,
        Self::Products,
        Self::Orders,
        Self::OrderItems,
        Self::Payments,
    ];

    /// 数据库中的表名
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Products => "products",
            Self::Orders => "orders",
            Self::OrderItems => "order_items",
            Self::Payments => "payments",
        }
    }

    /// 对应的 CSV 文件名
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Users => "users.csv",
            Self::Products => "products.csv",
            Self::Orders => "orders.csv",
            Self::OrderItems => "order_items.csv",
            Self::Payments => "payments.csv",
        }
    }

    /// CSV 表头，与数据库列名一致
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Self::Users => &["user_id", "name", "email", "created_at"],
            Self::Products => &["product_id", "name", "category", "price"],
            Self::Orders => &["order_id", "user_id", "order_date", "total_amount"],
            Self::OrderItems => &[
                "order_item_id",
                "order_id",
                "product_id",
                "quantity",
                "item_price",
            ],
            Self::Payments => &["payment_id", "order_id", "payment_method", "status", "paid_at"],
        }
    }

    /// 在数据目录下的文件路径
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table_name())
    }
}
