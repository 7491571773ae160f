//! 数据库验证工具
//!
//! 直接查询导入后的 SQLite 数据库，验证跨表一致性。

use anyhow::Result;
use shop_shared::TableKind;
use sqlx::SqlitePool;

/// 数据库验证工具
pub struct DbVerifier {
    pool: SqlitePool,
}

impl DbVerifier {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 表的行数
    pub async fn row_count(&self, table: TableKind) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", table.table_name());
        let (count,): (i64,) = sqlx::query_as(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }

    /// 表的列名，按建表顺序
    pub async fn column_names(&self, table: TableKind) -> Result<Vec<String>> {
        let sql = format!("SELECT name FROM pragma_table_info('{}')", table.table_name());
        let names: Vec<(String,)> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(names.into_iter().map(|(name,)| name).collect())
    }

    /// 列的声明类型
    pub async fn column_type(&self, table: TableKind, column: &str) -> Result<String> {
        let (declared,): (String,) =
            sqlx::query_as("SELECT type FROM pragma_table_info(?) WHERE name = ?")
                .bind(table.table_name())
                .bind(column)
                .fetch_one(&self.pool)
                .await?;
        Ok(declared)
    }

    // ========== 外键覆盖 ==========

    /// 没有订单项的订单数
    pub async fn orders_without_items(&self) -> Result<i64> {
        self.scalar(
            "SELECT COUNT(*) FROM orders o \
             WHERE NOT EXISTS (SELECT 1 FROM order_items i WHERE i.order_id = o.order_id)",
        )
        .await
    }

    /// 引用了不存在用户的订单数
    pub async fn orphan_orders(&self) -> Result<i64> {
        self.scalar(
            "SELECT COUNT(*) FROM orders o \
             WHERE NOT EXISTS (SELECT 1 FROM users u WHERE u.user_id = o.user_id)",
        )
        .await
    }

    /// 引用了不存在订单或商品的订单项数
    pub async fn orphan_order_items(&self) -> Result<i64> {
        self.scalar(
            "SELECT COUNT(*) FROM order_items i \
             WHERE NOT EXISTS (SELECT 1 FROM orders o WHERE o.order_id = i.order_id) \
                OR NOT EXISTS (SELECT 1 FROM products p WHERE p.product_id = i.product_id)",
        )
        .await
    }

    // ========== 金额与时间 ==========

    /// 总额与订单项汇总不一致的订单数
    pub async fn mismatched_totals(&self) -> Result<i64> {
        self.scalar(
            "SELECT COUNT(*) FROM orders o \
             WHERE ABS(o.total_amount - ( \
                 SELECT ROUND(COALESCE(SUM(i.quantity * i.item_price), 0), 2) \
                 FROM order_items i WHERE i.order_id = o.order_id)) > 0.01",
        )
        .await
    }

    /// 支付时间不晚于下单时间的支付数
    pub async fn payments_not_after_order(&self) -> Result<i64> {
        self.scalar(
            "SELECT COUNT(*) FROM payments p JOIN orders o ON o.order_id = p.order_id \
             WHERE p.paid_at <= o.order_date",
        )
        .await
    }

    /// 每个订单的支付记录数，去重后的取值
    pub async fn distinct_payments_per_order(&self) -> Result<Vec<i64>> {
        let rows: Vec<(i64,)> = sqlx::query_as(
            "SELECT DISTINCT cnt FROM ( \
                 SELECT COUNT(p.payment_id) AS cnt FROM orders o \
                 LEFT JOIN payments p ON p.order_id = o.order_id GROUP BY o.order_id)",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|(cnt,)| cnt).collect())
    }

    /// 重复的邮箱数
    pub async fn duplicate_emails(&self) -> Result<i64> {
        self.scalar("SELECT COUNT(*) - COUNT(DISTINCT email) FROM users")
            .await
    }

    async fn scalar(&self, sql: &str) -> Result<i64> {
        let (value,): (i64,) = sqlx::query_as(sql).fetch_one(&self.pool).await?;
        Ok(value)
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}
