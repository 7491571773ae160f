//! 自定义断言宏

/// 断言表的行数
#[macro_export]
macro_rules! assert_table_rows {
    ($db:expr, $table:expr, $expected:expr) => {
        let rows = $db.row_count($table).await.unwrap();
        assert_eq!(
            rows, $expected,
            "表 {} 的行数应为 {}，实际为 {}",
            $table, $expected, rows
        );
    };
}
