//! 生成 → 导入全流程

use shop_shared::TableKind;

use crate::TestEnvironment;

#[tokio::test]
async fn test_default_pipeline_row_counts() {
    let env = TestEnvironment::new("counts");
    let summary = env.generate().unwrap();
    assert_eq!(summary.files, 5);
    assert_eq!(summary.stats.total_rows(), 950);

    let report = env.ingest().await.unwrap();
    assert_eq!(report.total_rows(), 950);

    let db = env.verifier().await.unwrap();
    crate::assert_table_rows!(db, TableKind::Users, 100);
    crate::assert_table_rows!(db, TableKind::Products, 50);
    crate::assert_table_rows!(db, TableKind::Orders, 200);
    crate::assert_table_rows!(db, TableKind::OrderItems, 400);
    crate::assert_table_rows!(db, TableKind::Payments, 200);
    db.close().await;
}

#[tokio::test]
async fn test_schema_follows_csv_headers() {
    let env = TestEnvironment::new("schema");
    let db = env.run_pipeline().await.unwrap();

    for table in TableKind::ALL {
        let columns = db.column_names(table).await.unwrap();
        assert_eq!(columns, table.columns(), "表 {table} 的列应与 CSV 表头一致");
    }

    assert_eq!(db.column_type(TableKind::Orders, "order_id").await.unwrap(), "INTEGER");
    assert_eq!(db.column_type(TableKind::Orders, "total_amount").await.unwrap(), "REAL");
    assert_eq!(db.column_type(TableKind::Orders, "order_date").await.unwrap(), "TEXT");
    assert_eq!(db.column_type(TableKind::Payments, "status").await.unwrap(), "TEXT");
    db.close().await;
}

#[tokio::test]
async fn test_rerun_overwrites_outputs() {
    let env = TestEnvironment::new("rerun");
    env.run_pipeline().await.unwrap().close().await;

    let first = std::fs::read(env.data_dir().join("orders.csv")).unwrap();

    // 同一配置再跑一遍：CSV 逐字节相同，数据库表被替换而非追加
    let db = env.run_pipeline().await.unwrap();
    let second = std::fs::read(env.data_dir().join("orders.csv")).unwrap();
    assert_eq!(first, second);

    crate::assert_table_rows!(db, TableKind::Orders, 200);
    crate::assert_table_rows!(db, TableKind::Payments, 200);
    db.close().await;
}
