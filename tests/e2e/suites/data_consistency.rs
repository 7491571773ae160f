//! 数据一致性测试套件
//!
//! 导入后直接查询数据库，交叉验证各表之间的关系。

use crate::TestEnvironment;

#[tokio::test]
async fn test_referential_coverage() {
    let env = TestEnvironment::new("coverage");
    let db = env.run_pipeline().await.unwrap();

    assert_eq!(db.orders_without_items().await.unwrap(), 0, "每个订单至少有一个订单项");
    assert_eq!(db.orphan_orders().await.unwrap(), 0);
    assert_eq!(db.orphan_order_items().await.unwrap(), 0);
    assert_eq!(db.distinct_payments_per_order().await.unwrap(), vec![1]);
    db.close().await;
}

#[tokio::test]
async fn test_totals_and_timestamps() {
    let env = TestEnvironment::new("totals");
    let db = env.run_pipeline().await.unwrap();

    assert_eq!(db.mismatched_totals().await.unwrap(), 0, "订单总额应等于订单项汇总");
    assert_eq!(db.payments_not_after_order().await.unwrap(), 0, "支付时间应晚于下单时间");
    assert_eq!(db.duplicate_emails().await.unwrap(), 0);
    db.close().await;
}

#[tokio::test]
async fn test_small_item_target_leaves_late_orders_empty() {
    // 订单项目标行数小于订单数时，按订单顺序只覆盖前面的订单，其余订单总额为 0
    let mut env = TestEnvironment::new("small-target");
    env.config.generator.orders = 30;
    env.config.generator.order_items = 10;

    let db = env.run_pipeline().await.unwrap();
    crate::assert_table_rows!(db, shop_shared::TableKind::OrderItems, 10);
    assert_eq!(db.orders_without_items().await.unwrap(), 20);
    assert_eq!(db.mismatched_totals().await.unwrap(), 0);
    db.close().await;
}
