//! 逆向场景：输入文件缺失

use shop_shared::DatasetError;

use crate::TestEnvironment;

#[tokio::test]
async fn test_missing_csv_fails_without_database() {
    let env = TestEnvironment::new("missing");
    env.generate().unwrap();
    std::fs::remove_file(env.data_dir().join("payments.csv")).unwrap();

    let err = env.ingest().await.unwrap_err();
    let dataset_err = err.downcast_ref::<DatasetError>().unwrap();
    assert_eq!(dataset_err.code(), "MISSING_INPUT");
    assert!(err.to_string().contains("payments.csv"));
    assert!(!env.database_path().exists());
}

#[tokio::test]
async fn test_ingest_without_generation_fails() {
    let env = TestEnvironment::new("empty");

    let err = env.ingest().await.unwrap_err();
    assert!(err.to_string().contains("users.csv"), "应报告第一个缺失的文件: {err}");
    assert!(!env.database_path().exists());
}
