//! 配置加载的集成测试
//!
//! 验证环境变量对配置文件的覆盖

use shop_shared::config::AppConfig;

#[test]
fn test_env_overrides_file() {
    let dir = std::env::temp_dir().join(format!("shop-config-env-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("default.toml"),
        "[generator]\nseed = 7\norders = 20\n",
    )
    .unwrap();
    std::fs::write(dir.join("ingest.toml"), "[paths]\ndatabase_path = \"file.db\"\n").unwrap();

    // SAFETY: 本测试文件只有一个测试，不存在并发修改环境变量
    unsafe {
        std::env::set_var("SHOP_GENERATOR__SEED", "99");
    }

    let config = AppConfig::load_from("ingest", "test", &dir).unwrap();

    unsafe {
        std::env::remove_var("SHOP_GENERATOR__SEED");
    }

    assert_eq!(config.generator.seed, 99, "环境变量应覆盖配置文件");
    assert_eq!(config.generator.orders, 20);
    assert_eq!(
        config.paths.database_path,
        std::path::PathBuf::from("file.db"),
        "程序特定配置文件应被加载"
    );

    std::fs::remove_dir_all(&dir).unwrap();
}
