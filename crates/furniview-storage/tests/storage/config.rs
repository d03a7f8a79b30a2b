use furniview_storage::{AppConfig, StorageError};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.storage.designs_dir, PathBuf::from("designs"));
    assert_eq!(config.storage.users_file, PathBuf::from("users.dat"));
    assert_eq!(config.view.canvas_width, 800);
    assert!(config.view.show_grid);
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_and_json_round_trip() {
    let temp = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.view.show_labels = false;
    config.storage.designs_dir = PathBuf::from("my-designs");

    for file in ["furniview.toml", "furniview.json"] {
        let path = temp.path().join(file);
        config.save_to_file(&path).unwrap();
        assert_eq!(AppConfig::load_from_file(&path).unwrap(), config);
    }
}

#[test]
fn test_partial_toml_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("furniview.toml");
    std::fs::write(&path, "[view]\ncanvas_width = 1024\n").unwrap();

    let config = AppConfig::load_from_file(&path).unwrap();
    assert_eq!(config.view.canvas_width, 1024);
    assert_eq!(config.view.canvas_height, 600);
    assert_eq!(config.storage.catalog_file, PathBuf::from("furniture_catalog.dat"));
}

#[test]
fn test_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("furniview.yaml");
    std::fs::write(&path, "").unwrap();
    assert!(matches!(
        AppConfig::load_from_file(&path),
        Err(StorageError::Config(_))
    ));
}

#[test]
fn test_zero_canvas_is_invalid() {
    let mut config = AppConfig::default();
    config.view.canvas_height = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_load_or_default_without_file() {
    let config = AppConfig::load_or_default(Path::new("/nonexistent/furniview.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_rooted_at_keeps_absolute_paths() {
    let mut config = AppConfig::default();
    config.storage.users_file = PathBuf::from("/etc/users.dat");
    let rooted = config.storage.rooted_at(Path::new("/data"));
    assert_eq!(rooted.designs_dir, PathBuf::from("/data/designs"));
    assert_eq!(rooted.users_file, PathBuf::from("/etc/users.dat"));
}
