use furniview_core::{ColorScheme, Design, Furniture, Rgba, Room, RoomShape};
use furniview_storage::{FileManager, StorageError};
use tempfile::TempDir;

fn sample_design() -> Design {
    let room = Room::new("Lounge", 6.5, 4.25, 2.7, RoomShape::LShaped, ColorScheme::warm());
    let mut design = Design::new("Lounge Layout", "Evening seating", room, "admin");
    design.add_furniture(
        Furniture::new("Sofa", "Sofa", 2.0, 0.9, 0.8, Rgba::rgb(70, 70, 140), "fabric").at(0.3, 1.1),
    );
    let mut table = Furniture::new("Coffee Table", "Table", 1.2, 0.6, 0.45, Rgba::rgb(100, 70, 40), "wood")
        .at(2.15, 2.0);
    table.rotation = 33.3;
    design.add_furniture(table);
    design
}

#[test]
fn test_save_then_load_preserves_design() {
    let temp = TempDir::new().unwrap();
    let manager = FileManager::new(temp.path().join("designs"));
    let design = sample_design();

    manager.save_design(&design, "lounge").unwrap();
    let loaded = manager.load_design("lounge").unwrap();

    assert_eq!(loaded, design);
    assert_eq!(loaded.furniture()[1].rotation, 33.3);
}

#[test]
fn test_save_creates_missing_directory() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("nested").join("designs");
    let manager = FileManager::new(&dir);

    manager.save_design(&Design::default(), "first").unwrap();
    assert!(dir.join("first.fvd").exists());
}

#[test]
fn test_load_missing_design() {
    let temp = TempDir::new().unwrap();
    let manager = FileManager::new(temp.path());

    let err = manager.load_design("ghost").unwrap_err();
    assert!(matches!(err, StorageError::DesignNotFound(name) if name == "ghost"));
}

#[test]
fn test_invalid_names_are_rejected() {
    let temp = TempDir::new().unwrap();
    let manager = FileManager::new(temp.path());

    for name in ["", "   ", "a/b", "a\\b", "..", " padded"] {
        let err = manager.save_design(&Design::default(), name).unwrap_err();
        assert!(matches!(err, StorageError::InvalidName(_)), "name {name:?}");
    }
}

#[test]
fn test_list_designs_sorted_and_filtered() {
    let temp = TempDir::new().unwrap();
    let manager = FileManager::new(temp.path());
    assert!(manager.list_designs().is_empty());

    for name in ["kitchen", "bedroom", "attic"] {
        manager.save_design(&Design::default(), name).unwrap();
    }
    std::fs::write(temp.path().join("notes.txt"), "ignored").unwrap();

    assert_eq!(manager.list_designs(), vec!["attic", "bedroom", "kitchen"]);
}

#[test]
fn test_list_designs_missing_directory_is_empty() {
    let temp = TempDir::new().unwrap();
    let manager = FileManager::new(temp.path().join("absent"));
    assert!(manager.list_designs().is_empty());
}

#[test]
fn test_exists_and_delete() {
    let temp = TempDir::new().unwrap();
    let manager = FileManager::new(temp.path());

    manager.save_design(&Design::default(), "study").unwrap();
    assert!(manager.design_exists("study"));
    assert!(manager.delete_design("study"));
    assert!(!manager.design_exists("study"));
    assert!(!manager.delete_design("study"));
}

#[test]
fn test_export_and_import() {
    let temp = TempDir::new().unwrap();
    let manager = FileManager::new(temp.path().join("designs"));
    let design = sample_design();
    let path = temp.path().join("shared.fvd");

    manager.export_design(&design, &path).unwrap();
    let imported = manager.import_design(&path).unwrap();
    assert_eq!(imported, design);
}

#[test]
fn test_import_corrupt_file_fails() {
    let temp = TempDir::new().unwrap();
    let manager = FileManager::new(temp.path());
    let path = temp.path().join("broken.fvd");
    std::fs::write(&path, "not json").unwrap();

    assert!(matches!(
        manager.import_design(&path),
        Err(StorageError::Json(_))
    ));
}

#[test]
fn test_load_repairs_partial_file() {
    let temp = TempDir::new().unwrap();
    let manager = FileManager::new(temp.path());
    std::fs::write(
        temp.path().join("legacy.fvd"),
        r#"{"name": "Legacy", "room": null, "furniture": [null]}"#,
    )
    .unwrap();

    let design = manager.load_design("legacy").unwrap();
    assert_eq!(design.name(), "Legacy");
    assert_eq!(design.room().width, 5.0);
    assert_eq!(design.furniture_count(), 0);
}

#[test]
fn test_backup_copies_every_design() {
    let temp = TempDir::new().unwrap();
    let manager = FileManager::new(temp.path().join("designs"));
    manager.save_design(&Design::default(), "one").unwrap();
    manager.save_design(&sample_design(), "two").unwrap();

    let backup = temp.path().join("backup");
    assert_eq!(manager.backup_designs(&backup).unwrap(), 2);
    assert!(backup.join("one.fvd").exists());
    assert!(backup.join("two.fvd").exists());

    let restored = FileManager::new(&backup).load_design("two").unwrap();
    assert_eq!(restored.name(), "Lounge Layout");
    assert_eq!(restored.furniture_count(), 2);
}

#[test]
fn test_backup_without_designs_dir() {
    let temp = TempDir::new().unwrap();
    let manager = FileManager::new(temp.path().join("none"));
    assert_eq!(manager.backup_designs(&temp.path().join("backup")).unwrap(), 0);
}
