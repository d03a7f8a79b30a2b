use furniview_storage::{hash_password, UserStore, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USER};
use tempfile::TempDir;

#[test]
fn test_hash_is_sha256_hex() {
    assert_eq!(
        hash_password("admin123"),
        "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9"
    );
    assert_eq!(hash_password("x").len(), 64);
}

#[test]
fn test_fresh_store_has_admin() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("users.dat");
    let mut store = UserStore::open(&path).unwrap();

    assert!(path.exists());
    assert!(!store.is_logged_in());
    assert!(store.login(DEFAULT_ADMIN_USER, DEFAULT_ADMIN_PASSWORD));
    assert_eq!(store.current_user(), Some("admin"));
}

#[test]
fn test_wrong_password_keeps_session_empty() {
    let temp = TempDir::new().unwrap();
    let mut store = UserStore::open(temp.path().join("users.dat")).unwrap();

    assert!(!store.login("admin", "wrong"));
    assert!(!store.login("nobody", "admin123"));
    assert!(!store.is_logged_in());
}

#[test]
fn test_register_persists_across_reopen() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("users.dat");
    {
        let mut store = UserStore::open(&path).unwrap();
        assert!(store.register_user("dana", "secret").unwrap());
        assert!(!store.register_user("dana", "other").unwrap());
    }

    let mut reopened = UserStore::open(&path).unwrap();
    assert!(reopened.user_exists("dana"));
    assert!(reopened.login("dana", "secret"));
    assert!(reopened.login("admin", "admin123"));
}

#[test]
fn test_register_rejects_empty_fields() {
    let temp = TempDir::new().unwrap();
    let mut store = UserStore::open(temp.path().join("users.dat")).unwrap();

    assert!(!store.register_user("", "pw").unwrap());
    assert!(!store.register_user("  ", "pw").unwrap());
    assert!(!store.register_user("sam", "").unwrap());
    assert!(!store.user_exists("sam"));
}

#[test]
fn test_logout_clears_session() {
    let temp = TempDir::new().unwrap();
    let mut store = UserStore::open(temp.path().join("users.dat")).unwrap();

    store.login("admin", "admin123");
    store.logout();
    assert!(!store.is_logged_in());
    assert_eq!(store.current_user(), None);
}

#[test]
fn test_corrupt_file_is_replaced_with_default() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("users.dat");
    std::fs::write(&path, "{{{ garbage").unwrap();

    let mut store = UserStore::open(&path).unwrap();
    assert!(store.login("admin", "admin123"));

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains(&hash_password("admin123")));
}
