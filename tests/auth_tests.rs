use std::io::Cursor;
use std::path::PathBuf;

use battleship::{
    auth::validate_credential,
    cli::{login_menu, InputReader},
    validate_credentials, AuthError, CredentialStore, FileCredentialStore,
    MemoryCredentialStore,
};

fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("battleship-{}-{}.bin", name, std::process::id()));
    let _ = std::fs::remove_file(&path);
    path
}

fn run_menu(store: &mut dyn CredentialStore, script: &str) -> (Option<String>, String) {
    let mut input = InputReader::new(Cursor::new(script.to_string()), Vec::new());
    let user = login_menu(store, &mut input).unwrap();
    let (_, out) = input.into_inner();
    (user, String::from_utf8(out).unwrap())
}

#[test]
fn test_credential_rules() {
    assert!(validate_credentials("alice", "hunter2").is_ok());
    assert_eq!(
        validate_credentials("bob", "hunter2").unwrap_err(),
        AuthError::CredentialInvalid { field: "Username" }
    );
    assert_eq!(
        validate_credentials("alice", "    ").unwrap_err(),
        AuthError::CredentialInvalid { field: "Password" }
    );
    // surrounding blanks do not count toward the length
    assert!(validate_credential("Username", "  abc  ").is_err());
}

#[test]
fn test_memory_store_register_and_verify() {
    let mut store = MemoryCredentialStore::new();
    assert!(store.register("alice", "secret").unwrap());
    assert!(!store.register("alice", "other").unwrap());
    assert!(store.verify("alice", "secret").unwrap());
    assert!(!store.verify("alice", "other").unwrap());
    assert!(!store.verify("carol", "secret").unwrap());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_file_store_persists() {
    let path = temp_path("persist");
    {
        let mut store = FileCredentialStore::open(&path).unwrap();
        assert!(store.register("alice", "secret").unwrap());
        assert!(store.register("bobby", "passw0rd").unwrap());
    }
    let mut store = FileCredentialStore::open(&path).unwrap();
    assert!(store.verify("alice", "secret").unwrap());
    assert!(store.verify("bobby", "passw0rd").unwrap());
    assert!(!store.register("alice", "again").unwrap());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_file_store_rolls_back_failed_save() {
    let mut path = temp_path("missing-dir");
    path.push("nested");
    path.push("users.bin");
    let mut store = FileCredentialStore::open(&path).unwrap();
    assert!(matches!(
        store.register("alice", "secret"),
        Err(AuthError::Store(_))
    ));
    assert!(!store.verify("alice", "secret").unwrap());
    assert!(!path.exists());
}

#[test]
fn test_file_store_rejects_garbage() {
    let path = temp_path("garbage");
    std::fs::write(&path, [0xff; 3]).unwrap();
    assert!(matches!(
        FileCredentialStore::open(&path),
        Err(AuthError::Store(_))
    ));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_menu_register_signs_in() {
    let mut store = MemoryCredentialStore::new();
    let (user, out) = run_menu(&mut store, "2\nalice\nsecret\n");
    assert_eq!(user.as_deref(), Some("alice"));
    assert!(out.contains("Welcome, alice!"));
    assert!(store.verify("alice", "secret").unwrap());
}

#[test]
fn test_menu_recovers_from_bad_input() {
    let mut store = MemoryCredentialStore::new();
    store.register("alice", "secret").unwrap();
    let script = "9\n1\nal\nsecret\n1\nalice\nwrong!\n2\nalice\nsecret\n1\nalice\nsecret\n";
    let (user, out) = run_menu(&mut store, script);
    assert_eq!(user.as_deref(), Some("alice"));
    assert!(out.contains("not a menu option"));
    assert!(out.contains("Username must be at least 5 characters"));
    assert!(out.contains("unknown username or wrong password"));
    assert!(out.contains("username is already taken"));
}

#[test]
fn test_menu_quit() {
    let mut store = MemoryCredentialStore::new();
    let (user, out) = run_menu(&mut store, "3\n");
    assert!(user.is_none());
    assert!(!out.contains("Welcome"));
}

#[test]
fn test_menu_end_of_input_is_error() {
    let mut store = MemoryCredentialStore::new();
    let mut input = InputReader::new(Cursor::new("1\nalice\n"), Vec::new());
    assert!(login_menu(&mut store, &mut input).is_err());
}
