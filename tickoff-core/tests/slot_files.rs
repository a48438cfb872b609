//! On-disk slot layout and atomic-write safety.

use assert_fs::prelude::*;
use predicates::prelude::predicate;
use std::collections::HashSet;
use std::fs;
use std::thread;

use tickoff_core::{
    kv::{data_dir_at, TODOS_KEY},
    theme, FileKvStore, KeyValueStore, Theme, TodoStore,
};

#[test]
fn todos_slot_holds_flat_json_array() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let mut store = TodoStore::open(FileKvStore::new(data_dir_at(home.path())));
    let todo = store.add("write tests").unwrap().unwrap();

    home.child(".tickoff/todos").assert(predicate::path::is_file());
    let raw = fs::read_to_string(home.path().join(".tickoff").join("todos")).expect("read");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(
        value,
        serde_json::json!([{ "id": todo.id.as_str(), "text": "write tests", "completed": false }])
    );
}

#[test]
fn theme_slot_is_plain_string() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let mut kv = FileKvStore::new(data_dir_at(home.path()));
    assert_eq!(theme::load_theme(&kv), Theme::Light);
    theme::toggle_theme(&mut kv).expect("toggle");

    home.child(".tickoff/theme").assert("dark");
    assert_eq!(theme::load_theme(&kv), Theme::Dark);
}

#[test]
fn mid_write_crash_leaves_original_intact() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let mut store = TodoStore::open(FileKvStore::new(data_dir_at(home.path())));
    store.add("survivor").unwrap();

    let slot = store.kv().path_for(TODOS_KEY);
    let original = fs::read(&slot).expect("read original");

    // Simulate crash: .tmp written but process died before rename
    let tmp = store.kv().root().join("todos.tmp");
    fs::write(&tmp, b"[{\"id\": \"torn").expect("write crash tmp");

    assert_eq!(fs::read(&slot).expect("read after crash"), original);
    let reopened = TodoStore::open(FileKvStore::new(data_dir_at(home.path())));
    assert_eq!(reopened.todos()[0].text, "survivor");
}

#[test]
fn unreadable_slot_degrades_to_defaults() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    // A directory where a file is expected makes every read fail.
    home.child(".tickoff/todos").create_dir_all().expect("mkdir");
    home.child(".tickoff/theme").create_dir_all().expect("mkdir");

    let kv = FileKvStore::new(data_dir_at(home.path()));
    assert!(kv.get(TODOS_KEY).is_err());
    assert_eq!(theme::load_theme(&kv), Theme::Light);
    assert!(TodoStore::open(kv).is_empty());
}

#[test]
fn locked_read_modify_write_loses_no_adds() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let root = data_dir_at(home.path());

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let root = root.clone();
            thread::spawn(move || {
                for n in 0..10 {
                    // Each handler opens its own handle, as separate processes do.
                    let kv = FileKvStore::new(&root);
                    let _guard = kv.lock().expect("lock");
                    let mut store = TodoStore::open(kv);
                    store.add(&format!("w{worker}-{n}")).expect("add");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker");
    }

    let store = TodoStore::open(FileKvStore::new(&root));
    assert_eq!(store.len(), 80);
    let texts: HashSet<&str> = store.todos().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts.len(), 80);
}
