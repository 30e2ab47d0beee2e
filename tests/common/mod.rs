#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use serde_json::{json, Value};
use tempfile::TempDir;
use uuid::Uuid;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a unique directory that outlives the calling test.
pub fn test_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// Writes `document` as `snapshot.json` inside a fresh test directory.
pub fn write_snapshot(document: &Value) -> PathBuf {
    let path = test_dir().join("snapshot.json");
    let body = serde_json::to_string_pretty(document).expect("serialize snapshot");
    std::fs::write(&path, body).expect("write snapshot");
    path
}

/// A March 2024 export shaped like the remote store's rows, string amounts
/// and store-style flag names included.
pub fn store_export() -> Value {
    json!({
        "accounts": [
            { "id": Uuid::new_v4(), "name": "Checking", "current_balance": "9000000" },
            { "id": Uuid::new_v4(), "name": "Savings", "balance": 6000000 },
            { "id": Uuid::new_v4(), "name": "Joint", "balance": 1000000, "exclude_from_total": true },
            { "id": Uuid::new_v4(), "name": "Broken", "balance": "not a number" }
        ],
        "transactions": [
            { "id": Uuid::new_v4(), "type": "income", "amount": "10000000", "income_type": "active", "date": "2024-03-01" },
            { "id": Uuid::new_v4(), "type": "expense", "amount": 4000000, "date": "2024-03-10" },
            { "id": Uuid::new_v4(), "type": "expense", "amount": "2000000", "income_type": null, "date": "2024-03-25" },
            { "id": Uuid::new_v4(), "type": "expense", "amount": 500000, "date": "2024-03-26", "is_deleted": true },
            { "id": Uuid::new_v4(), "type": "transfer", "amount": 750000, "date": "2024-03-27" },
            { "id": Uuid::new_v4(), "type": "income", "amount": 1000000, "income_type": "passive", "date": "2024-04-02" }
        ],
        "loans": [
            { "id": Uuid::new_v4(), "name": "Mortgage", "monthly_payment": "2000000", "is_active": true },
            { "id": Uuid::new_v4(), "name": "Car", "monthly_payment": 300000, "is_active": false }
        ],
        "items": [
            { "id": Uuid::new_v4(), "name": "Flat", "type": "asset", "current_value": 500000000 },
            { "id": Uuid::new_v4(), "name": "Mortgage", "type": "liability", "current_value": "200000000" },
            { "id": Uuid::new_v4(), "name": "Watch", "type": "neutral", "current_value": 3000000 },
            { "id": Uuid::new_v4(), "name": "Mystery", "type": "collectible", "current_value": 1 }
        ]
    })
}
