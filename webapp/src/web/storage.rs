use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage, errors::StorageError};

use serde::Deserialize;

fn storage_key(key: &str) -> String {
    format!("instantes_{}", key)
}

// a missing key is the normal case, so only real failures are logged
pub fn try_local_storage<T>(key: &str) -> Option<T>
where
    T: for<'a> Deserialize<'a>,
{
    let key = storage_key(key);

    match LocalStorage::get(key.clone()) {
        Ok(value) => Some(value),
        Err(StorageError::KeyNotFound(_)) => None,
        Err(err) => {
            console_error!(format!("Failed to fetch local storage {key}: {err}"));
            None
        }
    }
}
