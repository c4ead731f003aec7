use common::{
    error::{PortalError, PortalResult},
    storage::KeyValueStore,
};
use gloo_storage::{LocalStorage, Storage};

/// [KeyValueStore] over the browser's `localStorage`. Values are stored as raw strings.
#[derive(Clone, Copy, Default, Debug)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        match LocalStorage::raw().get_item(key) {
            Ok(value) => value,
            Err(error) => {
                log::warn!("Could not read '{key}' from local storage. {error:?}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> PortalResult<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|error| PortalError::Storage(format!("Could not write '{key}'. {error:?}")))
    }

    fn delete(&self, key: &str) {
        LocalStorage::delete(key)
    }
}
