//! Browser-backed preference store and style applier

use reproductor_core::{Error, PreferenceStore, Result, StyleApplier};
use tracing::{debug, warn};
use wasm_bindgen::JsValue;

fn js_error(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// `window.localStorage`, values stored as plain strings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage> {
        let Some(window) = web_sys::window() else {
            warn!("No window, local storage unavailable");
            return Err(Error::StorageUnavailable);
        };

        // Access throws when storage is disabled, e.g. by privacy settings
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => {
                warn!("Local storage unavailable");
                Err(Error::StorageUnavailable)
            }
            Err(err) => {
                let message = js_error(&err);
                warn!(error = %message, "Local storage access denied");
                Err(Error::Storage(message))
            }
        }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let value = Self::storage()?
            .get_item(key)
            .map_err(|err| Error::Storage(js_error(&err)))?;
        debug!(%key, value = ?value, "Loaded preference");
        Ok(value)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| Error::Storage(js_error(&err)))?;
        debug!(%key, %value, "Saved preference");
        Ok(())
    }
}

/// Class list of `document.documentElement`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DocumentClassApplier;

impl DocumentClassApplier {
    fn class_list() -> Result<web_sys::DomTokenList> {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());

        match root {
            Some(element) => Ok(element.class_list()),
            None => {
                warn!("No document root element, skipping class update");
                Err(Error::DocumentUnavailable)
            }
        }
    }
}

impl StyleApplier for DocumentClassApplier {
    fn add_class(&mut self, class: &str) -> Result<()> {
        Self::class_list()?
            .add_1(class)
            .map_err(|err| Error::Style(js_error(&err)))
    }

    fn remove_class(&mut self, class: &str) -> Result<()> {
        Self::class_list()?
            .remove_1(class)
            .map_err(|err| Error::Style(js_error(&err)))
    }
}
