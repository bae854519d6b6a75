//! Small key-value preferences owned by the host shell.
//!
//! The app keeps a handful of strings on the device: the signed-in user's
//! id, the chosen UI language, and whether the age gate was confirmed.
//! Logging out forgets the account and the age confirmation; the language
//! stays.
//! Storage is injected as a [`KeyValueStore`]; sessions and the selection
//! builder never see it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StorageError;

pub mod keys {
    pub const USER_ID: &str = "lg_userId";
    pub const USER: &str = "lg_user";
    pub const EMAIL: &str = "lg_email";
    pub const TOKEN: &str = "lg_token";
    pub const LANGUAGE: &str = "app_lang";
    pub const AGE_CONFIRMED: &str = "lg_isAdult18";

    /// Everything cleared on logout.
    pub const SIGNED_IN: [&str; 5] = [USER_ID, USER, EMAIL, TOKEN, AGE_CONFIRMED];
}

/// Minimal string store, e.g. a platform keychain.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Deleting a missing key is not an error.
    fn delete(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-process store for tests and headless hosts.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// UI language. English is the fallback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    He,
}

impl Language {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::He => "he",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "he" => Some(Language::He),
            _ => None,
        }
    }

    /// Hebrew lays out right-to-left.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Language::He)
    }
}

/// Typed accessors over a store.
#[derive(Debug)]
pub struct Preferences<S> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn user_id(&self) -> Result<Option<String>, StorageError> {
        Ok(self
            .store
            .get(keys::USER_ID)?
            .filter(|id| !id.trim().is_empty()))
    }

    pub fn set_user_id(&mut self, user_id: &str) -> Result<(), StorageError> {
        self.store.set(keys::USER_ID, user_id)
    }

    /// Saved language, falling back to English when unset or unknown.
    pub fn language(&self) -> Result<Language, StorageError> {
        Ok(self
            .store
            .get(keys::LANGUAGE)?
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default())
    }

    pub fn set_language(&mut self, language: Language) -> Result<(), StorageError> {
        self.store.set(keys::LANGUAGE, language.code())
    }

    pub fn age_confirmed(&self) -> Result<bool, StorageError> {
        Ok(self.store.get(keys::AGE_CONFIRMED)?.as_deref() == Some("true"))
    }

    pub fn confirm_age(&mut self) -> Result<(), StorageError> {
        self.store.set(keys::AGE_CONFIRMED, "true")
    }

    /// Forget the signed-in account and the age confirmation.
    ///
    /// Every key is attempted; the first failure is reported.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        let mut first_err = None;
        for key in keys::SIGNED_IN {
            if let Err(err) = self.store.delete(key) {
                debug!(key, error = %err, "failed to clear key on logout");
                first_err.get_or_insert(err);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}
