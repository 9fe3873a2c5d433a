//! In-memory store for locally created characters.
//!
//! Records live in insertion order inside a single vector, and ids
//! come from a counter that only ever grows. Both sit behind one
//! `RwLock` so every read-modify-write is atomic with respect to
//! other requests. Nothing is persisted: a new store starts empty
//! with the counter at 1.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use serde_json::{Map, Value};

use crate::core::error::{GatewayError, Result};
use crate::core::params::Page;
use crate::core::types::{is_truthy, Character, ListResponse, RESERVED_FIELDS};

/// Mutable state guarded by the store lock
#[derive(Debug)]
struct StoreState {
    characters: Vec<Character>,
    next_id: u64,
}

/// Local character store
#[derive(Debug)]
pub struct CharacterStore {
    state: RwLock<StoreState>,
}

impl Default for CharacterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                characters: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>> {
        self.state
            .read()
            .map_err(|_| GatewayError::Internal("Local store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>> {
        self.state
            .write()
            .map_err(|_| GatewayError::Internal("Local store lock poisoned".to_string()))
    }

    /// Number of stored characters
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.characters.len())
    }

    /// True when no character is stored
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Return one page of characters in creation order
    ///
    /// `total` is the size of the whole collection.
    pub fn list(&self, page: Page) -> Result<ListResponse> {
        let state = self.read()?;
        let range = page.range(state.characters.len());

        Ok(ListResponse {
            results: state.characters[range].to_vec(),
            total: state.characters.len(),
        })
    }

    /// Create a character from a request body
    ///
    /// The body must be an object with a truthy `name` (anything but
    /// `null`, `false`, `0` or `""`). Store-owned fields in the body
    /// are ignored.
    ///
    /// # Errors
    ///
    /// - `Validation`: body absent, not an object, or without a
    ///   truthy `name`
    pub fn create(&self, payload: Option<Value>) -> Result<Character> {
        let Some(Value::Object(mut fields)) = payload else {
            return Err(GatewayError::missing_name());
        };

        let name = match fields.remove("name") {
            Some(name) if is_truthy(&name) => name,
            _ => return Err(GatewayError::missing_name()),
        };
        strip_reserved(&mut fields);

        let mut state = self.write()?;
        let id = state.next_id.to_string();
        state.next_id += 1;

        let character = Character {
            id,
            name,
            extra: fields,
            created_at: Utc::now(),
            updated_at: None,
        };
        state.characters.push(character.clone());

        tracing::info!(id = %character.id, name = %character.name, "Created local character");
        Ok(character)
    }

    /// Shallow-merge `patch` into the character with `id`
    ///
    /// Body fields replace same-named fields, `name` included and
    /// whatever its type; everything else is left untouched.
    /// `updatedAt` is refreshed and the record keeps its position.
    /// An absent or non-object body is an empty patch.
    ///
    /// # Errors
    ///
    /// - `CharacterNotFound`: no character has this id
    pub fn update(&self, id: &str, patch: Option<Value>) -> Result<Character> {
        let mut state = self.write()?;
        let character = state
            .characters
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| GatewayError::CharacterNotFound(id.to_string()))?;

        let mut fields = match patch {
            Some(Value::Object(fields)) => fields,
            _ => Map::new(),
        };
        strip_reserved(&mut fields);

        if let Some(name) = fields.remove("name") {
            character.name = name;
        }
        character.extra.extend(fields);
        character.updated_at = Some(Utc::now());

        tracing::info!(id = %character.id, "Updated local character");
        Ok(character.clone())
    }

    /// Remove the character with `id` and return it
    ///
    /// # Errors
    ///
    /// - `CharacterNotFound`: no character has this id
    pub fn delete(&self, id: &str) -> Result<Character> {
        let mut state = self.write()?;
        let index = state
            .characters
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| GatewayError::CharacterNotFound(id.to_string()))?;

        let removed = state.characters.remove(index);

        tracing::info!(id = %removed.id, "Deleted local character");
        Ok(removed)
    }
}

fn strip_reserved(fields: &mut Map<String, Value>) {
    for key in RESERVED_FIELDS {
        fields.remove(key);
    }
}
