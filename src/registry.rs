//! Named storage for record validators.
//!
//! This module provides the [`ValidatorRegistry`] type, which holds record
//! validators built once at load time so the rest of an application can look
//! them up and run them by name.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::record::Fields;
use crate::validation::ValidationResult;
use crate::validator::RecordValidator;

/// Type alias for the validator storage map.
type ValidatorMap = Arc<RwLock<HashMap<String, Arc<RecordValidator>>>>;

/// A thread-safe registry of named record validators.
///
/// # Thread Safety
///
/// The registry uses `Arc<RwLock<...>>` for shared access:
/// - Any number of threads can look up and run validators concurrently
/// - Registration operations are serialized
///
/// Cloning a registry is cheap and yields a handle to the same storage.
///
/// # Example
///
/// ```rust
/// use revalid::{matches_field, min_length, RecordValidator, ValidatorRegistry};
/// use serde_json::json;
///
/// let registry = ValidatorRegistry::new();
/// registry
///     .register(
///         "signup",
///         RecordValidator::new()
///             .field("password", min_length(8))
///             .field("confirm", matches_field("password")),
///     )
///     .unwrap();
///
/// let record = json!({"password": "longenough", "confirm": "longenough"});
/// let result = registry.validate("signup", record.as_object().unwrap()).unwrap();
/// assert!(result.is_valid);
/// ```
#[derive(Clone, Default)]
pub struct ValidatorRegistry {
    validators: ValidatorMap,
}

impl ValidatorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            validators: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Registers a validator under the given name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if the name is already taken.
    ///
    /// ```rust
    /// use revalid::{RecordValidator, ValidatorRegistry};
    ///
    /// let registry = ValidatorRegistry::new();
    /// registry.register("login", RecordValidator::new()).unwrap();
    ///
    /// assert!(registry.register("login", RecordValidator::new()).is_err());
    /// ```
    pub fn register(
        &self,
        name: impl Into<String>,
        validator: RecordValidator,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let mut validators = self.validators.write();

        if validators.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        debug!(name = %name, fields = validator.len(), "registered record validator");
        validators.insert(name, Arc::new(validator));
        Ok(())
    }

    /// Retrieves a validator by name.
    pub fn get(&self, name: &str) -> Option<Arc<RecordValidator>> {
        self.validators.read().get(name).cloned()
    }

    /// Returns true if a validator is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.validators.read().contains_key(name)
    }

    /// Returns the registered names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.validators.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns the number of registered validators.
    pub fn len(&self) -> usize {
        self.validators.read().len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.validators.read().is_empty()
    }

    /// Validates a record with the named validator.
    ///
    /// The registry lock is released before the record is validated.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::ValidatorNotFound` if the name is unknown.
    pub fn validate(&self, name: &str, fields: &Fields) -> Result<ValidationResult, RegistryError> {
        let validator = self.get(name).ok_or_else(|| {
            debug!(name = %name, "no record validator registered under name");
            RegistryError::ValidatorNotFound(name.to_string())
        })?;

        Ok(validator.validate(fields))
    }
}

impl std::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("names", &self.names())
            .finish()
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a validator with a name that already exists.
    #[error("validator '{0}' already registered")]
    DuplicateName(String),

    /// Attempted to validate with a name that doesn't exist.
    #[error("validator '{0}' not found")]
    ValidatorNotFound(String),
}
