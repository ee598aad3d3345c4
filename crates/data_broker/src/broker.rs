//! DataBroker - central signal registry
//!
//! Stores type-erased signal slots keyed by dotted path and hands out
//! typed handles. Re-declaring a path replaces the previous slot; the
//! registry performs no duplicate checks beyond that.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{Result, SignalError};
use crate::signal::{Signal, SignalRef};

struct SignalEntry {
    type_id: TypeId,
    type_name: &'static str,
    slot: Arc<dyn Any + Send + Sync>,
}

/// Central typed signal registry.
///
/// Declaration happens once at setup (single-threaded); the returned
/// [`SignalRef`] handles are shared and usable from the step loop.
#[derive(Default)]
pub struct DataBroker {
    signals: HashMap<String, SignalEntry>,
}

impl DataBroker {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a signal slot under `path` and return its typed handle.
    ///
    /// Any previously declared slot with the same path is replaced,
    /// regardless of its type.
    pub fn declare<T: Send + Sync + 'static>(&mut self, path: impl Into<String>) -> SignalRef<T> {
        let path = path.into();
        let signal = Arc::new(Signal::<T>::new(path.clone()));

        let entry = SignalEntry {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            slot: signal.clone(),
        };

        if self.signals.insert(path.clone(), entry).is_some() {
            debug!(path = %path, "signal re-declared, previous slot replaced");
        } else {
            debug!(path = %path, signal_type = std::any::type_name::<T>(), "signal declared");
        }

        signal
    }

    /// Look up the signal at `path` as type `T`.
    ///
    /// # Errors
    /// - [`SignalError::NotFound`] when no slot exists at `path`
    /// - [`SignalError::TypeMismatch`] when the slot was declared with a
    ///   different type
    pub fn get<T: Send + Sync + 'static>(&self, path: &str) -> Result<SignalRef<T>> {
        let entry = self.signals.get(path).ok_or_else(|| SignalError::NotFound {
            path: path.to_string(),
        })?;

        entry
            .slot
            .clone()
            .downcast::<Signal<T>>()
            .map_err(|_| SignalError::TypeMismatch {
                path: path.to_string(),
                declared: entry.type_name,
                requested: std::any::type_name::<T>(),
            })
    }

    /// Invoke the setter of the signal at `path` with `value`.
    pub fn write<T: Send + Sync + 'static>(&self, path: &str, value: &T) -> Result<()> {
        trace!(path = %path, "signal write");
        self.get::<T>(path)?.write(value)
    }

    /// Invoke the getter of the signal at `path` and return its value.
    pub fn read<T: Send + Sync + 'static>(&self, path: &str) -> Result<T> {
        self.get::<T>(path)?.read()
    }

    /// Whether a slot exists at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.signals.contains_key(path)
    }

    /// Whether the slot at `path` exists and was declared as `T`.
    pub fn is_type<T: 'static>(&self, path: &str) -> bool {
        self.signals
            .get(path)
            .is_some_and(|entry| entry.type_id == TypeId::of::<T>())
    }

    /// Rust type name the slot at `path` was declared with.
    pub fn type_name_of(&self, path: &str) -> Option<&'static str> {
        self.signals.get(path).map(|entry| entry.type_name)
    }

    /// All declared paths, in arbitrary order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.signals.keys().map(String::as_str)
    }

    /// Number of declared slots.
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}
