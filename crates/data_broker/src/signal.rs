//! Signal - one typed slot in the registry
//!
//! A signal carries an optional setter (for writable actuation slots) and
//! an optional getter (for live read-back slots). Callbacks are installed
//! after declaration and invoked inline on every write/read.

use std::sync::{Arc, Mutex};

use crate::error::{Result, SignalError};

/// Setter callback type
pub type SetterFn<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Getter callback type
pub type GetterFn<T> = Box<dyn Fn() -> T + Send + Sync>;

/// Shared handle to a declared signal
pub type SignalRef<T> = Arc<Signal<T>>;

/// One typed signal slot.
///
/// Created through [`DataBroker::declare`](crate::DataBroker::declare);
/// the broker keeps a type-erased reference, callers keep typed handles.
pub struct Signal<T> {
    path: String,
    setter: Mutex<Option<SetterFn<T>>>,
    getter: Mutex<Option<GetterFn<T>>>,
}

impl<T> Signal<T> {
    pub(crate) fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            setter: Mutex::new(None),
            getter: Mutex::new(None),
        }
    }

    /// Full dotted path of this signal.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Install the setter callback, replacing any previous one.
    pub fn set_setter(&self, setter: impl Fn(&T) + Send + Sync + 'static) {
        *lock_ignore_poison(&self.setter) = Some(Box::new(setter));
    }

    /// Install the getter callback, replacing any previous one.
    pub fn set_getter(&self, getter: impl Fn() -> T + Send + Sync + 'static) {
        *lock_ignore_poison(&self.getter) = Some(Box::new(getter));
    }

    /// Whether a setter is installed.
    pub fn has_setter(&self) -> bool {
        lock_ignore_poison(&self.setter).is_some()
    }

    /// Whether a getter is installed.
    pub fn has_getter(&self) -> bool {
        lock_ignore_poison(&self.getter).is_some()
    }

    /// Invoke the setter with `value`.
    ///
    /// # Errors
    /// [`SignalError::NoSetter`] when no setter is installed.
    pub fn write(&self, value: &T) -> Result<()> {
        let guard = lock_ignore_poison(&self.setter);
        match guard.as_ref() {
            Some(setter) => {
                setter(value);
                Ok(())
            }
            None => Err(SignalError::NoSetter {
                path: self.path.clone(),
            }),
        }
    }

    /// Invoke the getter and return its value.
    ///
    /// The getter runs on every call; nothing is cached between reads.
    ///
    /// # Errors
    /// [`SignalError::NoGetter`] when no getter is installed.
    pub fn read(&self) -> Result<T> {
        let guard = lock_ignore_poison(&self.getter);
        match guard.as_ref() {
            Some(getter) => Ok(getter()),
            None => Err(SignalError::NoGetter {
                path: self.path.clone(),
            }),
        }
    }
}

// Callbacks must stay reachable even if a previous caller panicked while
// holding the lock.
fn lock_ignore_poison<V>(mutex: &Mutex<V>) -> std::sync::MutexGuard<'_, V> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
