//! Scoped environment variable overrides for integration tests.

use std::env;
use std::ffi::{OsStr, OsString};
use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Guard that sets or clears one environment variable until dropped.
pub struct EnvVarGuard {
    key: OsString,
    previous: Option<OsString>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Sets `key` to `value`, or removes it when `value` is `None`.
    pub fn set(key: impl AsRef<OsStr>, value: Option<&OsStr>) -> Self {
        let lock = ENV_MUTEX
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let key_owned = key.as_ref().to_os_string();
        let previous = env::var_os(&key_owned);
        apply(&key_owned, value);

        Self {
            key: key_owned,
            previous,
            _lock: lock,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        apply(&self.key, previous.as_deref());
    }
}

fn apply(key: &OsStr, value: Option<&OsStr>) {
    unsafe {
        // SAFETY: the global mutex serializes environment mutations in tests.
        match value {
            Some(new_value) => env::set_var(key, new_value),
            None => env::remove_var(key),
        }
    }
}
