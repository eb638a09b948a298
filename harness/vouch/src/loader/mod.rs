//! Loading discovered test modules.
//!
//! Test modules are compiled into the binary and listed in a [`Catalog`]
//! keyed by module name. Loading a discovered file runs the registration
//! function of the matching entry against the [`Harness`].

use std::panic::{catch_unwind, AssertUnwindSafe};

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::discovery::TestFile;
use crate::registry::Harness;
use crate::result::panic_message;

/// Registration function of one test module.
pub type RegisterFn = fn(&mut Harness);

/// Why a test module could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no test module named `{module}` is registered")]
    Unregistered { module: String },

    #[error("registration of `{module}` panicked: {message}")]
    Panicked { module: String, message: String },

    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

/// Runs the registration code of a discovered test file.
pub trait ModuleLoader {
    fn load(&self, file: &TestFile, harness: &mut Harness) -> Result<(), LoadError>;
}

/// Test modules known at build time.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    modules: FxHashMap<String, RegisterFn>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Add a module. A later entry with the same name replaces the earlier.
    #[must_use]
    pub fn module(mut self, name: impl Into<String>, register: RegisterFn) -> Self {
        self.modules.insert(name.into(), register);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Module names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.modules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl ModuleLoader for Catalog {
    fn load(&self, file: &TestFile, harness: &mut Harness) -> Result<(), LoadError> {
        let Some(register) = self.modules.get(&file.module) else {
            return Err(LoadError::Unregistered {
                module: file.module.clone(),
            });
        };

        debug!(module = %file.module, path = %file.path.display(), "loading");
        catch_unwind(AssertUnwindSafe(|| register(harness))).map_err(|payload| {
            LoadError::Panicked {
                module: file.module.clone(),
                message: panic_message(payload.as_ref()),
            }
        })
    }
}
