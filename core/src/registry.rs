//! Language -> analysis capability table.
//!
//! Built once at startup through [`ToolRegistryBuilder`] and never mutated
//! afterwards; share it behind an `Arc`.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::runner::ToolRunner;

#[derive(Clone)]
pub enum Capability {
    Runner(Arc<dyn ToolRunner>),
    /// The language is recognized but no runner is wired up yet.
    NotImplemented,
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Runner(r) => f.debug_tuple("Runner").field(&r.name()).finish(),
            Capability::NotImplemented => f.write_str("NotImplemented"),
        }
    }
}

#[derive(Debug, Default)]
pub struct ToolRegistry {
    entries: HashMap<String, Capability>,
}

impl ToolRegistry {
    pub fn builder() -> ToolRegistryBuilder {
        ToolRegistryBuilder::default()
    }

    /// `None` means the language is unsupported for analysis.
    pub fn lookup(&self, language: &str) -> Option<&Capability> {
        self.entries.get(language)
    }

    /// Registered languages, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut langs: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        langs.sort_unstable();
        langs
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Later registrations for the same language replace earlier ones, so each
/// language ends up with exactly one capability.
#[derive(Default)]
pub struct ToolRegistryBuilder {
    entries: HashMap<String, Capability>,
}

impl ToolRegistryBuilder {
    pub fn runner(mut self, language: &str, runner: Arc<dyn ToolRunner>) -> Self {
        self.entries
            .insert(language.to_string(), Capability::Runner(runner));
        self
    }

    pub fn not_implemented(mut self, language: &str) -> Self {
        self.entries
            .insert(language.to_string(), Capability::NotImplemented);
        self
    }

    pub fn build(self) -> ToolRegistry {
        ToolRegistry {
            entries: self.entries,
        }
    }
}
