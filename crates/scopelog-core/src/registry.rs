//! Registry of live scoped loggers
//!
//! Every logger created through a `Context` registers itself here and stays
//! registered until it is disposed. Scope names are not unique; lookups by
//! scope resolve to the first match in scope/id order.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::level::Level;
use crate::logger::{LoggerId, ScopedLogger};

/// One row of the registry summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeSummary {
    pub scope: String,
    pub id: String,
    /// Level display name (e.g. "Warning")
    pub level: String,
}

struct RegistryEntry {
    scope: String,
    id: LoggerId,
    logger: ScopedLogger,
}

/// Mapping of live loggers, keyed by their creation key
#[derive(Default)]
pub struct Registry {
    entries: RwLock<HashMap<u64, RegistryEntry>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn register(&self, logger: &ScopedLogger) {
        let entry = RegistryEntry {
            scope: logger.scope(),
            id: logger.id(),
            logger: logger.clone(),
        };
        self.entries.write().insert(logger.key(), entry);
    }

    /// Remove a logger, returning whether it was registered
    pub(crate) fn deregister(&self, key: u64) -> bool {
        self.entries.write().remove(&key).is_some()
    }

    /// Refresh the scope and id recorded for a logger
    pub(crate) fn update(&self, key: u64, scope: &str, id: &LoggerId) {
        if let Some(entry) = self.entries.write().get_mut(&key) {
            entry.scope = scope.to_string();
            entry.id = id.clone();
        }
    }

    /// Find a logger by its id
    pub fn find_by_id(&self, id: &str) -> Option<ScopedLogger> {
        self.entries
            .read()
            .values()
            .find(|e| e.id.as_str() == id)
            .map(|e| e.logger.clone())
    }

    /// Find the first logger (in scope/id order) with the given scope
    pub fn find_first_by_scope(&self, scope: &str) -> Option<ScopedLogger> {
        let entries = self.entries.read();
        entries
            .values()
            .filter(|e| e.scope == scope)
            .min_by(|a, b| a.id.cmp(&b.id))
            .map(|e| e.logger.clone())
    }

    /// All live loggers sorted by scope, then id
    pub fn list_all(&self) -> Vec<ScopedLogger> {
        self.sorted(|e| e.logger.clone())
    }

    /// Scope, id and level of every live logger, sorted like `list_all`
    pub fn list_summary(&self) -> Vec<ScopeSummary> {
        self.sorted(|e| ScopeSummary {
            scope: e.scope.clone(),
            id: e.id.to_string(),
            level: e.logger.level().name().to_string(),
        })
    }

    /// Parallel vectors of scopes, ids and level names
    pub fn list_scopes_and_levels(&self) -> (Vec<String>, Vec<String>, Vec<String>) {
        let mut scopes = Vec::new();
        let mut ids = Vec::new();
        let mut levels = Vec::new();
        for row in self.list_summary() {
            scopes.push(row.scope);
            ids.push(row.id);
            levels.push(row.level);
        }
        (scopes, ids, levels)
    }

    /// Set the level of the logger with `id`; returns whether it was found
    pub fn set_level_by_id(&self, id: &str, level: Level) -> bool {
        match self.find_by_id(id) {
            Some(logger) => {
                logger.set_level(level);
                true
            }
            None => false,
        }
    }

    /// Set the level of the first logger named `scope`
    pub fn set_level_by_scope(&self, scope: &str, level: Level) -> bool {
        match self.find_first_by_scope(scope) {
            Some(logger) => {
                logger.set_level(level);
                true
            }
            None => false,
        }
    }

    /// Number of live loggers
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether no logger is registered
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn sorted<T>(&self, project: impl Fn(&RegistryEntry) -> T) -> Vec<T> {
        let entries = self.entries.read();
        let mut rows: Vec<&RegistryEntry> = entries.values().collect();
        rows.sort_by(|a, b| a.scope.cmp(&b.scope).then_with(|| a.id.cmp(&b.id)));
        rows.into_iter().map(project).collect()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("len", &self.len())
            .finish()
    }
}
