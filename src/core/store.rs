use crate::config::FlagConfig;
use crate::core::feature::Feature;
use crate::core::hooks::{FailureHook, PanicHook, Violation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;
use tracing::{debug, info};

/// A single owned (name, enabled) pair that supersedes a feature's default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideEntry {
    pub name: String,
    pub enabled: bool,
}

/// Holds the active overrides and the failure hook between `init` and
/// `shutdown`. Each store is independent; hosts that want several flag
/// domains simply build several stores.
pub struct OverrideStore {
    overrides: Vec<OverrideEntry>,
    failure_hook: Arc<dyn FailureHook>,
}

impl Default for OverrideStore {
    fn default() -> Self {
        OverrideStore {
            overrides: Vec::new(),
            failure_hook: Arc::new(PanicHook),
        }
    }
}

impl OverrideStore {
    /// Builds a store from the given config, or from `FlagConfig::default()`
    /// when `None`. The store takes ownership of the override entries, so
    /// nothing the caller keeps can alias or mutate them afterwards.
    pub fn init(config: Option<FlagConfig>) -> OverrideStore {
        let config = config.unwrap_or_default();
        let store = OverrideStore {
            overrides: config.overrides,
            failure_hook: config.failure_hook,
        };

        info!(
            "override store initiated with {} overrides",
            store.overrides.len()
        );
        for entry in &store.overrides {
            debug!("override {} => {}", entry.name, entry.enabled);
        }

        store
    }

    /// Releases all overrides and restores the default hook, leaving the
    /// store as if it had never been initialized. Calling this on an
    /// already-reset store is a no-op.
    pub fn shutdown(&mut self) {
        debug!(
            "override store shut down, releasing {} overrides",
            self.overrides.len()
        );
        *self = OverrideStore::default();
    }

    /// Tests if the given feature is enabled: the first override whose name
    /// matches wins, otherwise the feature's own default applies.
    ///
    /// `feature.name` must be non-empty; an empty name trips the failure
    /// hook, and if the hook returns the lookup falls back to the default.
    #[track_caller]
    pub fn is_enabled(&self, feature: &Feature) -> bool {
        if !self.check(
            !feature.name.is_empty(),
            "!feature.name.is_empty()",
            "feature name cannot be empty",
        ) {
            return feature.enabled_by_default;
        }

        // Todo: a name index would beat the linear scan once override sets grow
        for entry in &self.overrides {
            if entry.name == feature.name {
                return entry.enabled;
            }
        }

        feature.enabled_by_default
    }

    /// Read-only view of the active overrides, in insertion order. The
    /// borrow ends before any later `shutdown` or re-init can invalidate it.
    pub fn overrides(&self) -> &[OverrideEntry] {
        &self.overrides
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    #[track_caller]
    fn check(&self, condition: bool, condition_text: &str, message: &str) -> bool {
        if !condition {
            self.failure_hook.on_contract_violation(&Violation {
                location: Location::caller(),
                condition: condition_text,
                message,
            });
        }
        condition
    }
}

impl fmt::Debug for OverrideStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OverrideStore(overrides={})", self.overrides.len())
    }
}
