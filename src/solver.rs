//! Dispatch from intents to capability handlers.
//!
//! The solver picks the best capability through its registry and invokes the
//! handler bound to that capability's name. A capability without a handler is
//! not an error: both `solve` and `solve_with_explain` report "no result".
//!
//! Handlers run synchronously on the caller's thread. The solver does not
//! catch or translate anything a handler does; a panicking handler unwinds
//! through `solve` unchanged.

use crate::capability::{CapabilityName, ScoreBreakdown};
use crate::intent::Intent;
use crate::registry::IntentRegistry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Executable logic bound to a capability name.
pub trait Handler: Send + Sync {
    fn execute(&self, intent: &Intent) -> String;
}

impl<F> Handler for F
where
    F: Fn(&Intent) -> String + Send + Sync,
{
    fn execute(&self, intent: &Intent) -> String {
        self(intent)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Outcome of [`Solver::solve_with_explain`].
///
/// `ranking` always lists every registered capability, even when nothing was
/// chosen.
pub struct ExplainReport {
    pub result: Option<String>,
    pub chosen_capability: Option<CapabilityName>,
    pub ranking: Vec<ScoreBreakdown>,
}

/// Registry plus the handlers that make its capabilities executable.
pub struct Solver {
    registry: IntentRegistry,
    handlers: BTreeMap<CapabilityName, Box<dyn Handler>>,
}

impl Solver {
    pub fn new(registry: IntentRegistry) -> Self {
        Self {
            registry,
            handlers: BTreeMap::new(),
        }
    }

    pub fn registry(&self) -> &IntentRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut IntentRegistry {
        &mut self.registry
    }

    /// Bind `handler` to `capability_name`, replacing any previous binding.
    pub fn register_handler<H>(&mut self, capability_name: impl Into<CapabilityName>, handler: H)
    where
        H: Handler + 'static,
    {
        self.handlers
            .insert(capability_name.into(), Box::new(handler));
    }

    pub fn has_handler(&self, capability_name: &str) -> bool {
        self.handlers.contains_key(capability_name)
    }

    /// Names with a bound handler, in name order.
    pub fn handler_names(&self) -> impl Iterator<Item = &CapabilityName> {
        self.handlers.keys()
    }

    /// Dispatch `intent` to the best capability's handler.
    ///
    /// Returns `None` when no capability scores above zero or the winner has
    /// no handler.
    pub fn solve(&self, intent: &Intent) -> Option<String> {
        let capability = self.registry.find_best_capability(intent)?;
        self.dispatch(capability.name.as_str(), intent)
    }

    /// Like [`Self::solve`], but also reports the full ranking.
    ///
    /// Re-derives the choice from the explain ranking with the same floor and
    /// tie-break as `solve`, so both paths agree for the same registry state.
    pub fn solve_with_explain(&self, intent: &Intent) -> ExplainReport {
        let ranking = self.registry.explain_capabilities(intent);
        let chosen_capability = ranking
            .first()
            .filter(|top| top.total > 0.0)
            .map(|top| top.capability.clone());
        let result = chosen_capability
            .as_ref()
            .and_then(|name| self.dispatch(name.as_str(), intent));

        ExplainReport {
            result,
            chosen_capability,
            ranking,
        }
    }

    fn dispatch(&self, capability_name: &str, intent: &Intent) -> Option<String> {
        let Some(handler) = self.handlers.get(capability_name) else {
            debug!(capability = capability_name, "no handler registered");
            return None;
        };
        debug!(capability = capability_name, intent = %intent.name, "invoking handler");
        Some(handler.execute(intent))
    }
}
