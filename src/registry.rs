//! In-memory registry of capabilities (and logged intents).
//!
//! Ranking is a stable descending sort on the total score, so capabilities
//! with equal scores keep their registration order. Selection only admits a
//! capability whose score is strictly above zero.

use crate::capability::{Capability, ScoreBreakdown};
use crate::intent::Intent;
use tracing::debug;

#[derive(Clone, Debug, Default)]
/// Append-only list of capabilities plus an intent log matching never reads.
pub struct IntentRegistry {
    intents: Vec<Intent>,
    capabilities: Vec<Capability>,
}

impl IntentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_capabilities(capabilities: impl IntoIterator<Item = Capability>) -> Self {
        let mut registry = Self::new();
        for capability in capabilities {
            registry.add_capability(capability);
        }
        registry
    }

    pub fn add_intent(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    pub fn list_intents(&self) -> &[Intent] {
        &self.intents
    }

    /// Append a capability. Names are not checked for uniqueness; duplicates
    /// are scored independently.
    pub fn add_capability(&mut self, capability: Capability) {
        self.capabilities.push(capability);
    }

    pub fn list_capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }

    /// Score every capability against `intent`, best first.
    pub fn rank_capabilities(&self, intent: &Intent) -> Vec<(f64, &Capability)> {
        let mut scored: Vec<(f64, &Capability)> = self
            .capabilities
            .iter()
            .map(|capability| (capability.score(intent), capability))
            .collect();
        // sort_by is stable: ties stay in registration order.
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored
    }

    /// Top-ranked capability, or `None` when nothing scores above zero.
    pub fn find_best_capability(&self, intent: &Intent) -> Option<&Capability> {
        let (best_score, best) = self.rank_capabilities(intent).into_iter().next()?;
        if best_score <= 0.0 {
            debug!(intent = %intent.name, "no capability scored above zero");
            return None;
        }
        debug!(
            intent = %intent.name,
            capability = %best.name,
            score = best_score,
            "selected capability"
        );
        Some(best)
    }

    /// Breakdowns for every capability, sorted like [`Self::rank_capabilities`].
    pub fn explain_capabilities(&self, intent: &Intent) -> Vec<ScoreBreakdown> {
        let mut details: Vec<ScoreBreakdown> = self
            .capabilities
            .iter()
            .map(|capability| capability.score_breakdown(intent))
            .collect();
        details.sort_by(|a, b| b.total.total_cmp(&a.total));
        details
    }
}
