//! Capability acceptance criteria and the fitness score.
//!
//! The total score is a fixed linear blend of two sub-scores, both in
//! `[0.0, 1.0]`:
//!
//! * tag overlap: share of the intent's distinct tags the capability accepts,
//!   `0.0` when the intent carries no tags;
//! * params score: share of the capability's required parameters present in
//!   the intent, `1.0` when nothing is required.
//!
//! Parameter fit carries the larger weight because two capabilities can share
//! tags while only one of them has what it needs to execute.

use crate::capability::identity::CapabilityName;
use crate::intent::Intent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const TAG_WEIGHT: f64 = 0.3;
pub const PARAMS_WEIGHT: f64 = 0.7;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A registered ability to fulfil intents matching certain tags and parameters.
pub struct Capability {
    pub name: CapabilityName,
    #[serde(default)]
    pub accepts_tags: BTreeSet<String>,
    #[serde(default)]
    pub required_params: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Per-capability scoring record surfaced by explain calls.
pub struct ScoreBreakdown {
    pub capability: CapabilityName,
    pub total: f64,
    pub tag_overlap: f64,
    pub params_score: f64,
    pub required_params: Vec<String>,
    pub present_params: Vec<String>,
    pub missing_params: Vec<String>,
}

impl Capability {
    pub fn new<T, P>(name: impl Into<CapabilityName>, accepts_tags: T, required_params: P) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            name: name.into(),
            accepts_tags: accepts_tags.into_iter().map(Into::into).collect(),
            required_params: required_params.into_iter().map(Into::into).collect(),
        }
    }

    /// Full scoring record for `intent`.
    pub fn score_breakdown(&self, intent: &Intent) -> ScoreBreakdown {
        let tag_overlap = self.tag_overlap(intent);

        let (present_params, missing_params): (Vec<String>, Vec<String>) = self
            .required_params
            .iter()
            .cloned()
            .partition(|key| intent.has_param(key));
        // Nothing required means nothing missing.
        let params_score = if self.required_params.is_empty() {
            1.0
        } else {
            present_params.len() as f64 / self.required_params.len() as f64
        };

        ScoreBreakdown {
            capability: self.name.clone(),
            total: TAG_WEIGHT * tag_overlap + PARAMS_WEIGHT * params_score,
            tag_overlap,
            params_score,
            required_params: self.required_params.clone(),
            present_params,
            missing_params,
        }
    }

    pub fn score(&self, intent: &Intent) -> f64 {
        self.score_breakdown(intent).total
    }

    fn tag_overlap(&self, intent: &Intent) -> f64 {
        let wanted = intent.distinct_tags();
        if wanted.is_empty() {
            return 0.0;
        }
        let shared = wanted
            .iter()
            .filter(|tag| self.accepts_tags.contains(**tag))
            .count();
        shared as f64 / wanted.len() as f64
    }
}
