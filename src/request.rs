//! JSON request/response envelope for solve calls.
//!
//! Front ends that speak JSON accept a [`SolveRequest`] and reply with a
//! [`SolveResponse`]. The response always echoes the intent that was actually
//! solved (after alias tag inference) so callers can see what was matched.

use crate::capability::{CapabilityName, ScoreBreakdown};
use crate::intent::{Intent, ParamValue};
use crate::params::resolve_tags;
use crate::solver::Solver;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub params: BTreeMap<String, ParamValue>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub explain: bool,
}

impl SolveRequest {
    /// Build the intent to solve, inferring tags from the name when none were given.
    pub fn into_intent(self) -> Intent {
        let tags = resolve_tags(&self.name, self.tags);
        Intent::new(self.name).with_params(self.params).with_tags(tags)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SolveResponse {
    Explained {
        intent: Intent,
        result: Option<String>,
        chosen_capability: Option<CapabilityName>,
        ranking: Vec<ScoreBreakdown>,
    },
    Plain {
        intent: Intent,
        result: Option<String>,
    },
}

impl SolveResponse {
    pub fn result(&self) -> Option<&str> {
        match self {
            SolveResponse::Explained { result, .. } | SolveResponse::Plain { result, .. } => {
                result.as_deref()
            }
        }
    }

    pub fn intent(&self) -> &Intent {
        match self {
            SolveResponse::Explained { intent, .. } | SolveResponse::Plain { intent, .. } => intent,
        }
    }
}

/// Message printed when a solve produced nothing.
pub const NO_RESULT_MESSAGE: &str = "No capability found or handler missing for this intent.";

/// How many ranking rows the text rendering shows.
pub const EXPLAIN_ROWS: usize = 5;

/// Human-readable rendering used by the command-line front end.
pub fn render_text(response: &SolveResponse) -> String {
    let mut out = response.result().unwrap_or(NO_RESULT_MESSAGE).to_string();
    if let SolveResponse::Explained {
        chosen_capability,
        ranking,
        ..
    } = response
    {
        let chosen = chosen_capability
            .as_ref()
            .map(CapabilityName::as_str)
            .unwrap_or("None");
        out.push_str("\n\nExplain:\n");
        out.push_str(&format!("  chosen: {chosen}"));
        for (idx, row) in ranking.iter().take(EXPLAIN_ROWS).enumerate() {
            out.push_str(&format!(
                "\n  {}. {}: total={:.2}, tags={:.2}, params={:.2}",
                idx + 1,
                row.capability,
                row.total,
                row.tag_overlap,
                row.params_score
            ));
        }
    }
    out
}

/// Solve a request, with or without the explain ranking.
pub fn handle_request(solver: &Solver, request: SolveRequest) -> SolveResponse {
    let explain = request.explain;
    let intent = request.into_intent();
    if explain {
        let report = solver.solve_with_explain(&intent);
        SolveResponse::Explained {
            intent,
            result: report.result,
            chosen_capability: report.chosen_capability,
            ranking: report.ranking,
        }
    } else {
        let result = solver.solve(&intent);
        SolveResponse::Plain { intent, result }
    }
}
