use serde::{Serialize, Deserialize};
use std::collections::HashMap;

/// A player entry as it appears inside a pod, and as callers supply it
/// to the simulate endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Player {
    pub username: String,
    #[serde(default)]
    pub points: f64,
}

/// One pod of a tournament round. Upstream omits `players` for byes,
/// which decodes as an empty list.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Pod {
    #[serde(default)]
    pub players: Vec<Player>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Round {
    #[serde(default)]
    pub pods: Vec<Pod>,
}

/// Tournament data from the Topdeck API. Only the fields we traverse are
/// decoded; anything else the upstream sends is ignored. A tournament with
/// no published rounds decodes as an empty list rather than failing.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Tournament {
    #[serde(default)]
    pub rounds: Vec<Round>,
}

impl Tournament {
    /// Pods of the first round, or an empty slice when no rounds exist.
    /// Pod resolution only ever consults round one.
    pub fn first_round_pods(&self) -> &[Pod] {
        self.rounds.first().map(|r| r.pods.as_slice()).unwrap_or(&[])
    }
}

/// Win/loss/draw point deltas for a single player. Derived per request,
/// never stored.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Outcome {
    pub win: f64,
    pub loss: f64,
    pub draw: f64,
}

/// Body of POST /api/calc. Both fields are required, but they are decoded
/// as options so a missing field produces the inline error response
/// instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CalcRequest {
    #[serde(default)]
    pub urls: Option<Vec<String>>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Per-URL entry in the /api/calc response.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CalcResult {
    Match {
        url: String,
        pod: Vec<Player>,
        outcomes: Outcome,
    },
    Error {
        url: String,
        error: String,
    },
}

/// Whole-response shape for /api/calc: either the per-URL result list or
/// a single error object. Always served with HTTP 200.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CalcResponse {
    Results(Vec<CalcResult>),
    Error { error: String },
}

/// Body of POST /api/simulate. Either `players` (pool-arithmetic variant)
/// or `tournamentId` + `usernames` (roster-lookup variant).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateRequest {
    #[serde(default)]
    pub players: Option<Vec<Player>>,
    #[serde(default)]
    pub tournament_id: Option<String>,
    #[serde(default)]
    pub usernames: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SimulateResponse {
    /// Pool-arithmetic variant: echoes the submitted players.
    Players {
        players: Vec<Player>,
        results: HashMap<String, Outcome>,
    },
    /// Roster-lookup variant: returns the resolved pod.
    Pod {
        pod: Vec<Player>,
        results: HashMap<String, Outcome>,
    },
    Error { error: String },
}
