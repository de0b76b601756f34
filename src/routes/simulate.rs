use axum::{extract::State, response::Json};
use std::collections::HashMap;
use crate::models::{Outcome, Player, SimulateRequest, SimulateResponse};
use crate::points::{self, POD_SIZE};
use crate::topdeck::TopdeckClient;

/// POST /api/simulate - What-if outcomes for a hypothetical pod.
///
/// Two body shapes:
/// - { players: [..4 of {username, points}] } runs the pool arithmetic
///   directly on the submitted players.
/// - { tournamentId, usernames: [..4] } resolves each username against the
///   full roster of the tournament (every pod in every round) first.
///
/// Either way the response maps each username to its win/loss/draw deltas.
pub async fn simulate(
    State(client): State<TopdeckClient>,
    Json(request): Json<SimulateRequest>,
) -> Json<SimulateResponse> {
    if let Some(players) = request.players {
        return Json(simulate_players(players));
    }

    if let (Some(tournament_id), Some(usernames)) = (request.tournament_id, request.usernames) {
        return Json(simulate_roster(&client, &tournament_id, usernames).await);
    }

    Json(SimulateResponse::Error {
        error: "Missing players or tournament roster.".to_string(),
    })
}

fn simulate_players(players: Vec<Player>) -> SimulateResponse {
    if players.len() != POD_SIZE {
        return SimulateResponse::Error {
            error: "You must provide exactly 4 players.".to_string(),
        };
    }

    let results = outcomes_for_pod(&players);
    SimulateResponse::Players { players, results }
}

async fn simulate_roster(
    client: &TopdeckClient,
    tournament_id: &str,
    usernames: Vec<String>,
) -> SimulateResponse {
    if usernames.len() != POD_SIZE {
        return SimulateResponse::Error {
            error: "You must provide exactly 4 usernames.".to_string(),
        };
    }

    let tournament = match client.fetch_tournament(tournament_id).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!("Failed to fetch tournament {}: {}", tournament_id, e);
            return SimulateResponse::Error {
                error: "Failed to fetch data or calculate outcomes.".to_string(),
            };
        }
    };

    let mut pod = Vec::with_capacity(usernames.len());
    for username in &usernames {
        match points::find_player(&tournament, username) {
            Some(player) => pod.push(player.clone()),
            None => {
                return SimulateResponse::Error {
                    error: format!("Player '{}' not found in this tournament.", username),
                };
            }
        }
    }

    let results = outcomes_for_pod(&pod);
    SimulateResponse::Pod { pod, results }
}

/// Every member of the pod gets their own outcome evaluated against the
/// same pool.
fn outcomes_for_pod(players: &[Player]) -> HashMap<String, Outcome> {
    players
        .iter()
        .filter_map(|p| {
            points::calculate_outcomes(players, &p.username)
                .map(|outcome| (p.username.clone(), outcome))
        })
        .collect()
}
