use axum::{extract::State, response::Json};
use crate::models::{CalcRequest, CalcResponse, CalcResult};
use crate::points;
use crate::topdeck::TopdeckClient;

/// POST /api/calc - Compute outcomes for one user across several brackets.
///
/// Body: { urls: [..], username: ".." }. The tournament id is the final
/// path segment of each URL. Brackets are fetched sequentially in list
/// order; a user missing from one bracket is reported per-item, but an
/// upstream failure aborts the whole batch with a generic error. All
/// responses are HTTP 200 with errors inline.
pub async fn calc_brackets(
    State(client): State<TopdeckClient>,
    Json(request): Json<CalcRequest>,
) -> Json<CalcResponse> {
    // An empty username counts as missing, same as an absent field.
    let username = request.username.filter(|u| !u.is_empty());
    let (Some(urls), Some(username)) = (request.urls, username) else {
        return Json(CalcResponse::Error {
            error: "Missing URLs or username".to_string(),
        });
    };

    let mut results = Vec::with_capacity(urls.len());

    for url in urls {
        let id = url.rsplit('/').next().unwrap_or("");

        let tournament = match client.fetch_tournament(id).await {
            Ok(t) => t,
            Err(e) => {
                tracing::error!("Failed to fetch tournament {}: {}", id, e);
                return Json(CalcResponse::Error {
                    error: "Failed to fetch data or calculate outcomes.".to_string(),
                });
            }
        };

        let Some(pod) = points::find_pod(tournament.first_round_pods(), &username) else {
            results.push(CalcResult::Error {
                url,
                error: "User not found in this bracket.".to_string(),
            });
            continue;
        };

        match points::calculate_outcomes(&pod.players, &username) {
            Some(outcomes) => results.push(CalcResult::Match {
                url,
                pod: pod.players.clone(),
                outcomes,
            }),
            // Unreachable once find_pod matched, but kept as a per-item
            // error rather than a panic.
            None => results.push(CalcResult::Error {
                url,
                error: "User not found in this bracket.".to_string(),
            }),
        }
    }

    Json(CalcResponse::Results(results))
}
