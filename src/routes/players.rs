use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::Value;
use crate::topdeck::TopdeckClient;

/// Query parameters for the autocomplete search
#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

/// GET /api/players?q=name - Proxy the upstream player search.
///
/// Returns an empty array when the query is absent or blank, and on any
/// upstream failure. Autocomplete callers only ever want a list.
pub async fn search_players(
    State(client): State<TopdeckClient>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<Value>> {
    let query = match params.q.as_deref() {
        Some(q) if !q.is_empty() => q,
        _ => return Json(vec![]),
    };

    match client.search_players(query).await {
        Ok(players) => Json(players),
        Err(e) => {
            tracing::error!("Player search for {:?} failed: {}", query, e);
            Json(vec![])
        }
    }
}
