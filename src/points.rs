use crate::models::{Outcome, Player, Pod, Tournament};

/// Fraction of each player's point total that goes into the pool.
pub const STAKE_RATE: f64 = 0.07;

/// Number of players in a pod. The simulate endpoint validates against
/// this; the draw split always divides by it, whatever the slice length.
pub const POD_SIZE: usize = 4;

/// Compute the win/loss/draw deltas for `username` within `players`.
///
/// Every player stakes 7% of their points into a shared pool. A win
/// collects the rest of the pool, a loss forfeits the stake, and a draw
/// splits the pool four ways before netting out the player's own stake.
///
/// Returns `None` when the username is not present in the slice.
pub fn calculate_outcomes(players: &[Player], username: &str) -> Option<Outcome> {
    let stakes: Vec<f64> = players.iter().map(|p| p.points * STAKE_RATE).collect();
    let total_pool: f64 = stakes.iter().sum();

    let you = players.iter().position(|p| p.username == username)?;
    let your_stake = stakes[you];

    Some(Outcome {
        win: total_pool - your_stake,
        loss: -your_stake,
        draw: total_pool / POD_SIZE as f64 - your_stake,
    })
}

/// Find the first pod (in list order) whose player list contains
/// `username`. When the same username appears in several pods, the
/// earliest one wins.
pub fn find_pod<'a>(pods: &'a [Pod], username: &str) -> Option<&'a Pod> {
    pods.iter()
        .find(|pod| pod.players.iter().any(|p| p.username == username))
}

/// Resolve `username` against the full roster of every pod in every
/// round, in rounds/pods/players traversal order. The first occurrence
/// wins for usernames that repeat across rounds.
pub fn find_player<'a>(tournament: &'a Tournament, username: &str) -> Option<&'a Player> {
    tournament
        .rounds
        .iter()
        .flat_map(|round| round.pods.iter())
        .flat_map(|pod| pod.players.iter())
        .find(|p| p.username == username)
}
