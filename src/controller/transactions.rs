use crate::AppState;
use crate::controller::league::TeamDirectory;
use crate::controller::players::player_ref;
use crate::controller::week::resolve_round;
use crate::error::{AppResult, error_response};
use crate::model::utils::ms_epoch_to_iso;
use crate::model::{
    PlayerAdd, PlayerDrop, PlayerInfo, RawTransaction, TransactionItem, TransactionsView,
};
use actix_web::{HttpResponse, web};
use ahash::AHashMap;
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use std::collections::HashMap;

/// Expand one raw transaction: player ids through the directory, roster
/// ids through the team lookup. `when` prefers the status-change stamp
/// over creation, with zero treated as unset.
#[must_use]
pub fn transaction_item(
    raw: &RawTransaction,
    round: u32,
    directory: &TeamDirectory,
    players: &AHashMap<String, PlayerInfo>,
) -> TransactionItem {
    let stamp = raw
        .status_updated
        .filter(|ms| *ms != 0)
        .or_else(|| raw.created.filter(|ms| *ms != 0));
    let when = stamp
        .and_then(ms_epoch_to_iso)
        .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));

    let adds = raw
        .adds
        .iter()
        .flatten()
        .map(|(pid, rid)| PlayerAdd {
            player: player_ref(players, pid),
            to: directory.team_ref(*rid),
        })
        .collect();
    let drops = raw
        .drops
        .iter()
        .flatten()
        .map(|(pid, rid)| PlayerDrop {
            player: player_ref(players, pid),
            from: directory.team_ref(*rid),
        })
        .collect();
    let rosters = raw
        .roster_ids
        .iter()
        .flatten()
        .map(|rid| directory.team_ref(*rid))
        .collect();

    TransactionItem {
        id: raw.transaction_id.clone(),
        kind: raw.kind.clone(),
        status: raw.status.clone(),
        when,
        round,
        adds,
        drops,
        rosters,
        waiver_bid: raw.waiver_bid.unwrap_or(0),
        draft_picks: raw
            .draft_picks
            .clone()
            .unwrap_or_else(|| Value::Array(Vec::new())),
    }
}

/// Users, rosters, the round's transactions, and the player directory
/// fetched together, then expanded.
///
/// # Errors
///
/// Will return `Err` if any required fetch fails or does not decode.
pub async fn transactions_view(data: &AppState, round: u32) -> AppResult<TransactionsView> {
    let (users, rosters, raw, players) = tokio::try_join!(
        data.sleeper.users(),
        data.sleeper.rosters(),
        data.sleeper.transactions(round),
        data.players.directory(&data.sleeper)
    )?;

    let directory = TeamDirectory::new(users, rosters);
    let items: Vec<TransactionItem> = raw
        .iter()
        .map(|t| transaction_item(t, round, &directory, &players))
        .collect();
    Ok(TransactionsView {
        round,
        count: items.len(),
        items,
    })
}

/// GET /api/sleeper/transactions?round=N or ?date=YYYY-MM-DD.
pub async fn transactions_endpoint(
    query: web::Query<HashMap<String, String>>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let round_param = query.get("round").map(String::as_str);
    let date_param = query.get("date").map(String::as_str);

    let (round, _source) =
        match resolve_round(&data.sleeper, &data.espn, round_param, date_param, data.tz).await {
            Ok(resolved) => resolved,
            Err(e) => return error_response(&e),
        };

    match transactions_view(&data, round).await {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(e) => error_response(&e),
    }
}
