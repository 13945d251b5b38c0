use crate::AppState;
use crate::controller::players::player_ref;
use crate::error::{AppError, AppResult, error_response};
use crate::model::{LeagueRoster, PlayerInfo, RosterDetail};
use actix_web::{HttpResponse, web};
use ahash::{AHashMap, AHashSet};

/// Starters stay in slot order; the bench is every rostered player not
/// currently starting; reserve is the injured list verbatim.
#[must_use]
pub fn roster_detail(
    roster: &LeagueRoster,
    directory: &AHashMap<String, PlayerInfo>,
) -> RosterDetail {
    let starter_ids = roster.starter_ids();
    let starter_set: AHashSet<&str> = starter_ids.iter().copied().collect();

    let starters = starter_ids
        .iter()
        .map(|id| player_ref(directory, id))
        .collect();
    let bench = roster
        .player_ids()
        .iter()
        .filter(|id| !starter_set.contains(*id))
        .map(|id| player_ref(directory, id))
        .collect();
    let reserve = roster
        .reserve_ids()
        .iter()
        .map(|id| player_ref(directory, id))
        .collect();

    RosterDetail {
        roster_id: roster.roster_id,
        starters,
        bench,
        reserve,
    }
}

/// Find the roster and resolve all three player lists.
///
/// # Errors
///
/// Will return `Err` if the roster id matches nothing, or if a fetch fails
/// or does not decode.
pub async fn roster_detail_view(data: &AppState, wanted: &str) -> AppResult<RosterDetail> {
    let rosters = data.sleeper.rosters().await?;
    let roster = rosters
        .iter()
        .find(|r| r.roster_id.to_string() == wanted)
        .ok_or(AppError::NotFound("Roster not found"))?;

    let directory = data.players.directory(&data.sleeper).await?;
    Ok(roster_detail(roster, &directory))
}

/// GET /api/sleeper/roster/{roster_id}.
pub async fn roster_detail_endpoint(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match roster_detail_view(&data, &path.into_inner()).await {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(e) => error_response(&e),
    }
}
