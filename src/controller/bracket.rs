use crate::AppState;
use crate::controller::league::TeamDirectory;
use crate::error::{AppResult, error_response};
use crate::model::{BracketNodeView, BracketView, LeagueInfo, RawBracketNode};
use actix_web::{HttpResponse, web};

/// Resolve one bracket's team slots. A null slot means the feeding match
/// has not been decided; it stays null.
#[must_use]
pub fn map_nodes(nodes: Vec<RawBracketNode>, directory: &TeamDirectory) -> Vec<BracketNodeView> {
    nodes
        .into_iter()
        .map(|n| BracketNodeView {
            r: n.r,
            m: n.m,
            t1: n.t1.map(|rid| directory.team_ref(rid)),
            t2: n.t2.map(|rid| directory.team_ref(rid)),
            t1_from: n.t1_from,
            t2_from: n.t2_from,
            w: n.w,
        })
        .collect()
}

/// First playoff week, from league settings with the legacy top-level
/// field as fallback. Zero means unset either way.
#[must_use]
pub fn playoff_start_week(league: &LeagueInfo) -> Option<u32> {
    league
        .settings
        .as_ref()
        .and_then(|s| s.playoff_week_start)
        .filter(|wk| *wk > 0)
        .or_else(|| league.playoff_start_week.filter(|wk| *wk > 0))
}

/// Both brackets plus the metadata and team lookups, fetched together.
///
/// # Errors
///
/// Will return `Err` if any of the five fetches fails or does not decode.
pub async fn bracket_overview(data: &AppState) -> AppResult<BracketView> {
    let (league, users, rosters, winners, losers) = tokio::try_join!(
        data.sleeper.league(),
        data.sleeper.users(),
        data.sleeper.rosters(),
        data.sleeper.winners_bracket(),
        data.sleeper.losers_bracket()
    )?;

    let directory = TeamDirectory::new(users, rosters);
    Ok(BracketView {
        playoff_start_week: playoff_start_week(&league),
        winners: map_nodes(winners, &directory),
        losers: map_nodes(losers, &directory),
    })
}

/// GET /api/sleeper/bracket.
pub async fn bracket_endpoint(data: web::Data<AppState>) -> HttpResponse {
    match bracket_overview(&data).await {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(e) => error_response(&e),
    }
}
