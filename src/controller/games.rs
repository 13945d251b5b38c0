use crate::AppState;
use crate::controller::week::day_string;
use crate::error::error_response;
use crate::model::utils::first_non_empty;
use crate::model::{
    GameSideView, GameView, GamesView, SbCompetitor, SbEvent, SbStatus, Scoreboard,
};
use actix_web::{HttpResponse, web};
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use std::collections::HashMap;

/// ESPN start stamps come with or without seconds ("2025-10-05T17:00Z"),
/// so RFC 3339 parsing gets a minute-precision fallback.
fn parse_start(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%MZ")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn local_label(start: &str, tz: FixedOffset) -> Option<String> {
    parse_start(start).map(|utc| {
        utc.with_timezone(&tz)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string()
    })
}

fn status_name(status: &SbStatus) -> Option<String> {
    status
        .status_type
        .as_ref()
        .and_then(|t| t.name.clone())
        .filter(|name| !name.is_empty())
}

fn side_view(side: Option<&SbCompetitor>) -> GameSideView {
    let team = side.and_then(|c| c.team.as_ref());
    GameSideView {
        name: team.and_then(|t| {
            first_non_empty(&[t.display_name.as_deref(), t.name.as_deref()])
                .map(str::to_string)
        }),
        abbrev: team.and_then(|t| t.abbreviation.clone()),
        score: side
            .and_then(|c| c.score.as_deref())
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse::<i64>().ok()),
        logo: team.and_then(|t| t.logo.clone()),
    }
}

/// Flatten one scoreboard event into the shape the schedule screen reads.
#[must_use]
pub fn map_game(
    event: &SbEvent,
    week: Option<u32>,
    season_type: Option<u32>,
    tz: FixedOffset,
) -> GameView {
    let comp = event.competitions.as_ref().and_then(|c| c.first());
    let competitors: &[SbCompetitor] = comp
        .and_then(|c| c.competitors.as_deref())
        .unwrap_or_default();
    let home = competitors
        .iter()
        .find(|c| c.home_away.as_deref() == Some("home"));
    let away = competitors
        .iter()
        .find(|c| c.home_away.as_deref() == Some("away"));

    let start_utc = comp
        .and_then(|c| c.date.clone())
        .or_else(|| event.date.clone());
    let start_local = start_utc.as_deref().and_then(|s| local_label(s, tz));

    let status = event
        .status
        .as_ref()
        .and_then(status_name)
        .or_else(|| comp.and_then(|c| c.status.as_ref()).and_then(status_name))
        .unwrap_or_else(|| "STATUS_SCHEDULED".to_string());

    let network = comp
        .and_then(|c| c.broadcasts.as_ref())
        .and_then(|b| b.first())
        .and_then(|b| {
            b.names
                .as_ref()
                .and_then(|names| names.first())
                .cloned()
                .or_else(|| b.short_name.clone())
        });

    GameView {
        id: event.id.clone(),
        status,
        start_utc,
        start_local,
        week,
        season_type,
        venue: comp
            .and_then(|c| c.venue.as_ref())
            .and_then(|v| v.full_name.clone()),
        network,
        home: side_view(home),
        away: side_view(away),
    }
}

#[must_use]
pub fn games_view(board: &Scoreboard, day: String, tz: FixedOffset) -> GamesView {
    let week = board.week.as_ref().and_then(|w| w.number).filter(|n| *n > 0);
    let season_type = board
        .season
        .as_ref()
        .and_then(|s| s.season_type)
        .filter(|t| *t > 0);

    let games: Vec<GameView> = board
        .events
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|ev| map_game(ev, week, season_type, tz))
        .collect();

    GamesView {
        date: day,
        count: games.len(),
        games,
    }
}

/// GET /api/nfl/games?date=YYYY-MM-DD (or YYYYMMDD). Defaults to today in
/// the league time zone.
pub async fn games_endpoint(
    query: web::Query<HashMap<String, String>>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let day = day_string(query.get("date").map(String::as_str), data.tz);
    match data.espn.scoreboard(&day).await {
        Ok(board) => HttpResponse::Ok().json(games_view(&board, day, data.tz)),
        Err(e) => error_response(&e),
    }
}
