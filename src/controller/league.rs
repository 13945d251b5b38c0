use crate::AppState;
use crate::controller::sleeper::SleeperClient;
use crate::error::{AppResult, error_response};
use crate::model::utils::{avatar_full_url, avatar_thumb_url, first_non_empty};
use crate::model::{LeagueBundle, LeagueInfo, LeagueRoster, LeagueUser, TeamEntry, TeamRef};
use actix_web::{HttpResponse, web};
use ahash::AHashMap;
use serde_json::json;

pub const DEFAULT_LEAGUE_NAME: &str = "MFFL";

/// Team and manager labels for one roster's owner. The team chain prefers
/// the custom team name, then the owner's display name, then the login
/// name, then a numbered placeholder.
fn resolve_names(user: Option<&LeagueUser>, roster_id: u64) -> (String, String) {
    let metadata_team = user
        .and_then(|u| u.metadata.as_ref())
        .and_then(|m| m.team_name.as_deref());
    let display = user.and_then(|u| u.display_name.as_deref());
    let username = user.and_then(|u| u.username.as_deref());

    let team = first_non_empty(&[metadata_team, display, username])
        .map_or_else(|| format!("Team {roster_id}"), str::to_string);
    let manager = first_non_empty(&[display, username])
        .unwrap_or("—")
        .to_string();
    (team, manager)
}

/// Users and rosters joined into a roster-id lookup. Matchup, transaction,
/// and bracket views all label teams through here.
pub struct TeamDirectory {
    users_by_id: AHashMap<String, LeagueUser>,
    rosters_by_id: AHashMap<u64, LeagueRoster>,
}

impl TeamDirectory {
    #[must_use]
    pub fn new(users: Vec<LeagueUser>, rosters: Vec<LeagueRoster>) -> Self {
        let users_by_id = users
            .into_iter()
            .filter_map(|u| u.user_id.clone().map(|id| (id, u)))
            .collect();
        let rosters_by_id = rosters.into_iter().map(|r| (r.roster_id, r)).collect();
        TeamDirectory {
            users_by_id,
            rosters_by_id,
        }
    }

    /// Label a roster id. Ids with no roster or no owner still produce a
    /// renderable placeholder, never an error.
    #[must_use]
    pub fn team_ref(&self, roster_id: u64) -> TeamRef {
        let user = self
            .rosters_by_id
            .get(&roster_id)
            .and_then(|r| r.owner_id.as_deref())
            .and_then(|owner| self.users_by_id.get(owner));
        let (team, manager) = resolve_names(user, roster_id);
        TeamRef {
            roster_id,
            team,
            manager,
            avatar_thumb: avatar_thumb_url(user.and_then(|u| u.avatar.as_deref())),
        }
    }
}

/// Join league metadata, users, and rosters into the bundle the mobile
/// client renders, rows sorted by team name.
#[must_use]
pub fn league_bundle(
    league: &LeagueInfo,
    users: &[LeagueUser],
    rosters: &[LeagueRoster],
) -> LeagueBundle {
    let users_by_id: AHashMap<&str, &LeagueUser> = users
        .iter()
        .filter_map(|u| u.user_id.as_deref().map(|id| (id, u)))
        .collect();

    let mut roster_rows: Vec<TeamEntry> = rosters
        .iter()
        .map(|r| {
            let user = r
                .owner_id
                .as_deref()
                .and_then(|owner| users_by_id.get(owner).copied());
            let (team, manager) = resolve_names(user, r.roster_id);
            let username = user
                .and_then(|u| u.username.clone())
                .unwrap_or_default();
            let avatar_id = user
                .and_then(|u| u.avatar.clone())
                .filter(|id| !id.is_empty());

            TeamEntry {
                roster_id: r.roster_id,
                owner_id: r.owner_id.clone(),
                manager,
                username,
                team,
                avatar_thumb: avatar_thumb_url(avatar_id.as_deref()),
                avatar_full: avatar_full_url(avatar_id.as_deref()),
                avatar_id,
            }
        })
        .collect();
    roster_rows.sort_by(|a, b| a.team.cmp(&b.team));

    LeagueBundle {
        league_name: first_non_empty(&[league.name.as_deref()])
            .unwrap_or(DEFAULT_LEAGUE_NAME)
            .to_string(),
        roster: roster_rows,
    }
}

/// League metadata, users, and rosters fetched together, all or nothing.
///
/// # Errors
///
/// Will return `Err` if any of the three fetches fails or does not decode.
pub async fn league_snapshot(sleeper: &SleeperClient) -> AppResult<LeagueBundle> {
    let (league, users, rosters) =
        tokio::try_join!(sleeper.league(), sleeper.users(), sleeper.rosters())?;
    Ok(league_bundle(&league, &users, &rosters))
}

/// GET /api/league. Live bundle plus local announcements; if the upstream
/// is down the local document alone still answers, flagged with the error.
pub async fn league_overview(data: web::Data<AppState>) -> HttpResponse {
    let local = data.store.league().await;
    match league_snapshot(&data.sleeper).await {
        Ok(bundle) => HttpResponse::Ok().json(json!({
            "leagueName": bundle.league_name,
            "announcements": local.announcements,
            "roster": bundle.roster,
        })),
        Err(e) => {
            log::warn!("league overview serving local fallback: {e}");
            HttpResponse::Ok().json(json!({
                "leagueName": first_non_empty(&[local.league_name.as_deref()])
                    .unwrap_or(DEFAULT_LEAGUE_NAME),
                "announcements": local.announcements,
                "roster": local.roster,
                "error": e.to_string(),
            }))
        }
    }
}

/// GET /api/sleeper/rosters. Trimmed bundle rows for the Teams tab.
pub async fn roster_list(data: web::Data<AppState>) -> HttpResponse {
    match league_snapshot(&data.sleeper).await {
        Ok(bundle) => {
            let items: Vec<_> = bundle
                .roster
                .into_iter()
                .map(|r| {
                    json!({
                        "roster_id": r.roster_id,
                        "team": r.team,
                        "manager": r.manager,
                        "avatarThumb": r.avatar_thumb,
                        "avatarFull": r.avatar_full,
                    })
                })
                .collect();
            HttpResponse::Ok().json(json!({ "items": items }))
        }
        Err(e) => error_response(&e),
    }
}

/// GET /api/debug/sleeper-users. Raw owner rows for checking avatar and
/// team-name data without the fallback chains applied.
pub async fn debug_users(data: web::Data<AppState>) -> HttpResponse {
    match data.sleeper.users().await {
        Ok(users) => {
            let rows: Vec<_> = users
                .iter()
                .map(|u| {
                    json!({
                        "user_id": u.user_id,
                        "username": u.username,
                        "display_name": u.display_name,
                        "avatar": u.avatar,
                        "team_name": u.metadata.as_ref().and_then(|m| m.team_name.clone()),
                    })
                })
                .collect();
            HttpResponse::Ok().json(rows)
        }
        Err(e) => error_response(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_users() -> Vec<LeagueUser> {
        serde_json::from_value(json!([
            {
                "user_id": "u1",
                "username": "gridironguru",
                "display_name": "Cam",
                "avatar": "abc123",
                "metadata": { "team_name": "The Juggernauts" }
            },
            { "user_id": "u2", "username": "benchwarmer", "display_name": null },
            { "user_id": "u3", "username": null, "display_name": null }
        ]))
        .unwrap()
    }

    fn sample_rosters() -> Vec<LeagueRoster> {
        serde_json::from_value(json!([
            { "roster_id": 1, "owner_id": "u1" },
            { "roster_id": 2, "owner_id": "u2" },
            { "roster_id": 3, "owner_id": "u3" },
            { "roster_id": 4, "owner_id": null }
        ]))
        .unwrap()
    }

    #[test]
    fn bundle_applies_name_chain_and_sorts_by_team() {
        let league: LeagueInfo =
            serde_json::from_value(json!({ "name": "Hometown League" })).unwrap();
        let bundle = league_bundle(&league, &sample_users(), &sample_rosters());

        assert_eq!(bundle.league_name, "Hometown League");
        let teams: Vec<&str> = bundle.roster.iter().map(|r| r.team.as_str()).collect();
        assert_eq!(teams, ["Team 3", "Team 4", "The Juggernauts", "benchwarmer"]);

        let cam = bundle
            .roster
            .iter()
            .find(|r| r.roster_id == 1)
            .unwrap();
        assert_eq!(cam.manager, "Cam");
        assert_eq!(cam.username, "gridironguru");
        assert_eq!(
            cam.avatar_thumb.as_deref(),
            Some("https://sleepercdn.com/avatars/thumbs/abc123")
        );
        assert_eq!(
            cam.avatar_full.as_deref(),
            Some("https://sleepercdn.com/avatars/abc123")
        );
    }

    #[test]
    fn bundle_league_name_defaults() {
        let bundle = league_bundle(&LeagueInfo::default(), &[], &[]);
        assert_eq!(bundle.league_name, DEFAULT_LEAGUE_NAME);
        assert!(bundle.roster.is_empty());
    }

    #[test]
    fn directory_labels_username_only_and_missing_owners() {
        let directory = TeamDirectory::new(sample_users(), sample_rosters());

        let named = directory.team_ref(2);
        assert_eq!(named.team, "benchwarmer");
        assert_eq!(named.manager, "benchwarmer");

        let anonymous = directory.team_ref(3);
        assert_eq!(anonymous.team, "Team 3");
        assert_eq!(anonymous.manager, "—");

        let unknown = directory.team_ref(42);
        assert_eq!(unknown.roster_id, 42);
        assert_eq!(unknown.team, "Team 42");
        assert_eq!(unknown.manager, "—");
        assert_eq!(unknown.avatar_thumb, None);
    }
}
