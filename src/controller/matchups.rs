use crate::AppState;
use crate::controller::league::TeamDirectory;
use crate::controller::week::resolve_week;
use crate::error::{AppResult, error_response};
use crate::model::utils::round_to_tenth;
use crate::model::{MatchupPair, MatchupSide, MatchupsMeta, MatchupsView, RawMatchup};
use actix_web::{HttpResponse, web};
use ahash::AHashMap;
use std::collections::HashMap;

/// Grouping key for raw matchup records. Records with no `matchup_id`
/// group alone under their roster id; the two namespaces never mix, so a
/// stray id value cannot fold a bye into someone else's head-to-head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum GroupKey {
    Matchup(u64),
    Solo(u64),
}

impl GroupKey {
    fn for_record(record: &RawMatchup) -> Self {
        match record.matchup_id {
            Some(id) => GroupKey::Matchup(id),
            None => GroupKey::Solo(record.roster_id),
        }
    }

    fn published_id(self) -> u64 {
        match self {
            GroupKey::Matchup(id) | GroupKey::Solo(id) => id,
        }
    }
}

/// Group raw records and pair each group into sides `a` and `b`, upstream
/// order preserved. Every record lands in exactly one group.
#[must_use]
pub fn pair_matchups(records: Vec<RawMatchup>, directory: &TeamDirectory) -> Vec<MatchupPair> {
    let mut groups: Vec<(GroupKey, Vec<RawMatchup>)> = Vec::new();
    let mut slots: AHashMap<GroupKey, usize> = AHashMap::new();
    for record in records {
        let key = GroupKey::for_record(&record);
        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(record);
    }

    let side = |record: &RawMatchup| {
        MatchupSide::new(
            directory.team_ref(record.roster_id),
            round_to_tenth(record.points),
        )
    };

    let mut pairs = Vec::with_capacity(groups.len());
    for (key, group) in groups {
        let a = group.first().map(side);
        let b = group.get(1).map(side);
        if a.is_some() || b.is_some() {
            pairs.push(MatchupPair {
                id: key.published_id(),
                a,
                b,
            });
        }
    }
    pairs
}

/// Users, rosters, and the week's records fetched together, then paired.
///
/// # Errors
///
/// Will return `Err` if any of the three fetches fails or does not decode.
pub async fn matchups_view(
    data: &AppState,
    week: u32,
    source: &'static str,
) -> AppResult<MatchupsView> {
    let (users, rosters, records) = tokio::try_join!(
        data.sleeper.users(),
        data.sleeper.rosters(),
        data.sleeper.matchups(week)
    )?;

    let directory = TeamDirectory::new(users, rosters);
    let matchups = pair_matchups(records, &directory);
    Ok(MatchupsView {
        week,
        meta: MatchupsMeta {
            source,
            count: matchups.len(),
        },
        matchups,
    })
}

/// GET /api/sleeper/matchups?week=N or ?date=YYYY-MM-DD.
pub async fn matchups_endpoint(
    query: web::Query<HashMap<String, String>>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let week_param = query.get("week").map(String::as_str);
    let date_param = query.get("date").map(String::as_str);

    let (week, source) =
        match resolve_week(&data.sleeper, &data.espn, week_param, date_param, data.tz).await {
            Ok(resolved) => resolved,
            Err(e) => return error_response(&e),
        };

    match matchups_view(&data, week, source).await {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(e) => error_response(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn directory() -> TeamDirectory {
        let users = serde_json::from_value(json!([
            { "user_id": "u1", "username": "alpha", "display_name": "Alpha" },
            { "user_id": "u2", "username": "bravo", "display_name": "Bravo" }
        ]))
        .unwrap();
        let rosters = serde_json::from_value(json!([
            { "roster_id": 1, "owner_id": "u1" },
            { "roster_id": 2, "owner_id": "u2" },
            { "roster_id": 3, "owner_id": null }
        ]))
        .unwrap();
        TeamDirectory::new(users, rosters)
    }

    #[test]
    fn pairs_keep_upstream_order_and_round_points() {
        let records: Vec<RawMatchup> = serde_json::from_value(json!([
            { "roster_id": 1, "matchup_id": 5, "points": 101.27 },
            { "roster_id": 2, "matchup_id": 5, "points": 98.04 }
        ]))
        .unwrap();

        let pairs = pair_matchups(records, &directory());
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].id, 5);
        let a = pairs[0].a.as_ref().unwrap();
        let b = pairs[0].b.as_ref().unwrap();
        assert_eq!(a.roster_id, 1);
        assert_eq!(a.points, 101.3);
        assert_eq!(b.roster_id, 2);
        assert_eq!(b.points, 98.0);
    }

    #[test]
    fn missing_matchup_id_groups_alone() {
        // Roster 2's missing matchup_id must not land it in matchup 2.
        let records: Vec<RawMatchup> = serde_json::from_value(json!([
            { "roster_id": 1, "matchup_id": 2, "points": 80.0 },
            { "roster_id": 3, "matchup_id": 2, "points": 70.0 },
            { "roster_id": 2, "points": 55.5 }
        ]))
        .unwrap();

        let pairs = pair_matchups(records, &directory());
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].id, 2);
        assert!(pairs[0].b.is_some());
        assert_eq!(pairs[1].id, 2);
        assert_eq!(pairs[1].a.as_ref().unwrap().roster_id, 2);
        assert!(pairs[1].b.is_none());
    }

    #[test]
    fn every_record_lands_in_exactly_one_group() {
        let records: Vec<RawMatchup> = serde_json::from_value(json!([
            { "roster_id": 1, "matchup_id": 1, "points": 10.0 },
            { "roster_id": 2, "matchup_id": 1, "points": 20.0 },
            { "roster_id": 3, "points": 30.0 }
        ]))
        .unwrap();

        let pairs = pair_matchups(records, &directory());
        let sides: usize = pairs
            .iter()
            .map(|p| usize::from(p.a.is_some()) + usize::from(p.b.is_some()))
            .sum();
        assert_eq!(sides, 3);
        assert!(pairs.iter().all(|p| p.a.is_some()));
    }
}
