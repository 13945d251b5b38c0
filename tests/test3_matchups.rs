mod common;

use crate::common::{rosters_body, test_state, users_body};
use rusty_league::controller::matchups::matchups_view;

#[tokio::test]
async fn test3_pairs_rounds_and_byes() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (optional, but useful for debugging)
    // let _ = env_logger::builder().is_test(true).try_init();

    let mut sleeper = mockito::Server::new_async().await;

    sleeper
        .mock("GET", "/league/999/users")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(users_body())
        .create_async()
        .await;
    sleeper
        .mock("GET", "/league/999/rosters")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(rosters_body())
        .create_async()
        .await;
    let records = sleeper
        .mock("GET", "/league/999/matchups/5")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
              { "roster_id": 1, "matchup_id": 1, "points": 101.27 },
              { "roster_id": 2, "matchup_id": 1, "points": 98.04 },
              { "roster_id": 3, "matchup_id": null, "points": null },
              { "roster_id": 99, "matchup_id": 2, "points": 55.0 }
            ]"#,
        )
        .expect(1)
        .create_async()
        .await;

    let state = test_state(&sleeper.url(), "http://127.0.0.1:9", &std::env::temp_dir());
    let view = matchups_view(&state, 5, "query.week").await?;

    assert_eq!(view.week, 5);
    assert_eq!(view.meta.source, "query.week");
    assert_eq!(view.meta.count, 3);

    // First-seen order: the head-to-head, then the bye, then the late pair.
    let ids: Vec<u64> = view.matchups.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 3, 2]);

    let head_to_head = &view.matchups[0];
    let a = head_to_head.a.as_ref().unwrap();
    let b = head_to_head.b.as_ref().unwrap();
    assert_eq!(a.roster_id, 1);
    assert_eq!(a.team, "The Juggernauts");
    assert_eq!(a.points, 101.3);
    assert_eq!(b.roster_id, 2);
    assert_eq!(b.team, "benchwarmer");
    assert_eq!(b.points, 98.0);

    // A record with no matchup id stands alone; null points score zero.
    let bye = &view.matchups[1];
    let solo = bye.a.as_ref().unwrap();
    assert_eq!(solo.roster_id, 3);
    assert_eq!(solo.team, "Team 3");
    assert_eq!(solo.points, 0.0);
    assert!(bye.b.is_none());

    // A roster id the league does not know still gets a placeholder label.
    let stranger = view.matchups[2].a.as_ref().unwrap();
    assert_eq!(stranger.team, "Team 99");
    assert_eq!(stranger.manager, "—");
    assert_eq!(stranger.points, 55.0);

    records.assert_async().await;
    Ok(())
}
