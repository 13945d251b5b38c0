mod common;

use crate::common::{rosters_body, test_state, users_body};
use rusty_league::controller::bracket::bracket_overview;
use rusty_league::error::error_response;
use serde_json::json;

async fn mount_core(server: &mut mockito::Server) -> Vec<mockito::Mock> {
    vec![
        server
            .mock("GET", "/league/999")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{ "name": "Mockingbird League",
                     "settings": { "playoff_week_start": 15 },
                     "playoff_start_week": 14 }"#,
            )
            .create_async()
            .await,
        server
            .mock("GET", "/league/999/users")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(users_body())
            .create_async()
            .await,
        server
            .mock("GET", "/league/999/rosters")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(rosters_body())
            .create_async()
            .await,
    ]
}

#[tokio::test]
async fn test7_bracket_resolves_teams_and_start_week() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (optional, but useful for debugging)
    // let _ = env_logger::builder().is_test(true).try_init();

    let mut sleeper = mockito::Server::new_async().await;
    let _core = mount_core(&mut sleeper).await;

    sleeper
        .mock("GET", "/league/999/winners_bracket")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
              { "r": 1, "m": 1, "t1": 1, "t2": 2, "w": 1 },
              { "r": 2, "m": 3, "t1": 1, "t2": null, "t2_from": { "w": 2 }, "w": null }
            ]"#,
        )
        .create_async()
        .await;
    sleeper
        .mock("GET", "/league/999/losers_bracket")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[ { "round": 1, "matchup_id": 1, "t1": 3, "t2": null, "winner": null } ]"#)
        .create_async()
        .await;

    let state = test_state(&sleeper.url(), "http://127.0.0.1:9", &std::env::temp_dir());
    let view = bracket_overview(&state).await?;

    // The settings value outranks the legacy top-level field.
    assert_eq!(view.playoff_start_week, Some(15));

    let opener = &view.winners[0];
    assert_eq!(opener.t1.as_ref().unwrap().team, "The Juggernauts");
    assert_eq!(opener.t2.as_ref().unwrap().team, "benchwarmer");
    assert_eq!(opener.w, Some(1));

    // Undecided slots stay null and keep their provenance hint.
    let final_slot = &view.winners[1];
    assert_eq!(final_slot.t1.as_ref().unwrap().roster_id, 1);
    assert!(final_slot.t2.is_none());
    assert_eq!(final_slot.t2_from, Some(json!({ "w": 2 })));
    assert_eq!(final_slot.w, None);

    // Long key spellings decode the same as the short ones.
    let consolation = &view.losers[0];
    assert_eq!(consolation.r, Some(1));
    assert_eq!(consolation.m, Some(1));
    assert_eq!(consolation.t1.as_ref().unwrap().team, "Team 3");

    Ok(())
}

#[tokio::test]
async fn test7_bracket_fetches_are_all_or_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let mut sleeper = mockito::Server::new_async().await;
    let _core = mount_core(&mut sleeper).await;

    sleeper
        .mock("GET", "/league/999/winners_bracket")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;
    sleeper
        .mock("GET", "/league/999/losers_bracket")
        .with_status(502)
        .with_body("bad gateway")
        .create_async()
        .await;

    let state = test_state(&sleeper.url(), "http://127.0.0.1:9", &std::env::temp_dir());
    let err = bracket_overview(&state).await.unwrap_err();

    assert_eq!(error_response(&err).status().as_u16(), 500);
    assert!(err.to_string().contains("upstream HTTP 502"));
    Ok(())
}
