use rusty_league::controller::local::{
    apply_layout, insert_announcement, insert_post, ordered_blocks, push_suggestion,
    remove_announcement, remove_block, sanitize_banks,
};
use rusty_league::model::{Announcement, Ledger, Suggestion};
use rusty_league::storage::DocumentStore;
use serde_json::json;

#[tokio::test]
async fn test8_league_doc_roundtrip_and_feed_order() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (optional, but useful for debugging)
    // let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir()?;
    let store = DocumentStore::new(dir.path());

    // Missing file serves the documented defaults.
    let mut doc = store.league().await;
    assert_eq!(doc.league_name, None);
    assert!(doc.announcements.is_empty());
    assert_eq!(doc.roster, json!([]));

    // Seed an older post, including a non-UTC offset spelling.
    doc.league_name = Some("Mock Dynasty".to_string());
    doc.announcements.push(Announcement {
        id: "a-old".to_string(),
        title: "Draft recap".to_string(),
        body: "Rounds 1-3".to_string(),
        date: "2023-09-01T10:00:00-04:00".to_string(),
        image: None,
    });

    let fresh = insert_announcement(&mut doc, &"x".repeat(150), "body", None);
    assert_eq!(fresh.title.chars().count(), 140);

    // Newest first, regardless of stamp offset spelling.
    assert_eq!(doc.announcements[0].id, fresh.id);
    assert_eq!(doc.announcements[1].id, "a-old");

    store.write_league(&doc).await?;
    let reread = store.league().await;
    assert_eq!(reread.league_name.as_deref(), Some("Mock Dynasty"));
    assert_eq!(reread.announcements.len(), 2);
    assert_eq!(reread.announcements[0].id, fresh.id);

    let mut doc = reread;
    assert!(remove_announcement(&mut doc, "a-old"));
    assert!(!remove_announcement(&mut doc, "a-old"));
    assert_eq!(doc.announcements.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test8_bulletin_rebuilds_missing_order() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let store = DocumentStore::new(dir.path());

    // An older file shape: blocks only, no order array.
    std::fs::write(
        dir.path().join("bulletin.json"),
        r#"{
          "blocks": [
            { "id": "b1", "type": "post", "title": "Week 1", "body": "Kickoff" },
            { "id": "b2", "type": "image", "url": "http://x/y.png", "caption": "Trophy" }
          ]
        }"#,
    )?;

    let mut board = store.bulletin().await;
    assert_eq!(board.order, vec!["b1", "b2"]);
    assert_eq!(board.blocks[0].span, 6);

    // New posts lead the display order.
    let post = insert_post(&mut board, "", "Lineup locked", true);
    assert_eq!(post.title.as_deref(), Some("Untitled"));
    assert_eq!(post.span, 12);
    assert_eq!(board.order[0], post.id);

    let visible = ordered_blocks(&board);
    assert_eq!(visible.len(), 3);
    assert_eq!(visible[0].id, post.id);

    // Unknown ids drop out of a submitted layout; an all-unknown layout is
    // rejected outright.
    let order = vec!["b2".to_string(), "ghost".to_string(), "b1".to_string()];
    let sizes = json!({ "b1": "12", "b2": 6 });
    assert!(apply_layout(
        &mut board,
        &order,
        sizes.as_object()
    ));
    assert_eq!(board.order, vec!["b2", "b1"]);
    let b1 = board.blocks.iter().find(|b| b.id == "b1").unwrap();
    assert_eq!(b1.span, 12);
    assert!(!apply_layout(&mut board, &["ghost".to_string()], None));

    assert!(remove_block(&mut board, "b1"));
    assert_eq!(board.order, vec!["b2"]);

    store.write_bulletin(&board).await?;
    let reread = store.bulletin().await;
    assert_eq!(reread.order, vec!["b2"]);
    assert_eq!(reread.blocks.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test8_suggestions_newest_first() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let store = DocumentStore::new(dir.path());

    assert!(store.suggestions().await.is_empty());

    let mut list = vec![Suggestion {
        id: "s-old".to_string(),
        when: "2024-01-15T08:00:00.000Z".to_string(),
        name: "Cam".to_string(),
        text: "Double-header week".to_string(),
    }];

    let id = push_suggestion(&mut list, &"n".repeat(100), "Trade deadline party");
    assert_eq!(list[0].id, id);
    assert_eq!(list[0].name.chars().count(), 80);
    assert_eq!(list[1].id, "s-old");

    store.write_suggestions(&list).await?;
    let reread = store.suggestions().await;
    assert_eq!(reread.len(), 2);
    assert_eq!(reread[0].id, id);
    Ok(())
}

#[tokio::test]
async fn test8_ledger_sanitizes_and_rounds() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let store = DocumentStore::new(dir.path());

    let incoming = json!({
        "pot": 25.567,
        "dues": "40",
        "junk": "not money",
        "fine": -5
    });
    let banks = sanitize_banks(incoming.as_object().unwrap());
    assert_eq!(banks["pot"], 25.57);
    assert_eq!(banks["dues"], 40.0);
    assert_eq!(banks["junk"], 0.0);
    assert_eq!(banks["fine"], 0.0);

    store.write_ledger(&Ledger { banks }).await?;
    let reread = store.ledger().await;
    assert_eq!(reread.banks["pot"], 25.57);
    assert_eq!(reread.banks.len(), 4);

    // Missing file still serves an empty ledger elsewhere.
    let empty = DocumentStore::new(dir.path().join("nope")).ledger().await;
    assert!(empty.banks.is_empty());
    Ok(())
}
