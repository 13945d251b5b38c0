use crate::AppState;
use crate::error::error_response;
use crate::model::docs::default_span;
use crate::model::{Announcement, BulletinBlock, BulletinBoard, LeagueDoc, Ledger, Suggestion};
use actix_web::{HttpResponse, web};
use chrono::{SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;
use uuid::Uuid;

const TITLE_MAX: usize = 140;
const BODY_MAX: usize = 5000;
const NAME_MAX: usize = 80;
const CAPTION_MAX: usize = 200;

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Sort key for RFC 3339 stamps of mixed offsets. Unparseable stamps sink
/// to the epoch.
fn stamp_millis(raw: &str) -> i64 {
    chrono::DateTime::parse_from_rfc3339(raw).map_or(0, |dt| dt.timestamp_millis())
}

// --- Announcements -------------------------------------------------------

/// Append an announcement and re-sort the feed newest first.
pub fn insert_announcement(
    doc: &mut LeagueDoc,
    title: &str,
    body: &str,
    image_url: Option<String>,
) -> Announcement {
    let item = Announcement {
        id: new_id(),
        title: truncate_chars(title, TITLE_MAX),
        body: truncate_chars(body, BODY_MAX),
        date: now_iso(),
        image: image_url,
    };
    doc.announcements.push(item.clone());
    doc.announcements
        .sort_by_key(|a| std::cmp::Reverse(stamp_millis(&a.date)));
    item
}

pub fn remove_announcement(doc: &mut LeagueDoc, id: &str) -> bool {
    let before = doc.announcements.len();
    doc.announcements.retain(|a| a.id != id);
    doc.announcements.len() != before
}

#[derive(Debug, Default, Deserialize)]
pub struct AnnouncementRequest {
    #[serde(default)]
    title: String,
    #[serde(default)]
    body: String,
    #[serde(default)]
    image_url: Option<String>,
}

/// POST /api/announcements.
pub async fn announcements_create(
    body: web::Json<AnnouncementRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let title = body.title.trim();
    let text = body.body.trim();
    if title.is_empty() || text.is_empty() {
        return HttpResponse::BadRequest()
            .json(json!({ "ok": false, "error": "Title and body required" }));
    }

    let image = body.image_url.clone().filter(|url| !url.is_empty());
    let mut doc = data.store.league().await;
    let item = insert_announcement(&mut doc, title, text, image);
    match data.store.write_league(&doc).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "ok": true, "item": item })),
        Err(e) => error_response(&e),
    }
}

/// DELETE /api/announcements/{id}.
pub async fn announcements_delete(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = path.into_inner();
    let mut doc = data.store.league().await;
    if !remove_announcement(&mut doc, &id) {
        return HttpResponse::NotFound()
            .json(json!({ "ok": false, "error": "Announcement not found" }));
    }
    match data.store.write_league(&doc).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "ok": true, "deleted": id })),
        Err(e) => error_response(&e),
    }
}

// --- Suggestions ---------------------------------------------------------

/// Append a suggestion and keep the box newest first.
pub fn push_suggestion(list: &mut Vec<Suggestion>, name: &str, text: &str) -> String {
    let id = new_id();
    list.push(Suggestion {
        id: id.clone(),
        when: now_iso(),
        name: truncate_chars(name, NAME_MAX),
        text: text.to_string(),
    });
    list.sort_by_key(|s| std::cmp::Reverse(stamp_millis(&s.when)));
    id
}

#[derive(Debug, Default, Deserialize)]
pub struct SuggestionRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    text: String,
}

/// GET /api/suggestions.
pub async fn suggestions_list(data: web::Data<AppState>) -> HttpResponse {
    let items = data.store.suggestions().await;
    HttpResponse::Ok().json(json!({ "items": items }))
}

/// POST /api/suggestions.
pub async fn suggestions_create(
    body: web::Json<SuggestionRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let text = body.text.trim();
    if text.is_empty() {
        return HttpResponse::BadRequest().json(json!({ "error": "Suggestion text required" }));
    }

    let mut list = data.store.suggestions().await;
    let id = push_suggestion(&mut list, &body.name, text);
    match data.store.write_suggestions(&list).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "ok": true, "id": id })),
        Err(e) => error_response(&e),
    }
}

// --- Bulletin board ------------------------------------------------------

/// Blocks in display order; ids in `order` with no matching block are
/// skipped.
#[must_use]
pub fn ordered_blocks(board: &BulletinBoard) -> Vec<&BulletinBlock> {
    board
        .order
        .iter()
        .filter_map(|id| board.blocks.iter().find(|b| &b.id == id))
        .collect()
}

/// A new text post lands at the front of the display order.
pub fn insert_post(
    board: &mut BulletinBoard,
    title: &str,
    body: &str,
    full_width: bool,
) -> BulletinBlock {
    let block = BulletinBlock {
        id: new_id(),
        kind: "post".to_string(),
        title: Some(if title.is_empty() {
            "Untitled".to_string()
        } else {
            truncate_chars(title, CAPTION_MAX)
        }),
        body: Some(body.to_string()),
        url: None,
        caption: None,
        when: Some(now_iso()),
        span: if full_width { 12 } else { default_span() },
    };
    board.blocks.push(block.clone());
    board.order.retain(|id| id != &block.id);
    board.order.insert(0, block.id.clone());
    block
}

pub fn remove_block(board: &mut BulletinBoard, id: &str) -> bool {
    let before = board.blocks.len();
    board.blocks.retain(|b| b.id != id);
    if board.blocks.len() == before {
        return false;
    }
    board.order.retain(|ordered| ordered != id);
    true
}

/// Replace the display order (unknown ids dropped) and apply any half/full
/// width overrides. Returns false when nothing in `order` matches a block.
pub fn apply_layout(
    board: &mut BulletinBoard,
    order: &[String],
    sizes: Option<&Map<String, Value>>,
) -> bool {
    let filtered: Vec<String> = order
        .iter()
        .filter(|id| board.blocks.iter().any(|b| &&b.id == id))
        .cloned()
        .collect();
    if filtered.is_empty() {
        return false;
    }
    board.order = filtered;

    if let Some(sizes) = sizes {
        for block in &mut board.blocks {
            let wanted = sizes.get(&block.id).and_then(numeric_value);
            if wanted == Some(6.0) {
                block.span = 6;
            } else if wanted == Some(12.0) {
                block.span = 12;
            }
        }
    }
    true
}

/// Loose numeric read: JSON numbers directly, numeric strings parsed.
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct BlockRequest {
    #[serde(default)]
    title: String,
    #[serde(default)]
    body: String,
    #[serde(default)]
    span: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LayoutRequest {
    #[serde(default)]
    order: Option<Value>,
    #[serde(default)]
    sizes: Option<Value>,
}

/// GET /api/cams.
pub async fn bulletin_list(data: web::Data<AppState>) -> HttpResponse {
    let board = data.store.bulletin().await;
    HttpResponse::Ok().json(json!({ "items": ordered_blocks(&board) }))
}

/// POST /api/cams/blocks.
pub async fn bulletin_create_block(
    body: web::Json<BlockRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let text = body.body.trim();
    if text.is_empty() {
        return HttpResponse::BadRequest().json(json!({ "error": "Body required" }));
    }
    let full_width = body.span.as_ref().and_then(numeric_value) == Some(12.0);

    let mut board = data.store.bulletin().await;
    let block = insert_post(&mut board, body.title.trim(), text, full_width);
    match data.store.write_bulletin(&board).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "ok": true, "block": block })),
        Err(e) => error_response(&e),
    }
}

/// DELETE /api/cams/blocks/{id}.
pub async fn bulletin_delete_block(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = path.into_inner();
    let mut board = data.store.bulletin().await;
    if !remove_block(&mut board, &id) {
        return HttpResponse::NotFound().json(json!({ "error": "Not found" }));
    }
    match data.store.write_bulletin(&board).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "ok": true })),
        Err(e) => error_response(&e),
    }
}

/// PUT /api/cams/layout.
pub async fn bulletin_save_layout(
    body: web::Json<LayoutRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let order = match body.order.as_ref().and_then(Value::as_array) {
        Some(list) => list,
        None => {
            return HttpResponse::BadRequest().json(json!({ "error": "order required" }));
        }
    };
    let order: Vec<String> = order.iter().map(loose_string).collect();
    let sizes = body.sizes.as_ref().and_then(Value::as_object);

    let mut board = data.store.bulletin().await;
    if !apply_layout(&mut board, &order, sizes) {
        return HttpResponse::BadRequest().json(json!({ "error": "invalid order" }));
    }
    match data.store.write_bulletin(&board).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "ok": true })),
        Err(e) => error_response(&e),
    }
}

fn loose_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// --- Point ledger --------------------------------------------------------

/// Clamp every balance to a non-negative dollar amount in whole cents.
/// Non-numeric values zero out.
#[must_use]
pub fn sanitize_banks(incoming: &Map<String, Value>) -> BTreeMap<String, f64> {
    incoming
        .iter()
        .map(|(key, value)| {
            let amount = numeric_value(value).unwrap_or(0.0);
            let amount = ((amount.max(0.0)) * 100.0).round() / 100.0;
            (key.clone(), amount)
        })
        .collect()
}

#[derive(Debug, Default, Deserialize)]
pub struct LedgerRequest {
    #[serde(default)]
    banks: Option<Value>,
}

/// GET /api/spiffs.
pub async fn ledger_read(data: web::Data<AppState>) -> HttpResponse {
    let ledger = data.store.ledger().await;
    HttpResponse::Ok().json(json!({ "banks": ledger.banks }))
}

/// PUT /api/spiffs.
pub async fn ledger_save(
    body: web::Json<LedgerRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let incoming = match body.banks.as_ref().and_then(Value::as_object) {
        Some(map) => map,
        None => {
            return HttpResponse::BadRequest()
                .json(json!({ "ok": false, "error": "Missing banks object" }));
        }
    };

    let ledger = Ledger {
        banks: sanitize_banks(incoming),
    };
    match data.store.write_ledger(&ledger).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "ok": true, "banks": ledger.banks })),
        Err(e) => error_response(&e),
    }
}
