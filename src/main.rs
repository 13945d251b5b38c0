use rusty_league::AppState;
use rusty_league::args;
use rusty_league::cache;
use rusty_league::controller::espn::EspnClient;
use rusty_league::controller::players::PlayerCatalog;
use rusty_league::controller::sleeper::SleeperClient;
use rusty_league::controller::{bracket, games, league, local, matchups, roster, transactions};
use rusty_league::storage::DocumentStore;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, Responder, web};
use chrono::FixedOffset;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let args = args::args_checks();

    let tz = FixedOffset::east_opt(args.tz_offset_hours * 3600)
        .ok_or("time zone offset out of range")?;

    let cache = cache::new_cache();
    let state = AppState {
        sleeper: SleeperClient::new(&args.league_id, cache.clone()),
        espn: EspnClient::new(cache),
        players: Arc::new(PlayerCatalog::new()),
        store: DocumentStore::new(&args.data_dir),
        tz,
    };

    let bind = format!("{}:{}", args.bind, args.port);
    log::info!("league companion on http://{bind}");

    let static_dir = args.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(state.clone()))
            .route("/health", web::get().to(health))
            .route("/api/league", web::get().to(league::league_overview))
            .route("/api/debug/sleeper-users", web::get().to(league::debug_users))
            .route("/api/sleeper/rosters", web::get().to(league::roster_list))
            .route(
                "/api/sleeper/roster/{roster_id}",
                web::get().to(roster::roster_detail_endpoint),
            )
            .route(
                "/api/sleeper/matchups",
                web::get().to(matchups::matchups_endpoint),
            )
            .route(
                "/api/sleeper/transactions",
                web::get().to(transactions::transactions_endpoint),
            )
            .route("/api/sleeper/bracket", web::get().to(bracket::bracket_endpoint))
            .route("/api/nfl/games", web::get().to(games::games_endpoint))
            .route(
                "/api/announcements",
                web::post().to(local::announcements_create),
            )
            .route(
                "/api/announcements/{id}",
                web::delete().to(local::announcements_delete),
            )
            .route("/api/suggestions", web::get().to(local::suggestions_list))
            .route("/api/suggestions", web::post().to(local::suggestions_create))
            .route("/api/cams", web::get().to(local::bulletin_list))
            .route("/api/cams/blocks", web::post().to(local::bulletin_create_block))
            .route(
                "/api/cams/blocks/{id}",
                web::delete().to(local::bulletin_delete_block),
            )
            .route("/api/cams/layout", web::put().to(local::bulletin_save_layout))
            .route("/api/spiffs", web::get().to(local::ledger_read))
            .route("/api/spiffs", web::put().to(local::ledger_save))
            .service(Files::new("/static", static_dir.clone()).show_files_listing())
    })
    .bind(bind)?
    .run()
    .await?;
    Ok(())
}

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}
