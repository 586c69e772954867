//! Single binary web server: one dart match per id, driven over a JSON REST API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), MATCH_IDLE_HOURS (e.g. 12).

use actix_web::{
    get, post,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use dart_match_web::{
    advance_turn, checkout_suggestion, register_throw, reset_match, start_match_with_policy,
    Feedback, GameMode, LogFeedback, Match, MatchError, MatchId, Multiplier, ResetPolicy,
    Scoreboard, ThrowOutcome,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-match entry: match data + last activity time (for auto-cleanup).
struct MatchEntry {
    game: Match,
    last_activity: Instant,
}

/// In-memory state: many matches by ID. Idle entries are removed by the cleanup task.
type AppState = Data<RwLock<HashMap<MatchId, MatchEntry>>>;

/// Server settings read from the environment.
#[derive(Clone, Debug)]
struct ServerConfig {
    host: String,
    port: u16,
    idle_timeout: Duration,
}

impl ServerConfig {
    fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let idle_hours: u64 = std::env::var("MATCH_IDLE_HOURS")
            .ok()
            .and_then(|h| h.parse().ok())
            .unwrap_or(12);
        Self {
            host,
            port,
            idle_timeout: idle_timeout_from_hours(idle_hours),
        }
    }
}

/// Idle timeout for `hours`; absurdly large values saturate instead of overflowing.
fn idle_timeout_from_hours(hours: u64) -> Duration {
    Duration::from_secs(hours.saturating_mul(3600))
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct StartMatchBody {
    #[serde(default)]
    mode: GameMode,
    #[serde(default = "default_double_out")]
    double_out: bool,
    #[serde(default)]
    player_1: String,
    #[serde(default)]
    player_2: String,
    #[serde(default)]
    reset_policy: ResetPolicy,
}

impl Default for StartMatchBody {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            double_out: default_double_out(),
            player_1: String::new(),
            player_2: String::new(),
            reset_policy: ResetPolicy::default(),
        }
    }
}

impl StartMatchBody {
    fn start(&self) -> Match {
        start_match_with_policy(
            self.mode,
            self.double_out,
            &self.player_1,
            &self.player_2,
            self.reset_policy,
        )
    }
}

fn default_double_out() -> bool {
    true
}

#[derive(Deserialize)]
struct ThrowBody {
    base: u8,
    multiplier: u8,
    #[serde(default)]
    label: String,
}

#[derive(Serialize)]
struct ThrowResponse<'a> {
    outcome: ThrowOutcome,
    #[serde(rename = "match")]
    game: &'a Match,
}

#[derive(Serialize)]
struct CheckoutResponse {
    score: u32,
    checkout: &'static str,
}

/// Path segment: match id (e.g. /api/matches/{id})
#[derive(Deserialize)]
struct MatchPath {
    id: MatchId,
}

fn bad_request(e: MatchError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

/// Look up a match, refresh its activity time and hand it to `f`.
fn with_match<F>(state: &AppState, id: MatchId, f: F) -> HttpResponse
where
    F: FnOnce(&mut Match) -> HttpResponse,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            f(&mut entry.game)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No match" })),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "dart-match-web",
    })
}

/// Create a new match (returns it with id; client stores id for subsequent requests).
#[post("/api/matches")]
async fn api_create_match(state: AppState, body: Option<Json<StartMatchBody>>) -> HttpResponse {
    let body = body.map(Json::into_inner).unwrap_or_default();
    let game = body.start();
    let id = game.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let response = HttpResponse::Ok().json(&game);
    g.insert(
        id,
        MatchEntry {
            game,
            last_activity: Instant::now(),
        },
    );
    response
}

/// Get a match by id (404 if not found).
#[get("/api/matches/{id}")]
async fn api_get_match(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    with_match(&state, path.id, |game| HttpResponse::Ok().json(&*game))
}

/// Hard restart: replace the match with a fresh one (new settings, fresh stats), same id.
#[post("/api/matches/{id}/start")]
async fn api_restart_match(
    state: AppState,
    path: Path<MatchPath>,
    body: Option<Json<StartMatchBody>>,
) -> HttpResponse {
    let body = body.map(Json::into_inner).unwrap_or_default();
    with_match(&state, path.id, |game| {
        let id = game.id;
        *game = body.start();
        game.id = id;
        HttpResponse::Ok().json(&*game)
    })
}

/// Register one dart for the player on turn.
#[post("/api/matches/{id}/throws")]
async fn api_throw(state: AppState, path: Path<MatchPath>, body: Json<ThrowBody>) -> HttpResponse {
    let multiplier = match Multiplier::try_from(body.multiplier) {
        Ok(m) => m,
        Err(_) => return bad_request(MatchError::InvalidMultiplier(body.multiplier)),
    };
    with_match(&state, path.id, |game| {
        match register_throw(game, body.base, multiplier, &body.label) {
            Ok(outcome) => {
                LogFeedback.on_outcome(game.current(), outcome);
                HttpResponse::Ok().json(ThrowResponse {
                    outcome,
                    game: &*game,
                })
            }
            Err(e) => bad_request(e),
        }
    })
}

/// Pass play to the other player (turn must be over).
#[post("/api/matches/{id}/next")]
async fn api_next_player(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    with_match(&state, path.id, |game| match advance_turn(game) {
        Ok(()) => HttpResponse::Ok().json(&*game),
        Err(e) => bad_request(e),
    })
}

/// Play again: scores back to the mode, stats per the match's reset policy.
#[post("/api/matches/{id}/reset")]
async fn api_reset_match(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    with_match(&state, path.id, |game| {
        reset_match(game);
        HttpResponse::Ok().json(&*game)
    })
}

/// Display snapshot for the scoreboard UI.
#[get("/api/matches/{id}/scoreboard")]
async fn api_scoreboard(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    with_match(&state, path.id, |game| {
        HttpResponse::Ok().json(Scoreboard::from_match(game))
    })
}

/// Checkout hint for any remaining score.
#[get("/api/checkout/{score}")]
async fn api_checkout(path: Path<u32>) -> HttpResponse {
    let score = path.into_inner();
    HttpResponse::Ok().json(CheckoutResponse {
        score,
        checkout: checkout_suggestion(score),
    })
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let state = Data::new(RwLock::new(HashMap::<MatchId, MatchEntry>::new()));

    // Background task: every 30 minutes, remove matches idle past the timeout
    let state_cleanup = state.clone();
    let idle_timeout = config.idle_timeout;
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < idle_timeout);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} idle match(es)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_match)
            .service(api_get_match)
            .service(api_restart_match)
            .service(api_throw)
            .service(api_next_player)
            .service(api_reset_match)
            .service(api_scoreboard)
            .service(api_checkout)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_timeout_converts_hours() {
        assert_eq!(idle_timeout_from_hours(12), Duration::from_secs(12 * 3600));
    }

    #[test]
    fn idle_timeout_saturates_on_huge_hours() {
        assert_eq!(idle_timeout_from_hours(u64::MAX), Duration::from_secs(u64::MAX));
    }
}
