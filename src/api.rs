//! HTTP API over the scheduler: JSON routes, per-session store, cookie binding.

use crate::config::Config;
use crate::logic::{apply_action, generate_groups, parse_due_date, Action, DragEvent};
use crate::models::{Scheduler, SchedulerError, SchedulerId};
use crate::roster::{parse_roster_csv, roster_from_emails};
use crate::view::SchedulerView;
use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{
    cookie::Key,
    get, post, put,
    web::{self, Data, Json, Path},
    HttpResponse, Responder,
};
use chrono::Utc;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-session entry: scheduler state + last activity time (for auto-cleanup).
pub struct SchedulerEntry {
    pub scheduler: Scheduler,
    pub last_activity: Instant,
}

/// In-memory state: one scheduler per browser session, by id.
pub type SchedulerStore = RwLock<HashMap<SchedulerId, SchedulerEntry>>;

type AppState = Data<SchedulerStore>;

/// Cookie session key holding the id of the browser's scheduler.
const SESSION_SCHEDULER_KEY: &str = "scheduler_id";

pub fn new_store() -> SchedulerStore {
    RwLock::new(HashMap::new())
}

/// Cookie-backed session middleware. Served over plain HTTP, so the cookie is not Secure.
pub fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(false)
        .build()
}

/// Drop schedulers idle for at least `ttl`; returns how many were removed.
pub fn sweep_idle(store: &SchedulerStore, ttl: Duration) -> usize {
    let mut g = match store.write() {
        Ok(guard) => guard,
        Err(_) => return 0,
    };
    let before = g.len();
    g.retain(|_, entry| entry.last_activity.elapsed() < ttl);
    before - g.len()
}

/// Register every API route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health)
        .service(favicon)
        .service(api_create_scheduler)
        .service(api_current_scheduler)
        .service(api_get_scheduler)
        .service(api_set_group_size)
        .service(api_set_roster)
        .service(api_set_roster_csv)
        .service(api_regenerate_groups)
        .service(api_drag)
        .service(api_generate_matches)
        .service(api_set_due_date)
        .service(api_confirm);
}

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct GroupSizeBody {
    group_size: i64,
}

#[derive(Deserialize)]
struct RosterBody {
    emails: Vec<String>,
}

#[derive(Deserialize)]
struct DueDateBody {
    due_date: String,
}

/// Path segment: scheduler id (e.g. /api/schedulers/{id})
#[derive(Deserialize)]
struct SchedulerPath {
    id: SchedulerId,
}

/// Path segments: scheduler id and match index (e.g. /api/schedulers/{id}/matches/{index}/due-date)
#[derive(Deserialize)]
struct MatchPath {
    id: SchedulerId,
    index: usize,
}

fn bad_request(message: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": message.to_string() }))
}

fn error_response(e: &SchedulerError) -> HttpResponse {
    bad_request(e)
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No schedule" }))
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

/// New scheduler from the configured roster, already split into groups.
fn new_scheduler(config: &Config) -> Result<Scheduler, SchedulerError> {
    let mut scheduler = Scheduler::new(config.load_roster(), config.group_size, config.due_date_rule)?;
    generate_groups(&mut scheduler, &mut rand::thread_rng())?;
    Ok(scheduler)
}

/// Store a fresh scheduler, bind it to the session, and return its view.
fn create_for_session(state: &AppState, config: &Config, session: &Session) -> HttpResponse {
    let scheduler = match new_scheduler(config) {
        Ok(s) => s,
        Err(e) => return error_response(&e),
    };
    let id = scheduler.id;
    if let Err(e) = session.insert(SESSION_SCHEDULER_KEY, id) {
        log::warn!("Could not bind scheduler {} to session: {}", id, e);
    }
    let view = SchedulerView::from_scheduler(&scheduler);
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    g.insert(
        id,
        SchedulerEntry {
            scheduler,
            last_activity: Instant::now(),
        },
    );
    log::info!("Created scheduler {} ({} schedulers live)", id, g.len());
    HttpResponse::Ok().json(view)
}

/// Run `f` on a stored scheduler while holding the write lock for the whole call.
fn with_scheduler<F>(state: &AppState, id: SchedulerId, f: F) -> HttpResponse
where
    F: FnOnce(&mut Scheduler) -> HttpResponse,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let entry = match g.get_mut(&id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    f(&mut entry.scheduler)
}

fn apply(s: &mut Scheduler, action: Action) -> HttpResponse {
    match apply_action(s, action, &mut rand::thread_rng(), Utc::now().date_naive()) {
        Ok(_) => HttpResponse::Ok().json(SchedulerView::from_scheduler(s)),
        Err(e) => error_response(&e),
    }
}

/// Apply one action to a stored scheduler and answer with its new view.
/// Ignored actions still answer 200 with the unchanged view.
fn run_action(state: &AppState, id: SchedulerId, action: Action) -> HttpResponse {
    with_scheduler(state, id, |s| apply(s, action))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tournament-scheduler-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Start a new schedule for this browser session (replaces the session's previous one).
#[post("/api/schedulers")]
async fn api_create_scheduler(state: AppState, config: Data<Config>, session: Session) -> HttpResponse {
    create_for_session(&state, &config, &session)
}

/// The schedule bound to this browser session, created on first visit.
#[get("/api/schedulers/current")]
async fn api_current_scheduler(state: AppState, config: Data<Config>, session: Session) -> HttpResponse {
    let bound = session
        .get::<SchedulerId>(SESSION_SCHEDULER_KEY)
        .unwrap_or_else(|e| {
            log::warn!("Unreadable session: {}", e);
            None
        });
    if let Some(id) = bound {
        let mut g = match state.write() {
            Ok(guard) => guard,
            Err(_) => return lock_error(),
        };
        if let Some(entry) = g.get_mut(&id) {
            entry.last_activity = Instant::now();
            return HttpResponse::Ok().json(SchedulerView::from_scheduler(&entry.scheduler));
        }
    }
    create_for_session(&state, &config, &session)
}

/// Get a scheduler by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/schedulers/{id}")]
async fn api_get_scheduler(state: AppState, path: Path<SchedulerPath>) -> HttpResponse {
    with_scheduler(&state, path.id, |s| {
        HttpResponse::Ok().json(SchedulerView::from_scheduler(s))
    })
}

/// Change the group size; groups are regenerated straight away.
#[put("/api/schedulers/{id}/group-size")]
async fn api_set_group_size(
    state: AppState,
    path: Path<SchedulerPath>,
    body: Json<GroupSizeBody>,
) -> HttpResponse {
    run_action(&state, path.id, Action::SetGroupSize(body.group_size))
}

/// Replace the roster with a list of emails and regenerate groups.
#[put("/api/schedulers/{id}/roster")]
async fn api_set_roster(state: AppState, path: Path<SchedulerPath>, body: Json<RosterBody>) -> HttpResponse {
    match roster_from_emails(&body.emails) {
        Ok(roster) => run_action(&state, path.id, Action::SetRoster(roster)),
        Err(e) => error_response(&e),
    }
}

/// Replace the roster from a CSV upload (header `email`) and regenerate groups.
#[put("/api/schedulers/{id}/roster/csv")]
async fn api_set_roster_csv(state: AppState, path: Path<SchedulerPath>, body: String) -> HttpResponse {
    match parse_roster_csv(body.as_bytes()) {
        Ok(roster) => run_action(&state, path.id, Action::SetRoster(roster)),
        Err(e) => error_response(&e),
    }
}

#[post("/api/schedulers/{id}/groups/regenerate")]
async fn api_regenerate_groups(state: AppState, path: Path<SchedulerPath>) -> HttpResponse {
    run_action(&state, path.id, Action::RegenerateGroups)
}

/// Drop of a dragged player tile onto another tile.
#[post("/api/schedulers/{id}/drag")]
async fn api_drag(state: AppState, path: Path<SchedulerPath>, body: Json<DragEvent>) -> HttpResponse {
    run_action(&state, path.id, Action::Drag(body.into_inner()))
}

/// Generate the round-robin schedule for the current groups.
#[post("/api/schedulers/{id}/matches/generate")]
async fn api_generate_matches(state: AppState, path: Path<SchedulerPath>) -> HttpResponse {
    run_action(&state, path.id, Action::CreateSchedule)
}

/// Edit the due date of one match (index into the flat match list).
#[put("/api/schedulers/{id}/matches/{index}/due-date")]
async fn api_set_due_date(state: AppState, path: Path<MatchPath>, body: Json<DueDateBody>) -> HttpResponse {
    match parse_due_date(&body.due_date) {
        Ok(due_date) => run_action(
            &state,
            path.id,
            Action::UpdateDueDate {
                index: path.index,
                due_date,
            },
        ),
        Err(e) => error_response(&e),
    }
}

/// Lock the schedule. Requires at least one match, like the disabled button in the UI.
#[post("/api/schedulers/{id}/confirm")]
async fn api_confirm(state: AppState, path: Path<SchedulerPath>) -> HttpResponse {
    with_scheduler(&state, path.id, |s| {
        if s.matches.is_empty() {
            return bad_request("Create a match schedule before confirming");
        }
        apply(s, Action::Confirm)
    })
}
