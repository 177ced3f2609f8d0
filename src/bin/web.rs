//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default; see `Config` for the environment overrides.

use actix_files::Files;
use actix_web::{
    cookie::Key,
    web::{self, Data},
    App, HttpResponse, HttpServer,
};
use std::time::Duration;
use tournament_scheduler_web::{api, Config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let bind = (config.host.clone(), config.port);
    log::info!(
        "Starting server at http://{}:{} (group size {}, due dates {:?})",
        bind.0,
        bind.1,
        config.group_size,
        config.due_date_rule
    );

    let state = Data::new(api::new_store());
    let config = Data::new(config);
    let session_key = Key::generate();

    // Background task: every 30 minutes, remove schedulers idle for longer than the TTL
    let state_cleanup = state.clone();
    let ttl = config.session_ttl;
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let removed = api::sweep_idle(&state_cleanup, ttl);
            if removed > 0 {
                log::info!("Cleaned up {} idle scheduler(s)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .wrap(api::session_middleware(session_key.clone()))
            .app_data(state.clone())
            .app_data(config.clone())
            .route("/", web::get().to(serve_index_async))
            .configure(api::configure)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
