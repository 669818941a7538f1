mod config;
mod services;

use crate::config::AppConfig;
use crate::services::notion::NotionClient;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the compiled Yew app. Unknown paths get `index.html` so the
/// client-side tabs survive a reload.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::load().map_err(std::io::Error::other)?;
    let url = config.server.url();

    if config.server.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("could not open a browser at {url}: {e}");
            }
        });
    }

    let client_config = config.client_config();
    if !client_config.is_configured() {
        warn!("store is not configured; set BOOKCLUB__STORE__URL and BOOKCLUB__STORE__ANON_KEY");
    }
    let notion = NotionClient::from_config(&config.notion);
    let json_limit = config.server.json_limit;

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .app_data(services::json_config(json_limit))
            .app_data(web::Data::new(notion.clone()))
            .app_data(web::Data::new(client_config.clone()))
            .service(services::notion::configure_routes())
            .service(services::client_config::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
