//! `GET /api/config`: the public values the browser needs to reach the
//! hosted store directly.

use actix_web::web::{get, scope};
use actix_web::{web, HttpResponse, Scope};
use common::requests::ClientConfig;
use log::warn;

const API_PATH: &str = "/api/config";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(process))
}

async fn process(config: web::Data<ClientConfig>) -> HttpResponse {
    if !config.is_configured() {
        warn!("store.url or store.anon_key is not set; the archive panels will not load");
    }
    HttpResponse::Ok().json(config.get_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn serves_store_settings_in_camel_case() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ClientConfig {
                    store_url: "https://abc.supabase.co".into(),
                    store_anon_key: "anon".into(),
                }))
                .service(configure_routes()),
        )
        .await;
        let request = test::TestRequest::get().uri("/api/config").to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(
            body,
            json!({ "storeUrl": "https://abc.supabase.co", "storeAnonKey": "anon" })
        );
    }
}
