//! Serves the frontend build embedded at compile time.
//!
//! Client-side routes such as `/customize` have no file of their own, so any
//! path without an extension falls back to `index.html`. Paths that look like
//! files but are not embedded get a 404.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use log::debug;
use mime_guess::from_path;
use std::path::Path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { INDEX } else { path };

    if let Some(file) = STATIC_DIR.get_file(file_path) {
        let mime = from_path(file_path).first_or_octet_stream();
        return HttpResponse::Ok()
            .content_type(mime.as_ref())
            .body(file.contents().to_vec());
    }

    if Path::new(file_path).extension().is_some() {
        debug!("asset not embedded: {}", file_path);
        return HttpResponse::NotFound().body("Not Found");
    }

    match STATIC_DIR.get_file(INDEX) {
        Some(index) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(index.contents().to_vec()),
        None => HttpResponse::NotFound().body("Not Found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};

    async fn get(path: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let app = test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;
        let req = test::TestRequest::get().uri(path).to_request();
        let resp = test::call_service(&app, req).await;

        let status = resp.status();
        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = test::read_body(resp).await.to_vec();
        (status, content_type, body)
    }

    fn index_bytes() -> Vec<u8> {
        STATIC_DIR
            .get_file(INDEX)
            .map(|f| f.contents().to_vec())
            .unwrap_or_default()
    }

    #[actix_web::test]
    async fn root_serves_index() {
        let (status, content_type, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap_or_default().starts_with("text/html"));
        assert_eq!(body, index_bytes());
    }

    #[actix_web::test]
    async fn client_routes_fall_back_to_index() {
        for route in ["/customize", "/myworks", "/about/"] {
            let (status, _, body) = get(route).await;
            assert_eq!(status, StatusCode::OK, "{route}");
            assert_eq!(body, index_bytes(), "{route}");
        }
    }

    #[actix_web::test]
    async fn missing_asset_is_not_found() {
        let (status, _, _) = get("/assets/portrait/img99.jpg").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
