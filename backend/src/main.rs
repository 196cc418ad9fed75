//! Host process for the movie catalog viewer.
//!
//! Serves the trunk-built frontend bundle embedded at compile time. Unknown
//! paths fall back to `index.html`. The catalog API itself lives elsewhere;
//! the bundle talks to it directly from the browser.

mod config;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{debug, info, warn};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

use crate::config::HostConfig;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { INDEX } else { path };

    if let Some(file) = STATIC_DIR.get_file(file_path) {
        let mime = from_path(file_path).first_or_octet_stream();
        return HttpResponse::Ok()
            .content_type(mime.as_ref())
            .body(file.contents().to_vec());
    }

    debug!("No embedded asset at /{file_path}, serving {INDEX}");
    match STATIC_DIR.get_file(INDEX) {
        Some(index) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(index.contents().to_vec()),
        None => HttpResponse::NotFound().body("Not Found"),
    }
}

fn open_browser_later(url: String) {
    thread::spawn(move || {
        thread::sleep(Duration::from_millis(500));
        if let Err(err) = webbrowser::open(&url) {
            warn!("Could not open a browser at {url}: {err}");
        }
    });
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = HostConfig::from_env();
    let url = config.url();

    if config.open_browser {
        open_browser_later(url.clone());
    }

    info!("Movie catalog viewer running at {url}");

    HttpServer::new(|| App::new().default_service(web::route().to(serve_embedded)))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::{test, web, App};

    use super::serve_embedded;

    #[actix_web::test]
    async fn root_serves_index() {
        let app =
            test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;

        let response = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert!(response.status().is_success());
        let content_type = response.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[actix_web::test]
    async fn unknown_paths_fall_back_to_index() {
        let app =
            test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;

        let index = test::call_and_read_body(&app, test::TestRequest::get().uri("/").to_request()).await;
        let fallback = test::call_and_read_body(
            &app,
            test::TestRequest::get().uri("/movies/42").to_request(),
        )
        .await;

        assert_eq!(index, fallback);
    }
}
