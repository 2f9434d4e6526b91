//! HttpLinkApi integration tests
//!
//! A small actix-web server plays the link service so requests go over a
//! real socket: auth header, query encoding, error bodies and decoding.

use std::collections::HashMap;
use std::net::TcpListener;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use linkdeck::client::{ClientError, CreateLinkRequest, HttpLinkApi, LinkApi};
use linkdeck::config::ApiConfig;
use serde_json::{Value, json};

const TOKEN: &str = "secret";

// =============================================================================
// Fake service
// =============================================================================

fn authorized(req: &HttpRequest) -> bool {
    req.headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        == Some("Bearer secret")
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(json!({ "error": "invalid token" }))
}

fn link(code: &str) -> Value {
    json!({
        "id": 1,
        "code": code,
        "short_url": format!("https://s.example/{}", code),
        "original_url": "https://example.com",
        "title": "Example",
        "click_count": 7,
        "created_at": "2024-01-01T00:00:00Z"
    })
}

async fn list(req: HttpRequest, query: web::Query<HashMap<String, String>>) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    let page: u32 = query.get("page").and_then(|p| p.parse().ok()).unwrap_or(0);
    let limit: u32 = query.get("limit").and_then(|l| l.parse().ok()).unwrap_or(0);
    HttpResponse::Ok().json(json!({
        "links": [link("abc"), link("def")],
        "total": 42,
        "page": page,
        "limit": limit,
        "total_pages": 21
    }))
}

async fn search(req: HttpRequest, query: web::Query<HashMap<String, String>>) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    let q = query.get("q").cloned().unwrap_or_default();
    HttpResponse::Ok().json(json!({
        "links": [link(&q)],
        "total": 1,
        "page": 1,
        "limit": 20,
        "total_pages": 1
    }))
}

async fn get_link(req: HttpRequest, code: web::Path<String>) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    match code.as_str() {
        "missing" => HttpResponse::NotFound().json(json!({ "error": "link not found" })),
        "badjson" => HttpResponse::Ok().body("definitely not json"),
        other => HttpResponse::Ok().json(link(other)),
    }
}

async fn stats(req: HttpRequest) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    HttpResponse::Ok().json(json!({
        "total_links": 3,
        "total_clicks": null,
        "today_clicks": 2,
        "top_links": null
    }))
}

async fn create(req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    let url = body["url"].as_str().unwrap_or_default();
    if !url.starts_with("http") {
        return HttpResponse::BadRequest().json(json!({ "error": "invalid url" }));
    }
    // The code key is absent when the client wants a generated code
    let code = match body.get("code") {
        Some(code) => code.as_str().unwrap_or_default().to_string(),
        None => "generated".to_string(),
    };
    HttpResponse::Created().json(json!({
        "short_url": format!("https://s.example/{}", code),
        "code": code,
        "original_url": url
    }))
}

async fn delete(req: HttpRequest, code: web::Path<String>) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    match code.as_str() {
        "boom" => HttpResponse::InternalServerError().body("upstream crashed"),
        _ => HttpResponse::Ok().json(json!({ "success": true })),
    }
}

fn spawn_server() -> (String, ServerHandle) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(|| {
        App::new().service(
            web::scope("/api/v1")
                .route("/links", web::get().to(list))
                .route("/links", web::post().to(create))
                .route("/links/search", web::get().to(search))
                .route("/links/{code}", web::get().to(get_link))
                .route("/links/{code}", web::delete().to(delete))
                .route("/stats", web::get().to(stats)),
        )
    })
    .workers(1)
    .listen(listener)
    .unwrap()
    .run();
    let handle = server.handle();
    actix_rt::spawn(server);
    (format!("http://{}/api/v1", addr), handle)
}

fn client(base_url: &str) -> HttpLinkApi {
    HttpLinkApi::new(&ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: Some(5),
        ..ApiConfig::default()
    })
    .unwrap()
}

// =============================================================================
// Reads
// =============================================================================

#[actix_rt::test]
async fn test_list_links_sends_paging_and_token() {
    let (base, handle) = spawn_server();
    let api = client(&base);

    let page = api.list_links(TOKEN, 3, 2).await.unwrap();

    assert_eq!(page.page, 3);
    assert_eq!(page.limit, 2);
    assert_eq!(page.total, 42);
    assert_eq!(page.total_pages, 21);
    assert_eq!(page.links.len(), 2);
    assert_eq!(page.links[0].code, "abc");
    assert_eq!(page.links[0].click_count, 7);
    handle.stop(true).await;
}

#[actix_rt::test]
async fn test_search_encodes_query() {
    let (base, handle) = spawn_server();
    let api = client(&base);

    let page = api.search_links(TOKEN, "a b&c", 1, 20).await.unwrap();

    assert_eq!(page.links[0].code, "a b&c");
    handle.stop(true).await;
}

#[actix_rt::test]
async fn test_get_link() {
    let (base, handle) = spawn_server();
    let api = client(&base);

    let link = api.get_link(TOKEN, "xyz").await.unwrap();

    assert_eq!(link.code, "xyz");
    assert_eq!(link.display_short_url(), "https://s.example/xyz");
    handle.stop(true).await;
}

#[actix_rt::test]
async fn test_stats_null_fields_default_to_zero() {
    let (base, handle) = spawn_server();
    let api = client(&base);

    let stats = api.stats(TOKEN).await.unwrap();

    assert_eq!(stats.total_links, 3);
    assert_eq!(stats.total_clicks, 0);
    assert_eq!(stats.today_clicks, 2);
    assert!(stats.top_links.is_empty());
    handle.stop(true).await;
}

// =============================================================================
// Writes
// =============================================================================

#[actix_rt::test]
async fn test_create_without_code_omits_the_key() {
    let (base, handle) = spawn_server();
    let api = client(&base);

    let created = api
        .create_link(
            TOKEN,
            &CreateLinkRequest {
                url: "https://rust-lang.org".into(),
                title: String::new(),
                code: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(created.code, "generated");
    assert_eq!(created.original_url, "https://rust-lang.org");
    handle.stop(true).await;
}

#[actix_rt::test]
async fn test_create_with_custom_code() {
    let (base, handle) = spawn_server();
    let api = client(&base);

    let created = api
        .create_link(
            TOKEN,
            &CreateLinkRequest {
                url: "https://rust-lang.org".into(),
                title: "Rust".into(),
                code: Some("rust".into()),
            },
        )
        .await
        .unwrap();

    assert_eq!(created.short_url, "https://s.example/rust");
    handle.stop(true).await;
}

#[actix_rt::test]
async fn test_create_error_carries_server_message() {
    let (base, handle) = spawn_server();
    let api = client(&base);

    let err = api
        .create_link(
            TOKEN,
            &CreateLinkRequest {
                url: "ftp-ish".into(),
                title: String::new(),
                code: None,
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err, ClientError::request_failed(400, Some("invalid url".into())));
    assert_eq!(err.to_string(), "invalid url");
    handle.stop(true).await;
}

#[actix_rt::test]
async fn test_delete_link() {
    let (base, handle) = spawn_server();
    let api = client(&base);

    api.delete_link(TOKEN, "abc").await.unwrap();

    let err = api.delete_link(TOKEN, "boom").await.unwrap_err();
    assert_eq!(err, ClientError::request_failed(500, None));
    handle.stop(true).await;
}

// =============================================================================
// Failures
// =============================================================================

#[actix_rt::test]
async fn test_wrong_token_is_request_failed() {
    let (base, handle) = spawn_server();
    let api = client(&base);

    let err = api.list_links("wrong", 1, 20).await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.server_message(), Some("invalid token"));
    handle.stop(true).await;
}

#[actix_rt::test]
async fn test_not_found_message() {
    let (base, handle) = spawn_server();
    let api = client(&base);

    let err = api.get_link(TOKEN, "missing").await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "link not found");
    handle.stop(true).await;
}

#[actix_rt::test]
async fn test_undecodable_body_is_network_or_parse() {
    let (base, handle) = spawn_server();
    let api = client(&base);

    let err = api.get_link(TOKEN, "badjson").await.unwrap_err();

    assert!(matches!(err, ClientError::NetworkOrParse(_)));
    assert_eq!(err.status(), None);
    handle.stop(true).await;
}

#[tokio::test]
async fn test_unreachable_server_is_network_or_parse() {
    // Bind and drop to get a port nobody listens on
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let api = client(&format!("http://127.0.0.1:{}/api/v1", port));

    let err = api.stats(TOKEN).await.unwrap_err();

    assert!(matches!(err, ClientError::NetworkOrParse(_)));
}
