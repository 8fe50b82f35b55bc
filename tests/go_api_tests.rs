//! 跳转端点集成测试

use std::sync::Arc;

use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::LOCATION;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};

use gomarks::api::middleware::RequestIdMiddleware;
use gomarks::api::services::go_routes;
use gomarks::resolver::ShortcutLookup;
use gomarks::services::ResolveService;
use gomarks::storage::{MemoryStore, ShortcutStore};

fn services() -> (Arc<MemoryStore>, Arc<ResolveService>) {
    let store = Arc::new(MemoryStore::with_examples());
    let resolver = Arc::new(ResolveService::new(store.clone()));
    (store, resolver)
}

macro_rules! go_app {
    ($resolver:expr) => {
        test::init_service(
            App::new()
                .wrap(RequestIdMiddleware)
                .app_data(web::Data::new($resolver.clone()))
                .service(web::scope("/go").service(go_routes())),
        )
        .await
    };
}

fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[actix_rt::test]
async fn test_query_parameter_redirects() {
    let (store, resolver) = services();
    let app = go_app!(resolver);

    let req = TestRequest::get()
        .uri("/go/?q=bb+climate+change")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        location(&resp),
        "https://www.bbc.com/news/world/climate%20change"
    );
    assert!(resp.headers().contains_key("x-request-id"));
    assert_eq!(
        store.find_by_keyword("bb").await.unwrap().unwrap().visit_count,
        1
    );
}

#[actix_rt::test]
async fn test_query_without_trailing_slash() {
    let (_store, resolver) = services();
    let app = go_app!(resolver);

    let req = TestRequest::get().uri("/go?q=b").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "https://www.bbc.com");
}

#[actix_rt::test]
async fn test_path_form_redirects() {
    let (_store, resolver) = services();
    let app = go_app!(resolver);

    let req = TestRequest::get().uri("/go/bbc%20rust").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "https://www.bbc.com/search?q=rust");
}

#[actix_rt::test]
async fn test_unknown_keyword_uses_fallback() {
    let (store, resolver) = services();
    store
        .set_fallback_template("https://duckduckgo.com/?q={searchTerms}")
        .await
        .unwrap();
    let app = go_app!(resolver);

    let req = TestRequest::get().uri("/go/?q=banana+split").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "https://duckduckgo.com/?q=banana%20split");
}

#[actix_rt::test]
async fn test_user_errors_are_plain_text_400() {
    let (store, resolver) = services();
    let app = go_app!(resolver);

    let req = TestRequest::get().uri("/go/?q=b+extra").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = test::read_body(resp).await;
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains("doesn't accept options"));

    let req = TestRequest::get().uri("/go/?q=bb").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // 两次请求都被记录，但没有计数
    assert_eq!(store.recent_queries(10).await.unwrap().len(), 2);
    assert_eq!(
        store.find_by_keyword("b").await.unwrap().unwrap().visit_count,
        0
    );
}

#[actix_rt::test]
async fn test_empty_query_is_rejected_without_logging() {
    let (store, resolver) = services();
    let app = go_app!(resolver);

    for uri in ["/go/?q=", "/go/?q=+++", "/go/", "/go"] {
        let req = TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "uri: {}", uri);
    }
    assert!(store.recent_queries(10).await.unwrap().is_empty());
}
