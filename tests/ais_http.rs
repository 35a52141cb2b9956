//! End-to-end tests through the HTTP layer.

use ais_server::ais::SystemFolder;
use ais_server::http::X_REQUEST_ID;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use std::time::Duration;
use tower::ServiceExt;

mod common;

use common::*;

#[tokio::test]
async fn test_path_outside_prefix() {
    let app = test_server().router();
    let res = app.oneshot(get("/somewhere/else")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = body_text(res).await;
    assert!(body.contains("<key>error_code</key><integer>4</integer>"));
}

#[tokio::test]
async fn test_missing_agent_header() {
    let app = test_server().router();
    let req = Request::builder()
        .uri("/aisv3/category/root")
        .body(Body::empty())
        .unwrap();
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(body_text(res).await.contains("<integer>5</integer>"));
}

#[tokio::test]
async fn test_get_root_category() {
    let app = test_server().router();
    let res = app.oneshot(get("/aisv3/category/root")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[header::CONTENT_TYPE], "application/llsd+xml");
    assert!(res.headers().contains_key(X_REQUEST_ID));

    let body = body_text(res).await;
    assert!(body.starts_with("<?xml"));
    assert!(body.contains("<uri>http://ais.test/aisv3/category/root</uri>"));
    assert!(body.contains(&format!("<uuid>{}</uuid>", ROOT)));
}

#[tokio::test]
async fn test_every_keyword_round_trips() {
    let server = test_server();
    for system in SystemFolder::all() {
        let res = server
            .router()
            .oneshot(get(&format!("/aisv3/category/{}", system.keyword())))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK, "{}", system.keyword());
        let body = body_text(res).await;
        let expected = format!(
            "<key>self</key><map><key>href</key><uri>http://ais.test/aisv3/category/{}</uri></map>",
            system.keyword()
        );
        assert!(body.contains(&expected), "{}: {}", system.keyword(), body);
    }
}

#[tokio::test]
async fn test_folder_by_id_and_depth() {
    let app = test_server().router();
    let res = app
        .oneshot(get(&format!("/aisv3/category/{}?depth=*", USER_FOLDER)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_text(res).await;
    assert!(body.contains(&format!("<uri>http://ais.test/aisv3/category/{}</uri>", USER_FOLDER)));
    assert!(body.contains("<key>_embedded</key>"));
    assert!(body.contains(&format!("<uri>http://ais.test/aisv3/item/{}</uri>", HAT)));
}

#[tokio::test]
async fn test_get_item() {
    let app = test_server().router();
    let res = app.oneshot(get(&format!("/aisv3/item/{}", HAT))).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_text(res).await;
    assert!(body.contains("<string>Hat</string>"));
    assert!(body.contains(&format!("<uri>http://ais.test/aisv3/category/{}</uri>", USER_FOLDER)));
}

#[tokio::test]
async fn test_unknown_family_and_token() {
    let server = test_server();
    for uri in ["/aisv3/widget/x", "/aisv3/category/nonsense", "/aisv3/item/nonsense"] {
        let res = server.router().oneshot(get(uri)).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{uri}");
        assert!(body_text(res).await.contains("<integer>4</integer>"));
    }
}

#[tokio::test]
async fn test_bad_depth_is_internal_error() {
    let app = test_server().router();
    let res = app.oneshot(get("/aisv3/category/root?depth=many")).await.unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_text(res).await;
    assert!(body.contains("<integer>11</integer>"));
    assert!(!body.contains("many"));
}

#[tokio::test]
async fn test_client_request_id_echoed() {
    let app = test_server().router();
    let mut req = get("/aisv3/category/root");
    req.headers_mut()
        .insert(X_REQUEST_ID, "trace-me-42".parse().unwrap());
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.headers()[X_REQUEST_ID], "trace-me-42");
}

#[tokio::test]
async fn test_depth_range_matches_signed_int() {
    let app = test_server().router();
    let res = app
        .clone()
        .oneshot(get("/aisv3/category/root?depth=-1"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(!body_text(res).await.contains("<key>_embedded</key>"));

    let res = app
        .oneshot(get("/aisv3/category/root?depth=3000000000"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_method_not_allowed() {
    let app = test_server().router();
    let req = Request::builder()
        .method(Method::DELETE)
        .uri("/aisv3/category/trash?simulate=1")
        .header("x-agent-id", AGENT.to_string())
        .body(Body::empty())
        .unwrap();
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(body_text(res).await.contains("<integer>7</integer>"));
}

#[tokio::test]
async fn test_library_mount_ignores_agent_header() {
    let app = test_server().router();
    let req = Request::builder()
        .uri("/aisv3/library/category/root")
        .body(Body::empty())
        .unwrap();
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_text(res).await;
    assert!(body.contains(&format!("<uuid>{}</uuid>", LIBRARY_ROOT)));
    assert!(body.contains("<uri>http://ais.test/aisv3/library/category/root</uri>"));
}

#[tokio::test]
async fn test_live_server() {
    let (addr, shutdown) = start_live_server().await;
    tokio::time::sleep(Duration::from_millis(100)).await;

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let res = client
        .get(format!("http://{}/aisv3/category/trash", addr))
        .header("x-agent-id", AGENT.to_string())
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["content-type"], "application/llsd+xml");
    assert!(res.text().await.unwrap().contains("/aisv3/category/trash</uri>"));

    let res = client
        .get(format!("http://{}/aisv3/category/{}", addr, system_folder_id(SystemFolder::Trash)))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    shutdown.trigger();
}
