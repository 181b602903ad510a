#![cfg(feature = "glpk")]

use actix_web::{test, web, App};
use serde_json::{json, Value};

use glpk_kkt_api::cache::ReportCache;
use glpk_kkt_api::routes;

macro_rules! test_app {
    ($cache:expr) => {
        test::init_service(
            App::new()
                .app_data($cache.clone())
                .app_data(routes::json_config(2 * 1024 * 1024))
                .configure(routes::configure),
        )
        .await
    };
}

fn lp_request(kind: &str) -> Value {
    // max x1 + x2 + x3  s.t.  x1 + x2 <= 1,  x1 + x3 <= 1,  x2 + x3 <= 1,  0 <= xi <= 1
    json!({
        "problem": {
            "A": {
                "rows": [0, 0, 1, 1, 2, 2],
                "cols": [0, 1, 0, 2, 1, 2],
                "vals": [1, 1, 1, 1, 1, 1],
                "shape": {"nrows": 3, "ncols": 3}
            },
            "b": [1, 1, 1],
            "variables": [
                {"id": "x1", "bound": [0, 1], "integer": true},
                {"id": "x2", "bound": [0, 1], "integer": true},
                {"id": "x3", "bound": [0, 1], "integer": true}
            ]
        },
        "objective": {"x1": 1, "x2": 1, "x3": 1},
        "direction": "maximize",
        "kind": kind
    })
}

#[actix_web::test]
async fn test_health_endpoint() {
    let cache = web::Data::new(ReportCache::new(8));
    let app = test_app!(cache);

    let req = test::TestRequest::get().uri("/health").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, web::Bytes::from_static(b"OK"));
}

#[actix_web::test]
async fn test_continuous_check() {
    let cache = web::Data::new(ReportCache::new(8));
    let app = test_app!(cache);

    let req = test::TestRequest::post()
        .uri("/check")
        .set_json(lp_request("continuous"))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp["status"], "optimal");
    assert!((resp["objective"].as_f64().unwrap() - 1.5).abs() < 1e-9);
    for category in ["pe", "pb", "de", "db"] {
        assert_eq!(resp["kkt"][category]["quality"], "H", "category {}", category);
    }
    assert!(resp["kkt"]["pe"].get("ae_row").is_some());
    assert!(resp["kkt"]["de"].get("ae_col").is_some());
}

#[actix_web::test]
async fn test_integer_check() {
    let cache = web::Data::new(ReportCache::new(8));
    let app = test_app!(cache);

    let req = test::TestRequest::post()
        .uri("/check")
        .set_json(lp_request("integer"))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp["status"], "optimal");
    assert!((resp["objective"].as_f64().unwrap() - 1.0).abs() < 1e-9);
    assert_eq!(resp["kkt"]["pe"]["quality"], "H");
    assert_eq!(resp["kkt"]["pb"]["quality"], "H");
    assert!(resp["kkt"].get("de").is_none());
    assert!(resp["kkt"].get("db").is_none());
}

#[actix_web::test]
async fn test_repeated_request_is_cached() {
    let cache = web::Data::new(ReportCache::new(8));
    let app = test_app!(cache);

    let first = test::TestRequest::post()
        .uri("/check")
        .set_json(lp_request("continuous"))
        .to_request();
    let first: Value = test::call_and_read_body_json(&app, first).await;
    assert_eq!(cache.len(), 1);

    let second = test::TestRequest::post()
        .uri("/check")
        .set_json(lp_request("continuous"))
        .to_request();
    let second: Value = test::call_and_read_body_json(&app, second).await;

    assert_eq!(first, second);
    assert_eq!(cache.len(), 1);
}

#[actix_web::test]
async fn test_unknown_objective_variable_is_bad_request() {
    let cache = web::Data::new(ReportCache::new(8));
    let app = test_app!(cache);

    let mut body = lp_request("continuous");
    body["objective"]["missing"] = json!(1.0);

    let req = test::TestRequest::post().uri("/check").set_json(body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("missing"));
    assert!(cache.is_empty());
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let cache = web::Data::new(ReportCache::new(8));
    let app = test_app!(cache);

    let req = test::TestRequest::post()
        .uri("/check")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"problem\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_infeasible_problem_has_no_report() {
    let cache = web::Data::new(ReportCache::new(8));
    let app = test_app!(cache);

    let mut body = lp_request("continuous");
    body["problem"]["variables"][0]["bound"] = json!([1, 1]);
    body["problem"]["variables"][1]["bound"] = json!([1, 1]);

    let req = test::TestRequest::post().uri("/check").set_json(body).to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;

    assert_ne!(resp["status"], "optimal");
    assert!(resp.get("kkt").is_none());
}

#[actix_web::test]
async fn test_duplicate_matrix_entry_is_bad_request() {
    let cache = web::Data::new(ReportCache::new(8));
    let app = test_app!(cache);

    let mut body = lp_request("continuous");
    body["problem"]["A"]["rows"] = json!([0, 0, 1, 1, 2, 2, 0]);
    body["problem"]["A"]["cols"] = json!([0, 1, 0, 2, 1, 2, 0]);
    body["problem"]["A"]["vals"] = json!([1, 1, 1, 1, 1, 1, 2]);

    let req = test::TestRequest::post().uri("/check").set_json(body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("Duplicate matrix entry (0, 0)"));
    assert!(cache.is_empty());
}
