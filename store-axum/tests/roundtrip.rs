//! The full stack: router over an in-memory SQLite catalog.

use axum::http::{StatusCode, header};
use axum_test::TestServer;
use serde_json::{Value, json};
use store_sqlite::{Db, config::SqliteConfig};

mod app;
use app::{server, token};

async fn catalog() -> TestServer {
    let db = Db::open(&SqliteConfig::default()).await.unwrap();
    server(db)
}

async fn create(server: &TestServer, name: &str, brand: &str, price: f64) -> Value {
    let response = server
        .post("/products")
        .authorization_bearer(token(&["ADMIN"]))
        .json(&json!({ "name": name, "brand": brand, "price": price }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

fn names(page: &Value) -> Vec<&str> {
    page["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect()
}

// Without a multithreaded runtime, the pool cannot make progress
#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn crud_lifecycle() {
    let server = catalog().await;

    let created = create(&server, "Trail runner", "Acme", 89.0).await;
    let id = created["id"].as_i64().unwrap();
    let location = format!("/products/{id}");

    let fetched = server.get(&location).await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>(), created);

    let updated = server
        .put(&location)
        .authorization_bearer(token(&["ADMIN"]))
        .json(&json!({
            "id": id + 100,
            "name": "Trail runner 2",
            "brand": "Acme",
            "price": 99.0,
            "description": "Now with laces"
        }))
        .await;
    updated.assert_status_ok();
    let updated = updated.json::<Value>();
    assert_eq!(updated["id"], id);
    assert_eq!(updated["name"], "Trail runner 2");
    assert_eq!(updated["dateOfCreation"], created["dateOfCreation"]);

    server
        .delete(&location)
        .authorization_bearer(token(&["ADMIN"]))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let gone = server.get(&location).await;
    gone.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(gone.json::<Value>()["error"], "NOT_FOUND");

    server
        .delete(&location)
        .authorization_bearer(token(&["ADMIN"]))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn duplicate_names_conflict() {
    let server = catalog().await;
    create(&server, "Sandal", "Initech", 25.0).await;

    let response = server
        .post("/products")
        .authorization_bearer(token(&["ADMIN"]))
        .json(&json!({ "name": "Sandal", "brand": "Globex", "price": 30.0 }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["error"], "CONFLICT");
}

#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn updating_a_missing_product_is_not_found() {
    let server = catalog().await;

    server
        .put("/products/12")
        .authorization_bearer(token(&["ADMIN"]))
        .json(&json!({ "name": "Ghost", "brand": "Acme", "price": 1.0 }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn search_filters_sorts_and_pages() {
    let server = catalog().await;
    create(&server, "Trail runner", "Acme", 89.0).await;
    create(&server, "Road runner", "Acme", 120.0).await;
    create(&server, "Hiking boot", "Globex", 150.0).await;
    create(&server, "Sandal", "Initech", 25.0).await;
    create(&server, "Running sock", "Globex", 9.5).await;

    let page = server.get("/products").await.json::<Value>();
    assert_eq!(
        names(&page),
        ["Running sock", "Sandal", "Trail runner", "Road runner", "Hiking boot"]
    );
    assert_eq!(page["totalElements"], 5);
    assert_eq!(page["totalPages"], 1);

    let page = server
        .get("/products?brands=Acme,Globex&price=120&productName=RUN&sortBy=name&sortType=desc")
        .await
        .json::<Value>();
    assert_eq!(names(&page), ["Trail runner", "Running sock", "Road runner"]);

    let page = server
        .get("/products?size=2&page=1&sortBy=id")
        .await
        .json::<Value>();
    assert_eq!(names(&page), ["Hiking boot", "Sandal"]);
    assert_eq!(page["totalElements"], 5);
    assert_eq!(page["totalPages"], 3);

    let page = server.get("/products?page=9").await.json::<Value>();
    assert_eq!(page["items"], json!([]));
    assert_eq!(page["totalElements"], 5);
}

#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn unsupported_sorts_are_bad_requests() {
    let server = catalog().await;

    for query in ["sortBy=colour", "sortType=sideways", "sortBy=price%3Bdrop%20table%20product"] {
        let response = server.get(&format!("/products?{query}")).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["error"], "INVALID_SORT");
    }
}

#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn unsupported_price_filters_are_bad_requests() {
    let server = catalog().await;
    create(&server, "Sandal", "Initech", 25.0).await;

    for query in ["price=-5", "price=0", "price=inf"] {
        let response = server.get(&format!("/products?{query}")).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["error"], "INVALID_FILTER", "{query}");
    }

    let page = server.get("/products?price=25").await.json::<Value>();
    assert_eq!(names(&page), ["Sandal"]);
}

#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn name_search_folds_unicode_case() {
    let server = catalog().await;
    create(&server, "ÉCLAIR Pro", "Pâtisserie", 4.5).await;
    create(&server, "Croissant", "Pâtisserie", 1.5).await;

    let page = server
        .get("/products?productName=%C3%A9clair")
        .await
        .json::<Value>();
    assert_eq!(names(&page), ["ÉCLAIR Pro"]);
}

#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn health_and_docs() {
    let server = catalog().await;

    let health = server.get("/health").await;
    health.assert_status_ok();
    assert_eq!(health.json::<Value>(), json!({ "status": "ok" }));

    let docs = server.get("/docs/api.json").await;
    docs.assert_status_ok();
    let docs = docs.json::<Value>();
    assert_eq!(docs["info"]["title"], "Online Store API");
    let paths = docs["paths"].as_object().unwrap();
    let list = paths
        .iter()
        .find(|(path, _)| path.trim_end_matches('/') == "/products")
        .map(|(_, item)| item)
        .unwrap();
    assert!(list["get"].is_object());
    assert!(list["post"]["security"].is_array());
    assert!(paths["/products/{id}"]["delete"]["security"].is_array());
    assert!(paths["/products/{id}"]["get"]["security"].is_null());

    let page = server.get("/docs").await;
    page.assert_status_ok();
    assert!(
        page.header(header::CONTENT_TYPE)
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );
}
