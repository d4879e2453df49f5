//! Page routes against a live PostgreSQL
//!
//! cargo test -p lunchly-server -- --ignored

mod common;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use lunchly_server::http::build_router;
use lunchly_server::CustomerStore;
use tower::ServiceExt;

use common::{insert_customer, insert_reservations, pool, tag};

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

#[tokio::test]
#[ignore = "requires database"]
async fn list_and_search_show_customer() {
    let pool = pool().await;
    let t = tag();
    let customer = insert_customer(&pool, &format!("listed{t}"), "route").await;
    let link = format!("/{}", customer.id.unwrap());

    let response = get(build_router(pool.clone()), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(&link));

    let response = get(build_router(pool), &format!("/?search=listed{t}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(&link));
}

#[tokio::test]
#[ignore = "requires database"]
async fn top_ten_page_renders() {
    let pool = pool().await;
    let customer = insert_customer(&pool, &format!("busy{}", tag()), "route").await;
    insert_reservations(&pool, &customer, 1).await;

    let response = get(build_router(pool), "/top-ten").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Top Customers"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn detail_page_shows_customer() {
    let pool = pool().await;
    let t = tag();
    let customer = insert_customer(&pool, &format!("detail{t}"), "route").await;
    insert_reservations(&pool, &customer, 1).await;

    let response = get(build_router(pool), &format!("/{}", customer.id.unwrap())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let text = body_text(response).await;
    assert!(text.contains(&format!("detail{t}")));
    assert!(text.contains("for 2 guests"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn unknown_customer_is_404() {
    let pool = pool().await;

    assert_eq!(get(build_router(pool.clone()), "/0").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(get(build_router(pool), "/0/edit").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn edit_form_is_prefilled() {
    let pool = pool().await;
    let t = tag();
    let customer = insert_customer(&pool, &format!("editme{t}"), "route").await;

    let response = get(build_router(pool), &format!("/{}/edit", customer.id.unwrap())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let text = body_text(response).await;
    assert!(text.contains("Edit Customer"));
    assert!(text.contains(&format!("editme{t}")));
}

#[tokio::test]
#[ignore = "requires database"]
async fn add_customer_redirects_to_detail() {
    let pool = pool().await;
    let t = tag();

    let response = post_form(
        build_router(pool.clone()),
        "/add",
        &format!("firstName=added{t}&lastName=route&phone=100000000&notes=from+routes"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let found = CustomerStore::new(&pool)
        .list_all(Some(&format!("added{t}")))
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    let location = response.headers()[header::LOCATION].to_str().unwrap();
    assert_eq!(location, format!("/{}", found[0].id.unwrap()));
}

#[tokio::test]
#[ignore = "requires database"]
async fn add_customer_missing_data_is_400() {
    let pool = pool().await;

    let response = post_form(build_router(pool), "/add", "lastName=route&notes=x").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn edit_customer_updates_in_place() {
    let pool = pool().await;
    let t = tag();
    let customer = insert_customer(&pool, &format!("orig{t}"), "route").await;
    let id = customer.id.unwrap();

    let response = post_form(
        build_router(pool.clone()),
        &format!("/{id}/edit"),
        &format!("firstName=edited{t}&lastName=route&phone=&notes="),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let fetched = CustomerStore::new(&pool).get_by_id(id).await.unwrap();
    assert_eq!(fetched.first_name, format!("edited{t}"));
    assert_eq!(fetched.phone, None);
}

#[tokio::test]
#[ignore = "requires database"]
async fn edit_unknown_customer_is_404() {
    let pool = pool().await;

    let response = post_form(build_router(pool), "/0/edit", "firstName=a&lastName=b").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn add_reservation_redirects_to_customer() {
    let pool = pool().await;
    let customer = insert_customer(&pool, &format!("booker{}", tag()), "route").await;
    let id = customer.id.unwrap();

    let response = post_form(
        build_router(pool.clone()),
        &format!("/{id}/add-reservation"),
        "startAt=2018-09-08T12%3A20&numGuests=100&notes=test+res+note",
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let reservations = CustomerStore::new(&pool).reservations(&customer).await.unwrap();
    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].num_guests, 100);
}

#[tokio::test]
#[ignore = "requires database"]
async fn add_reservation_for_unknown_customer_is_500() {
    let pool = pool().await;

    let response = post_form(
        build_router(pool),
        "/0/add-reservation",
        "startAt=2018-09-08+12%3A20%3A07&numGuests=2",
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
#[ignore = "requires database"]
async fn health_reports_database_ok() {
    let pool = pool().await;

    let response = get(build_router(pool), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}
