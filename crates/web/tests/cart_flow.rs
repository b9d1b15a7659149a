//! HTTP-level tests for the cart routes.

mod common;

use axum::http::StatusCode;
use basket_db::models::item::{CreateItem, Item};
use basket_db::repositories::{ItemRepo, LinkRepo, UserRepo};
use sqlx::SqlitePool;

use common::{body_string, build_test_app, get_with_cookie, location, register_user};

async fn seed_item(pool: &SqlitePool, title: &str, price: i64) -> Item {
    ItemRepo::create(
        pool,
        &CreateItem {
            title: title.to_string(),
            description: format!("{title} description"),
            price,
            img_url: None,
        },
    )
    .await
    .expect("item seeds")
}

#[sqlx::test(migrations = "../db/migrations")]
async fn add_creates_a_line_and_redirects_home(pool: SqlitePool) {
    let app = build_test_app(pool.clone());
    let cookie = register_user(&app, "ada@example.com", "Ada").await;
    let item = seed_item(&pool, "Cup", 10).await;

    let response = get_with_cookie(app, &format!("/add/{}", item.id), &cookie).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/"));

    let user = UserRepo::find_by_email(&pool, "ada@example.com")
        .await
        .unwrap()
        .unwrap();
    let entries = LinkRepo::list_for_user(&pool, user.id).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].amount, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn adding_twice_keeps_a_single_line(pool: SqlitePool) {
    let app = build_test_app(pool.clone());
    let cookie = register_user(&app, "ada@example.com", "Ada").await;
    let item = seed_item(&pool, "Cup", 10).await;

    get_with_cookie(app.clone(), &format!("/add/{}", item.id), &cookie).await;
    get_with_cookie(app, &format!("/add/{}", item.id), &cookie).await;

    let user = UserRepo::find_by_email(&pool, "ada@example.com")
        .await
        .unwrap()
        .unwrap();
    let entries = LinkRepo::list_for_user(&pool, user.id).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].amount, 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn adding_an_unknown_item_is_not_found(pool: SqlitePool) {
    let app = build_test_app(pool.clone());
    let cookie = register_user(&app, "ada@example.com", "Ada").await;

    let response = get_with_cookie(app, "/add/999", &cookie).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cart_links")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(links, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_link_ids_are_not_found(pool: SqlitePool) {
    let app = build_test_app(pool);
    let cookie = register_user(&app, "ada@example.com", "Ada").await;

    let response = get_with_cookie(app.clone(), "/increase/999", &cookie).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_with_cookie(app, "/decrease/999", &cookie).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn another_users_link_is_not_found(pool: SqlitePool) {
    let app = build_test_app(pool.clone());
    let owner = register_user(&app, "owner@example.com", "Owner").await;
    let intruder = register_user(&app, "intruder@example.com", "Intruder").await;
    let item = seed_item(&pool, "Cup", 10).await;

    get_with_cookie(app.clone(), &format!("/add/{}", item.id), &owner).await;
    let owner_row = UserRepo::find_by_email(&pool, "owner@example.com")
        .await
        .unwrap()
        .unwrap();
    let link_id = LinkRepo::list_for_user(&pool, owner_row.id).await.unwrap()[0].link_id;

    let response =
        get_with_cookie(app.clone(), &format!("/increase/{link_id}"), &intruder).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_with_cookie(app, &format!("/decrease/{link_id}"), &intruder).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The owner's line is untouched.
    let entries = LinkRepo::list_for_user(&pool, owner_row.id).await.unwrap();
    assert_eq!(entries[0].amount, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn cart_page_walks_through_add_and_decrease(pool: SqlitePool) {
    let app = build_test_app(pool.clone());
    let cookie = register_user(&app, "ada@example.com", "Ada").await;
    let item = seed_item(&pool, "Cup", 10).await;

    // Empty cart.
    let body = body_string(get_with_cookie(app.clone(), "/cart", &cookie).await).await;
    assert!(body.contains("Total: 0"));

    // Add twice: one line, amount 2, total 20.
    get_with_cookie(app.clone(), &format!("/add/{}", item.id), &cookie).await;
    get_with_cookie(app.clone(), &format!("/add/{}", item.id), &cookie).await;
    let body = body_string(get_with_cookie(app.clone(), "/cart", &cookie).await).await;
    assert!(body.contains("Amount: 2"));
    assert!(body.contains("Total: 20"));

    let user = UserRepo::find_by_email(&pool, "ada@example.com")
        .await
        .unwrap()
        .unwrap();
    let link_id = LinkRepo::list_for_user(&pool, user.id).await.unwrap()[0].link_id;

    // Decrease back down to 1.
    let response = get_with_cookie(app.clone(), &format!("/decrease/{link_id}"), &cookie).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/cart"));
    let body = body_string(get_with_cookie(app.clone(), "/cart", &cookie).await).await;
    assert!(body.contains("Amount: 1"));
    assert!(body.contains("Total: 10"));

    // Decrease at 1 empties the cart.
    get_with_cookie(app.clone(), &format!("/decrease/{link_id}"), &cookie).await;
    let body = body_string(get_with_cookie(app, "/cart", &cookie).await).await;
    assert!(!body.contains("Amount:"));
    assert!(body.contains("Total: 0"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn increase_bumps_the_amount(pool: SqlitePool) {
    let app = build_test_app(pool.clone());
    let cookie = register_user(&app, "ada@example.com", "Ada").await;
    let item = seed_item(&pool, "Cup", 10).await;

    get_with_cookie(app.clone(), &format!("/add/{}", item.id), &cookie).await;
    let user = UserRepo::find_by_email(&pool, "ada@example.com")
        .await
        .unwrap()
        .unwrap();
    let link_id = LinkRepo::list_for_user(&pool, user.id).await.unwrap()[0].link_id;

    let response = get_with_cookie(app.clone(), &format!("/increase/{link_id}"), &cookie).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/cart"));

    let entries = LinkRepo::list_for_user(&pool, user.id).await.unwrap();
    assert_eq!(entries[0].amount, 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn carts_are_isolated_per_user(pool: SqlitePool) {
    let app = build_test_app(pool.clone());
    let ada = register_user(&app, "ada@example.com", "Ada").await;
    let bob = register_user(&app, "bob@example.com", "Bob").await;
    let cup = seed_item(&pool, "Cup", 10).await;
    let pot = seed_item(&pool, "Pot", 25).await;

    get_with_cookie(app.clone(), &format!("/add/{}", cup.id), &ada).await;
    get_with_cookie(app.clone(), &format!("/add/{}", pot.id), &bob).await;

    let body = body_string(get_with_cookie(app.clone(), "/cart", &ada).await).await;
    assert!(body.contains("Cup"));
    assert!(!body.contains("Pot"));
    assert!(body.contains("Total: 10"));

    let body = body_string(get_with_cookie(app, "/cart", &bob).await).await;
    assert!(body.contains("Pot"));
    assert!(!body.contains("Cup"));
    assert!(body.contains("Total: 25"));
}
