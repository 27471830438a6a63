//! Repository tests for principals, bearer tokens, and the settings store.

use sqlx::PgPool;
use topnotes_db::models::admin::CreateAdmin;
use topnotes_db::repositories::{AdminRepo, AuthTokenRepo, SettingRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_admin(name: &str) -> CreateAdmin {
    CreateAdmin {
        name: name.to_string(),
        password_hash: "$argon2id$fake-hash-for-tests".to_string(),
        is_staff: true,
        is_superuser: true,
    }
}

// ---------------------------------------------------------------------------
// Admin principals
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn create_and_find_admin_by_name(pool: PgPool) {
    assert_eq!(AdminRepo::count(&pool).await.unwrap(), 0);

    let created = AdminRepo::create(&pool, &new_admin("Top Notes Admin"))
        .await
        .unwrap();
    assert!(created.is_staff);
    assert!(created.is_active);

    let found = AdminRepo::find_by_name(&pool, "Top Notes Admin")
        .await
        .unwrap()
        .expect("admin must be findable by name");
    assert_eq!(found.id, created.id);

    assert!(AdminRepo::find_by_name(&pool, "ghost")
        .await
        .unwrap()
        .is_none());
    assert_eq!(AdminRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn admin_names_are_unique(pool: PgPool) {
    AdminRepo::create(&pool, &new_admin("Top Notes Admin"))
        .await
        .unwrap();
    let duplicate = AdminRepo::create(&pool, &new_admin("Top Notes Admin")).await;
    assert!(duplicate.is_err(), "duplicate name must violate uniqueness");
}

#[sqlx::test(migrations = "../../migrations")]
async fn update_password_replaces_the_hash(pool: PgPool) {
    let admin = AdminRepo::create(&pool, &new_admin("Top Notes Admin"))
        .await
        .unwrap();

    assert!(AdminRepo::update_password(&pool, admin.id, "$argon2id$new-hash")
        .await
        .unwrap());

    let reloaded = AdminRepo::find_by_id(&pool, admin.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.password_hash, "$argon2id$new-hash");

    assert!(!AdminRepo::update_password(&pool, admin.id + 1, "x")
        .await
        .unwrap());
}

// ---------------------------------------------------------------------------
// Bearer tokens
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn get_or_create_returns_the_same_token_while_one_exists(pool: PgPool) {
    let admin = AdminRepo::create(&pool, &new_admin("Top Notes Admin"))
        .await
        .unwrap();

    let first = AuthTokenRepo::get_or_create(&pool, admin.id, "token-aaa")
        .await
        .unwrap();
    assert_eq!(first.token, "token-aaa");

    // A second issue with a fresh candidate must return the existing token.
    let second = AuthTokenRepo::get_or_create(&pool, admin.id, "token-bbb")
        .await
        .unwrap();
    assert_eq!(second.token, "token-aaa");
}

#[sqlx::test(migrations = "../../migrations")]
async fn tokens_resolve_to_their_owner(pool: PgPool) {
    let admin = AdminRepo::create(&pool, &new_admin("Top Notes Admin"))
        .await
        .unwrap();
    AuthTokenRepo::get_or_create(&pool, admin.id, "token-aaa")
        .await
        .unwrap();

    let resolved = AuthTokenRepo::find_admin_by_token(&pool, "token-aaa")
        .await
        .unwrap()
        .expect("token must resolve");
    assert_eq!(resolved.id, admin.id);

    assert!(AuthTokenRepo::find_admin_by_token(&pool, "unknown")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn deleting_all_tokens_allows_a_fresh_issue(pool: PgPool) {
    let admin = AdminRepo::create(&pool, &new_admin("Top Notes Admin"))
        .await
        .unwrap();
    AuthTokenRepo::get_or_create(&pool, admin.id, "token-aaa")
        .await
        .unwrap();

    assert_eq!(
        AuthTokenRepo::delete_all_for_admin(&pool, admin.id)
            .await
            .unwrap(),
        1
    );
    assert!(AuthTokenRepo::find_admin_by_token(&pool, "token-aaa")
        .await
        .unwrap()
        .is_none());

    let reissued = AuthTokenRepo::get_or_create(&pool, admin.id, "token-bbb")
        .await
        .unwrap();
    assert_eq!(reissued.token, "token-bbb");
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn settings_upsert_creates_then_updates(pool: PgPool) {
    let created = SettingRepo::upsert(&pool, "site_banner", "Summer sale")
        .await
        .unwrap();
    assert_eq!(created.value, "Summer sale");
    assert_eq!(created.description, "Setting for site_banner");

    let updated = SettingRepo::upsert(&pool, "site_banner", "Winter sale")
        .await
        .unwrap();
    assert_eq!(updated.id, created.id, "upsert must not create a second row");
    assert_eq!(updated.value, "Winter sale");
    // The description is insert-only.
    assert_eq!(updated.description, "Setting for site_banner");
}

#[sqlx::test(migrations = "../../migrations")]
async fn settings_list_is_ordered_by_key(pool: PgPool) {
    SettingRepo::upsert(&pool, "zeta", "3").await.unwrap();
    SettingRepo::upsert(&pool, "alpha", "1").await.unwrap();
    SettingRepo::upsert(&pool, "mid", "2").await.unwrap();

    let all = SettingRepo::list_all(&pool).await.unwrap();
    let keys: Vec<&str> = all.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, vec!["alpha", "mid", "zeta"]);
}
