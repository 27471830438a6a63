//! HTTP-level integration tests for the public catalog surface.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use rust_decimal::Decimal;
use sqlx::PgPool;
use topnotes_core::i18n::Bilingual;
use topnotes_db::models::perfume::{CreatePerfume, Perfume, SizeTier};
use topnotes_db::repositories::PerfumeRepo;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn base_perfume(name_en: &str, brand_en: &str) -> CreatePerfume {
    CreatePerfume {
        name: Bilingual::new(name_en, format!("{name_en} بالعربية")),
        brand: Bilingual::new(brand_en, format!("{brand_en} بالعربية")),
        category: Bilingual::new("Floral", "زهري"),
        gender: Bilingual::new("Unisex", "للجنسين"),
        description: Bilingual::new("A description.", "وصف."),
        sizes: vec![SizeTier {
            size: "50ml".to_string(),
            price_egp: Decimal::from(200),
        }],
        stock_status: "In Stock".to_string(),
        image_url: None,
        is_new: false,
        is_bestseller: false,
        is_active: true,
    }
}

async fn seed(pool: &PgPool, input: CreatePerfume) -> Perfume {
    PerfumeRepo::create(pool, &input).await.unwrap()
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// The list envelope carries the items and accurate pagination metadata,
/// and soft-hidden records never appear.
#[sqlx::test(migrations = "../../migrations")]
async fn list_returns_envelope_and_hides_inactive(pool: PgPool) {
    seed(&pool, base_perfume("Visible", "Brand A")).await;
    let mut hidden = base_perfume("Hidden", "Brand B");
    hidden.is_active = false;
    seed(&pool, hidden).await;

    let app = common::build_test_app(pool);
    let response = get(&app, "/perfumes").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let perfumes = json["perfumes"].as_array().unwrap();
    assert_eq!(perfumes.len(), 1);
    assert_eq!(perfumes[0]["nameEn"], "Visible");
    // The public shape has no isActive field at all.
    assert!(perfumes[0].get("isActive").is_none());

    assert_eq!(json["pagination"]["currentPage"], 1);
    assert_eq!(json["pagination"]["totalPages"], 1);
    assert_eq!(json["pagination"]["totalItems"], 1);
    assert_eq!(json["pagination"]["hasNext"], false);
    assert_eq!(json["pagination"]["hasPrev"], false);
}

/// Newest-first ordering with limit=1 returns the latest record, and the
/// envelope counts every active record.
#[sqlx::test(migrations = "../../migrations")]
async fn newest_record_leads_a_one_item_page(pool: PgPool) {
    seed(&pool, base_perfume("Older", "Brand A")).await;
    let newest = seed(&pool, base_perfume("Newest", "Brand A")).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(&app, "/perfumes?limit=1&page=1").await).await;

    let perfumes = json["perfumes"].as_array().unwrap();
    assert_eq!(perfumes.len(), 1);
    assert_eq!(perfumes[0]["id"], newest.id.to_string());
    assert_eq!(perfumes[0]["sizes"][0]["size"], "50ml");
    assert_eq!(perfumes[0]["sizes"][0]["priceEGP"], 200.0);
    assert!(json["pagination"]["totalItems"].as_i64().unwrap() >= 1);
    assert_eq!(json["pagination"]["hasNext"], true);
}

/// A page past the end yields an empty array, not an error, with the
/// metadata still correct.
#[sqlx::test(migrations = "../../migrations")]
async fn page_beyond_range_is_empty_with_accurate_metadata(pool: PgPool) {
    for i in 0..3 {
        seed(&pool, base_perfume(&format!("Perfume {i}"), "Brand A")).await;
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(&app, "/perfumes?limit=2&page=5").await).await;

    assert_eq!(json["perfumes"].as_array().unwrap().len(), 0);
    assert_eq!(json["pagination"]["currentPage"], 5);
    assert_eq!(json["pagination"]["totalPages"], 2);
    assert_eq!(json["pagination"]["totalItems"], 3);
    assert_eq!(json["pagination"]["hasNext"], false);
    assert_eq!(json["pagination"]["hasPrev"], true);
}

/// Filters AND together: brand alone matches two, brand+gender matches one.
#[sqlx::test(migrations = "../../migrations")]
async fn filters_compose_conjunctively(pool: PgPool) {
    let mut male = base_perfume("For Him", "Brand X");
    male.gender = Bilingual::new("Male", "ذكر");
    seed(&pool, male).await;

    let mut female = base_perfume("For Her", "Brand X");
    female.gender = Bilingual::new("Female", "أنثى");
    seed(&pool, female).await;

    seed(&pool, base_perfume("Elsewhere", "Brand Y")).await;

    let app = common::build_test_app(pool);

    let json = body_json(get(&app, "/perfumes?brandFilter=Brand%20X").await).await;
    assert_eq!(json["pagination"]["totalItems"], 2);

    let json = body_json(
        get(&app, "/perfumes?brandFilter=Brand%20X&genderFilter=Male").await,
    )
    .await;
    assert_eq!(json["pagination"]["totalItems"], 1);
    assert_eq!(json["perfumes"][0]["nameEn"], "For Him");
}

/// The search term matches the Arabic name column when language=ar.
#[sqlx::test(migrations = "../../migrations")]
async fn arabic_search_uses_arabic_names(pool: PgPool) {
    let mut record = base_perfume("Night Oud", "Brand A");
    record.name = Bilingual::new("Night Oud", "عود الليل");
    seed(&pool, record).await;

    let app = common::build_test_app(pool);

    let json = body_json(
        get(&app, "/perfumes?language=ar&searchTerm=%D8%A7%D9%84%D9%84%D9%8A%D9%84").await,
    )
    .await;
    assert_eq!(json["pagination"]["totalItems"], 1);

    // English search for the Arabic term finds nothing.
    let json = body_json(
        get(&app, "/perfumes?searchTerm=%D8%A7%D9%84%D9%84%D9%8A%D9%84").await,
    )
    .await;
    assert_eq!(json["pagination"]["totalItems"], 0);
}

/// Stock bucket names resolve to the canonical labels.
#[sqlx::test(migrations = "../../migrations")]
async fn stock_bucket_filter_matches_canonical_label(pool: PgPool) {
    let mut gone = base_perfume("Gone", "Brand A");
    gone.stock_status = "Out of Stock".to_string();
    seed(&pool, gone).await;
    seed(&pool, base_perfume("Here", "Brand A")).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(&app, "/perfumes?stockStatusFilter=out_of_stock").await).await;

    assert_eq!(json["pagination"]["totalItems"], 1);
    assert_eq!(json["perfumes"][0]["nameEn"], "Gone");
}

/// Empty filter values behave like absent ones.
#[sqlx::test(migrations = "../../migrations")]
async fn empty_filter_values_are_ignored(pool: PgPool) {
    seed(&pool, base_perfume("Anything", "Brand A")).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(&app, "/perfumes?brandFilter=&searchTerm=").await).await;
    assert_eq!(json["pagination"]["totalItems"], 1);
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

/// A malformed id is a 400; a well-formed miss and an inactive record both
/// answer 200 with a null body.
#[sqlx::test(migrations = "../../migrations")]
async fn detail_policy_hides_missing_and_inactive_alike(pool: PgPool) {
    let mut hidden = base_perfume("Hidden", "Brand A");
    hidden.is_active = false;
    let hidden = seed(&pool, hidden).await;

    let app = common::build_test_app(pool);

    let response = get(&app, "/perfumes/not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let missing = uuid::Uuid::new_v4();
    let response = get(&app, &format!("/perfumes/{missing}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.is_null());

    let response = get(&app, &format!("/perfumes/{}", hidden.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.is_null());
}

/// An active record's detail body is the public shape.
#[sqlx::test(migrations = "../../migrations")]
async fn detail_returns_the_public_shape(pool: PgPool) {
    let created = seed(&pool, base_perfume("Oud Royal", "Maison X")).await;

    let app = common::build_test_app(pool);
    let response = get(&app, &format!("/perfumes/{}", created.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], created.id.to_string());
    assert_eq!(json["nameEn"], "Oud Royal");
    assert_eq!(json["brandEn"], "Maison X");
    assert_eq!(json["stockStatus"], "In Stock");
    assert!(json.get("isActive").is_none());
}

// ---------------------------------------------------------------------------
// Distinct values
// ---------------------------------------------------------------------------

/// Brands are deduplicated, sorted, active-only, and language-aware.
#[sqlx::test(migrations = "../../migrations")]
async fn brands_endpoint_projects_the_active_set(pool: PgPool) {
    let mut one = base_perfume("One", "Zeta");
    one.brand = Bilingual::new("Zeta", "زيتا");
    seed(&pool, one).await;

    let mut two = base_perfume("Two", "Alpha");
    two.brand = Bilingual::new("Alpha", "ألفا");
    seed(&pool, two).await;

    let mut dup = base_perfume("Three", "Alpha");
    dup.brand = Bilingual::new("Alpha", "ألفا");
    seed(&pool, dup).await;

    let mut hidden = base_perfume("Four", "Ghost");
    hidden.is_active = false;
    seed(&pool, hidden).await;

    let app = common::build_test_app(pool);

    let json = body_json(get(&app, "/brands").await).await;
    assert_eq!(json, serde_json::json!(["Alpha", "Zeta"]));

    let json = body_json(get(&app, "/brands?language=ar").await).await;
    assert_eq!(json, serde_json::json!(["ألفا", "زيتا"]));
}

#[sqlx::test(migrations = "../../migrations")]
async fn categories_endpoint_projects_the_active_set(pool: PgPool) {
    let mut woody = base_perfume("One", "Brand A");
    woody.category = Bilingual::new("Woody", "خشبي");
    seed(&pool, woody).await;

    let mut floral = base_perfume("Two", "Brand A");
    floral.category = Bilingual::new("Floral", "زهري");
    seed(&pool, floral).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(&app, "/categories").await).await;
    assert_eq!(json, serde_json::json!(["Floral", "Woody"]));
}
