//! Handlers for the public catalog surface.
//!
//! Read-only. Inactive records are invisible here: lists exclude them and
//! a detail fetch of one answers exactly like a miss (200 with a null
//! body), so existence and inactivity cannot be told apart.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use topnotes_core::error::CoreError;
use topnotes_core::i18n::Language;
use topnotes_core::pagination::{PageRequest, Pagination, PUBLIC_PAGE_SIZE};
use topnotes_db::models::perfume::{CatalogFilter, Perfume, SizeTier};
use topnotes_db::repositories::PerfumeRepo;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::response::PerfumePage;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter and response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /perfumes`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQueryParams {
    pub language: Option<String>,
    pub brand_filter: Option<String>,
    pub category_filter: Option<String>,
    pub gender_filter: Option<String>,
    pub stock_status_filter: Option<String>,
    pub search_term: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Query parameters for the distinct-value endpoints.
#[derive(Debug, Deserialize)]
pub struct LanguageParams {
    pub language: Option<String>,
}

/// Public wire shape of a catalog record. Excludes internal fields
/// (`isActive`, timestamps).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicPerfume {
    pub id: Uuid,
    pub name_en: String,
    pub name_ar: String,
    pub brand_en: String,
    pub brand_ar: String,
    pub category_en: String,
    pub category_ar: String,
    pub gender_en: String,
    pub gender_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub sizes: Vec<SizeTier>,
    pub stock_status: String,
    pub image_url: Option<String>,
    pub is_new: bool,
    pub is_bestseller: bool,
}

impl From<Perfume> for PublicPerfume {
    fn from(p: Perfume) -> Self {
        Self {
            id: p.id,
            name_en: p.name.en,
            name_ar: p.name.ar,
            brand_en: p.brand.en,
            brand_ar: p.brand.ar,
            category_en: p.category.en,
            category_ar: p.category.ar,
            gender_en: p.gender.en,
            gender_ar: p.gender.ar,
            description_en: p.description.en,
            description_ar: p.description.ar,
            sizes: p.sizes,
            stock_status: p.stock_status,
            image_url: p.image_url,
            is_new: p.is_new,
            is_bestseller: p.is_bestseller,
        }
    }
}

/// Treat an empty query-parameter value the same as an absent one.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /perfumes
///
/// Filtered, paginated list of active records, newest first.
pub async fn list_perfumes(
    State(state): State<AppState>,
    Query(params): Query<CatalogQueryParams>,
) -> AppResult<Json<PerfumePage<PublicPerfume>>> {
    let filter = CatalogFilter {
        language: Language::from_query(params.language.as_deref()),
        search_term: non_empty(params.search_term),
        brand: non_empty(params.brand_filter),
        category: non_empty(params.category_filter),
        gender: non_empty(params.gender_filter),
        stock_status: non_empty(params.stock_status_filter),
    };
    let request = PageRequest::new(params.page, params.limit, PUBLIC_PAGE_SIZE);

    let total_items = PerfumeRepo::count(&state.pool, &filter, true).await?;
    let records =
        PerfumeRepo::list(&state.pool, &filter, true, request.limit, request.offset()).await?;

    Ok(Json(PerfumePage {
        perfumes: records.into_iter().map(PublicPerfume::from).collect(),
        pagination: Pagination::compute(request, total_items),
    }))
}

/// GET /perfumes/{id}
///
/// Detail lookup. Malformed ids are a validation error; a well-formed id
/// that is missing or inactive answers 200 with a null body.
pub async fn get_perfume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Option<PublicPerfume>>> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| AppError::Core(CoreError::Validation("Invalid product ID.".into())))?;

    let record = PerfumeRepo::find_active_by_id(&state.pool, id).await?;
    Ok(Json(record.map(PublicPerfume::from)))
}

/// GET /brands
///
/// Distinct brand names over the active set, sorted ascending.
pub async fn list_brands(
    State(state): State<AppState>,
    Query(params): Query<LanguageParams>,
) -> AppResult<Json<Vec<String>>> {
    let language = Language::from_query(params.language.as_deref());
    let brands = PerfumeRepo::distinct_brands(&state.pool, language).await?;
    Ok(Json(brands))
}

/// GET /categories
///
/// Distinct category names over the active set, sorted ascending.
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<LanguageParams>,
) -> AppResult<Json<Vec<String>>> {
    let language = Language::from_query(params.language.as_deref());
    let categories = PerfumeRepo::distinct_categories(&state.pool, language).await?;
    Ok(Json(categories))
}
