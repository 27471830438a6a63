//! Handlers for the staff-gated catalog CRUD surface.
//!
//! Unlike the public surface, admins see every record (no active filter)
//! and existence misses are real 404s.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use topnotes_core::error::CoreError;
use topnotes_core::i18n::Bilingual;
use topnotes_core::pagination::{PageRequest, Pagination, ADMIN_PAGE_SIZE};
use topnotes_db::models::perfume::{
    CatalogFilter, CreatePerfume, Perfume, SizeTier, UpdatePerfume,
};
use topnotes_db::repositories::PerfumeRepo;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireStaff;
use crate::response::PerfumePage;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter, payload, and response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /admin/perfumes`.
#[derive(Debug, Deserialize)]
pub struct AdminListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Incoming wire payload for create, full update, and partial update.
///
/// Every field is optional at the serde level; [`validate_full`] enforces
/// the required set for POST/PUT so missing fields become a 400 naming
/// them, and [`into_partial`] turns any subset into a typed merge-patch.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerfumePayload {
    pub name_en: Option<String>,
    pub name_ar: Option<String>,
    pub brand_en: Option<String>,
    pub brand_ar: Option<String>,
    pub category_en: Option<String>,
    pub category_ar: Option<String>,
    pub gender_en: Option<String>,
    pub gender_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub sizes: Option<Vec<SizeTier>>,
    pub stock_status: Option<String>,
    pub image_url: Option<String>,
    pub is_new: Option<bool>,
    pub is_bestseller: Option<bool>,
    pub is_active: Option<bool>,
}

/// Admin wire shape of a catalog record. Includes `isActive`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPerfume {
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
    pub is_active: bool,
}

impl From<Perfume> for AdminPerfume {
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
            is_active: p.is_active,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Parse a path id, rejecting malformed UUIDs as a validation error.
fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::Core(CoreError::Validation("Invalid product ID.".into())))
}

/// Every size price must be a non-negative decimal.
fn validate_sizes(sizes: &[SizeTier]) -> Result<(), CoreError> {
    if sizes.iter().any(|tier| tier.price_egp.is_sign_negative()) {
        return Err(CoreError::Validation(
            "Size prices must be non-negative.".into(),
        ));
    }
    Ok(())
}

/// Enforce the full (create / PUT) field set, collecting every missing
/// wire field into one validation error.
fn validate_full(payload: PerfumePayload) -> Result<CreatePerfume, CoreError> {
    let mut missing: Vec<&str> = Vec::new();

    macro_rules! require {
        ($field:ident, $wire:literal) => {
            match payload.$field {
                Some(value) => Some(value),
                None => {
                    missing.push($wire);
                    None
                }
            }
        };
    }

    let name_en = require!(name_en, "nameEn");
    let name_ar = require!(name_ar, "nameAr");
    let brand_en = require!(brand_en, "brandEn");
    let brand_ar = require!(brand_ar, "brandAr");
    let category_en = require!(category_en, "categoryEn");
    let category_ar = require!(category_ar, "categoryAr");
    let gender_en = require!(gender_en, "genderEn");
    let gender_ar = require!(gender_ar, "genderAr");
    let description_en = require!(description_en, "descriptionEn");
    let description_ar = require!(description_ar, "descriptionAr");
    let sizes = require!(sizes, "sizes");
    let stock_status = require!(stock_status, "stockStatus");

    if !missing.is_empty() {
        return Err(CoreError::Validation(format!(
            "Missing required fields: {}.",
            missing.join(", ")
        )));
    }

    let sizes = sizes.unwrap_or_default();
    validate_sizes(&sizes)?;

    Ok(CreatePerfume {
        name: Bilingual::new(name_en.unwrap_or_default(), name_ar.unwrap_or_default()),
        brand: Bilingual::new(brand_en.unwrap_or_default(), brand_ar.unwrap_or_default()),
        category: Bilingual::new(
            category_en.unwrap_or_default(),
            category_ar.unwrap_or_default(),
        ),
        gender: Bilingual::new(gender_en.unwrap_or_default(), gender_ar.unwrap_or_default()),
        description: Bilingual::new(
            description_en.unwrap_or_default(),
            description_ar.unwrap_or_default(),
        ),
        sizes,
        stock_status: stock_status.unwrap_or_default(),
        image_url: payload.image_url,
        is_new: payload.is_new.unwrap_or(false),
        is_bestseller: payload.is_bestseller.unwrap_or(false),
        is_active: payload.is_active.unwrap_or(true),
    })
}

/// Turn any payload subset into a typed merge-patch.
fn into_partial(payload: PerfumePayload) -> Result<UpdatePerfume, CoreError> {
    if let Some(ref sizes) = payload.sizes {
        validate_sizes(sizes)?;
    }
    Ok(UpdatePerfume {
        name_en: payload.name_en,
        name_ar: payload.name_ar,
        brand_en: payload.brand_en,
        brand_ar: payload.brand_ar,
        category_en: payload.category_en,
        category_ar: payload.category_ar,
        gender_en: payload.gender_en,
        gender_ar: payload.gender_ar,
        description_en: payload.description_en,
        description_ar: payload.description_ar,
        sizes: payload.sizes,
        stock_status: payload.stock_status,
        image_url: payload.image_url,
        is_new: payload.is_new,
        is_bestseller: payload.is_bestseller,
        is_active: payload.is_active,
    })
}

fn not_found(id: Uuid) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "perfume",
        id: id.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /admin/perfumes
///
/// Paginated list of every record, active or not, newest first.
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_admin): RequireStaff,
    Query(params): Query<AdminListParams>,
) -> AppResult<Json<PerfumePage<AdminPerfume>>> {
    let filter = CatalogFilter::default();
    let request = PageRequest::new(params.page, params.limit, ADMIN_PAGE_SIZE);

    let total_items = PerfumeRepo::count(&state.pool, &filter, false).await?;
    let records =
        PerfumeRepo::list(&state.pool, &filter, false, request.limit, request.offset()).await?;

    Ok(Json(PerfumePage {
        perfumes: records.into_iter().map(AdminPerfume::from).collect(),
        pagination: Pagination::compute(request, total_items),
    }))
}

/// POST /admin/perfumes
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_admin): RequireStaff,
    Json(payload): Json<PerfumePayload>,
) -> AppResult<(StatusCode, Json<AdminPerfume>)> {
    let input = validate_full(payload)?;
    let created = PerfumeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(AdminPerfume::from(created))))
}

/// GET /admin/perfumes/{id}
pub async fn retrieve(
    State(state): State<AppState>,
    RequireStaff(_admin): RequireStaff,
    Path(id): Path<String>,
) -> AppResult<Json<AdminPerfume>> {
    let id = parse_id(&id)?;
    let record = PerfumeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(AdminPerfume::from(record)))
}

/// PUT /admin/perfumes/{id}
///
/// Full replacement; every required field must be present.
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_admin): RequireStaff,
    Path(id): Path<String>,
    Json(payload): Json<PerfumePayload>,
) -> AppResult<Json<AdminPerfume>> {
    let id = parse_id(&id)?;
    let input = validate_full(payload)?;
    let updated = PerfumeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(AdminPerfume::from(updated)))
}

/// PATCH /admin/perfumes/{id}
///
/// Merge-patch; any subset of fields.
pub async fn partial_update(
    State(state): State<AppState>,
    RequireStaff(_admin): RequireStaff,
    Path(id): Path<String>,
    Json(payload): Json<PerfumePayload>,
) -> AppResult<Json<AdminPerfume>> {
    let id = parse_id(&id)?;
    let patch = into_partial(payload)?;
    let updated = PerfumeRepo::update_partial(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(AdminPerfume::from(updated)))
}

/// DELETE /admin/perfumes/{id}
///
/// Permanent delete, 204 on success.
pub async fn destroy(
    State(state): State<AppState>,
    RequireStaff(_admin): RequireStaff,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    if !PerfumeRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}
