//! Catalog record model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use topnotes_core::i18n::{Bilingual, Language};
use topnotes_core::types::Timestamp;
use uuid::Uuid;

/// One size tier: a label plus its price.
///
/// Stored inside the `sizes` JSONB column and carried unchanged to the
/// wire, where the price is a plain JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeTier {
    pub size: String,
    #[serde(rename = "priceEGP")]
    pub price_egp: Decimal,
}

/// A catalog record.
///
/// Bilingual fields are `{en, ar}` sub-values here; the flat `nameEn` /
/// `nameAr` pairs exist only in the column mapping ([`PerfumeRow`]) and the
/// wire DTOs.
#[derive(Debug, Clone)]
pub struct Perfume {
    pub id: Uuid,
    pub name: Bilingual,
    pub brand: Bilingual,
    pub category: Bilingual,
    pub gender: Bilingual,
    pub description: Bilingual,
    pub sizes: Vec<SizeTier>,
    pub stock_status: String,
    pub image_url: Option<String>,
    pub is_new: bool,
    pub is_bestseller: bool,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Flat row shape matching the `perfumes` table columns.
#[derive(Debug, FromRow)]
pub struct PerfumeRow {
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
    pub sizes: Json<Vec<SizeTier>>,
    pub stock_status: String,
    pub image_url: Option<String>,
    pub is_new: bool,
    pub is_bestseller: bool,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<PerfumeRow> for Perfume {
    fn from(row: PerfumeRow) -> Self {
        Self {
            id: row.id,
            name: Bilingual::new(row.name_en, row.name_ar),
            brand: Bilingual::new(row.brand_en, row.brand_ar),
            category: Bilingual::new(row.category_en, row.category_ar),
            gender: Bilingual::new(row.gender_en, row.gender_ar),
            description: Bilingual::new(row.description_en, row.description_ar),
            sizes: row.sizes.0,
            stock_status: row.stock_status,
            image_url: row.image_url,
            is_new: row.is_new,
            is_bestseller: row.is_bestseller,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for creating a catalog record. Every field is required by the time
/// this struct exists; handler-level validation produces it.
#[derive(Debug, Clone)]
pub struct CreatePerfume {
    pub name: Bilingual,
    pub brand: Bilingual,
    pub category: Bilingual,
    pub gender: Bilingual,
    pub description: Bilingual,
    pub sizes: Vec<SizeTier>,
    pub stock_status: String,
    pub image_url: Option<String>,
    pub is_new: bool,
    pub is_bestseller: bool,
    pub is_active: bool,
}

/// Typed merge-patch for a catalog record. Only non-`None` fields are
/// applied (COALESCE in SQL), so the two sides of a bilingual pair can be
/// patched independently.
#[derive(Debug, Clone, Default)]
pub struct UpdatePerfume {
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

/// Optional list filters, AND-combined. Text matches run against the
/// column selected by `language`.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    pub language: Language,
    pub search_term: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub gender: Option<String>,
    pub stock_status: Option<String>,
}
