//! Repository for the `perfumes` table.

use sqlx::types::Json;
use sqlx::PgPool;
use topnotes_core::i18n::Language;
use topnotes_core::stock::canonical_stock_status;
use uuid::Uuid;

use crate::models::perfume::{CatalogFilter, CreatePerfume, Perfume, PerfumeRow, UpdatePerfume};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name_en, name_ar, brand_en, brand_ar, \
    category_en, category_ar, gender_en, gender_ar, \
    description_en, description_ar, sizes, stock_status, image_url, \
    is_new, is_bestseller, is_active, created_at, updated_at";

/// Provides CRUD and filtered list operations for catalog records.
pub struct PerfumeRepo;

impl PerfumeRepo {
    /// Insert a new record with an app-generated UUID, returning the row.
    pub async fn create(pool: &PgPool, input: &CreatePerfume) -> Result<Perfume, sqlx::Error> {
        let query = format!(
            "INSERT INTO perfumes \
                (id, name_en, name_ar, brand_en, brand_ar, \
                 category_en, category_ar, gender_en, gender_ar, \
                 description_en, description_ar, sizes, stock_status, image_url, \
                 is_new, is_bestseller, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PerfumeRow>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.name.en)
            .bind(&input.name.ar)
            .bind(&input.brand.en)
            .bind(&input.brand.ar)
            .bind(&input.category.en)
            .bind(&input.category.ar)
            .bind(&input.gender.en)
            .bind(&input.gender.ar)
            .bind(&input.description.en)
            .bind(&input.description.ar)
            .bind(Json(&input.sizes))
            .bind(&input.stock_status)
            .bind(&input.image_url)
            .bind(input.is_new)
            .bind(input.is_bestseller)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
            .map(Perfume::from)
    }

    /// Find a record by ID regardless of its active flag (admin surface).
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Perfume>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM perfumes WHERE id = $1");
        sqlx::query_as::<_, PerfumeRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map(|row| row.map(Perfume::from))
    }

    /// Find an active record by ID (public surface).
    pub async fn find_active_by_id(
        pool: &PgPool,
        id: Uuid,
    ) -> Result<Option<Perfume>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM perfumes WHERE id = $1 AND is_active = true");
        sqlx::query_as::<_, PerfumeRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map(|row| row.map(Perfume::from))
    }

    /// List one page of records matching the filter, newest first.
    ///
    /// `active_only` is the public surface's base predicate; the admin
    /// surface passes `false` and sees everything.
    pub async fn list(
        pool: &PgPool,
        filter: &CatalogFilter,
        active_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Perfume>, sqlx::Error> {
        let (where_clause, binds, bind_idx) = build_catalog_filter(filter, active_only);

        let query = format!(
            "SELECT {COLUMNS} FROM perfumes {where_clause} \
             ORDER BY created_at DESC \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );

        let mut q = sqlx::query_as::<_, PerfumeRow>(&query);
        for value in &binds {
            q = q.bind(value);
        }
        let rows = q.bind(limit).bind(offset).fetch_all(pool).await?;
        Ok(rows.into_iter().map(Perfume::from).collect())
    }

    /// Count records matching the filter (for pagination metadata).
    pub async fn count(
        pool: &PgPool,
        filter: &CatalogFilter,
        active_only: bool,
    ) -> Result<i64, sqlx::Error> {
        let (where_clause, binds, _) = build_catalog_filter(filter, active_only);

        let query = format!("SELECT COUNT(*)::BIGINT FROM perfumes {where_clause}");

        let mut q = sqlx::query_scalar::<_, i64>(&query);
        for value in &binds {
            q = q.bind(value);
        }
        q.fetch_one(pool).await
    }

    /// Replace every mutable field of a record (full update).
    ///
    /// Returns `None` if no row with the given `id` exists. `image_url` is
    /// written verbatim, so a full update can clear it.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        input: &CreatePerfume,
    ) -> Result<Option<Perfume>, sqlx::Error> {
        let query = format!(
            "UPDATE perfumes SET
                name_en = $2, name_ar = $3,
                brand_en = $4, brand_ar = $5,
                category_en = $6, category_ar = $7,
                gender_en = $8, gender_ar = $9,
                description_en = $10, description_ar = $11,
                sizes = $12, stock_status = $13, image_url = $14,
                is_new = $15, is_bestseller = $16, is_active = $17,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PerfumeRow>(&query)
            .bind(id)
            .bind(&input.name.en)
            .bind(&input.name.ar)
            .bind(&input.brand.en)
            .bind(&input.brand.ar)
            .bind(&input.category.en)
            .bind(&input.category.ar)
            .bind(&input.gender.en)
            .bind(&input.gender.ar)
            .bind(&input.description.en)
            .bind(&input.description.ar)
            .bind(Json(&input.sizes))
            .bind(&input.stock_status)
            .bind(&input.image_url)
            .bind(input.is_new)
            .bind(input.is_bestseller)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
            .map(|row| row.map(Perfume::from))
    }

    /// Apply a merge-patch. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_partial(
        pool: &PgPool,
        id: Uuid,
        input: &UpdatePerfume,
    ) -> Result<Option<Perfume>, sqlx::Error> {
        let query = format!(
            "UPDATE perfumes SET
                name_en = COALESCE($2, name_en),
                name_ar = COALESCE($3, name_ar),
                brand_en = COALESCE($4, brand_en),
                brand_ar = COALESCE($5, brand_ar),
                category_en = COALESCE($6, category_en),
                category_ar = COALESCE($7, category_ar),
                gender_en = COALESCE($8, gender_en),
                gender_ar = COALESCE($9, gender_ar),
                description_en = COALESCE($10, description_en),
                description_ar = COALESCE($11, description_ar),
                sizes = COALESCE($12, sizes),
                stock_status = COALESCE($13, stock_status),
                image_url = COALESCE($14, image_url),
                is_new = COALESCE($15, is_new),
                is_bestseller = COALESCE($16, is_bestseller),
                is_active = COALESCE($17, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PerfumeRow>(&query)
            .bind(id)
            .bind(&input.name_en)
            .bind(&input.name_ar)
            .bind(&input.brand_en)
            .bind(&input.brand_ar)
            .bind(&input.category_en)
            .bind(&input.category_ar)
            .bind(&input.gender_en)
            .bind(&input.gender_ar)
            .bind(&input.description_en)
            .bind(&input.description_ar)
            .bind(input.sizes.as_ref().map(Json))
            .bind(&input.stock_status)
            .bind(&input.image_url)
            .bind(input.is_new)
            .bind(input.is_bestseller)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
            .map(|row| row.map(Perfume::from))
    }

    /// Permanently delete a record. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM perfumes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Distinct brand names over the active set, sorted ascending.
    pub async fn distinct_brands(
        pool: &PgPool,
        language: Language,
    ) -> Result<Vec<String>, sqlx::Error> {
        let column = match language {
            Language::En => "brand_en",
            Language::Ar => "brand_ar",
        };
        Self::distinct_values(pool, column).await
    }

    /// Distinct category names over the active set, sorted ascending.
    pub async fn distinct_categories(
        pool: &PgPool,
        language: Language,
    ) -> Result<Vec<String>, sqlx::Error> {
        let column = match language {
            Language::En => "category_en",
            Language::Ar => "category_ar",
        };
        Self::distinct_values(pool, column).await
    }

    async fn distinct_values(pool: &PgPool, column: &str) -> Result<Vec<String>, sqlx::Error> {
        let query = format!(
            "SELECT DISTINCT {column} FROM perfumes \
             WHERE is_active = true AND {column} <> '' \
             ORDER BY {column} ASC"
        );
        sqlx::query_scalar::<_, String>(&query).fetch_all(pool).await
    }
}

/// Escape LIKE wildcards in a user-supplied substring search term.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Build the WHERE clause and bind values for a catalog filter.
///
/// Returns the clause (possibly empty), the text bind values in order, and
/// the next free bind index (for LIMIT/OFFSET placeholders).
fn build_catalog_filter(filter: &CatalogFilter, active_only: bool) -> (String, Vec<String>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut binds: Vec<String> = Vec::new();

    if active_only {
        conditions.push("is_active = true".to_string());
    }

    let arabic = filter.language == Language::Ar;

    if let Some(ref term) = filter.search_term {
        let column = if arabic { "name_ar" } else { "name_en" };
        conditions.push(format!("{column} ILIKE ${bind_idx}"));
        bind_idx += 1;
        binds.push(format!("%{}%", escape_like(term)));
    }

    if let Some(ref brand) = filter.brand {
        let column = if arabic { "brand_ar" } else { "brand_en" };
        conditions.push(format!("{column} = ${bind_idx}"));
        bind_idx += 1;
        binds.push(brand.clone());
    }

    if let Some(ref category) = filter.category {
        let column = if arabic { "category_ar" } else { "category_en" };
        conditions.push(format!("{column} = ${bind_idx}"));
        bind_idx += 1;
        binds.push(category.clone());
    }

    if let Some(ref gender) = filter.gender {
        let column = if arabic { "gender_ar" } else { "gender_en" };
        conditions.push(format!("{column} = ${bind_idx}"));
        bind_idx += 1;
        binds.push(gender.clone());
    }

    if let Some(ref stock_status) = filter.stock_status {
        conditions.push(format!("LOWER(stock_status) = LOWER(${bind_idx})"));
        bind_idx += 1;
        binds.push(canonical_stock_status(stock_status).to_string());
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, binds, bind_idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_without_base_predicate_has_no_where() {
        let (clause, binds, next_idx) = build_catalog_filter(&CatalogFilter::default(), false);
        assert_eq!(clause, "");
        assert!(binds.is_empty());
        assert_eq!(next_idx, 1);
    }

    #[test]
    fn filters_combine_conjunctively_with_sequential_binds() {
        let filter = CatalogFilter {
            language: Language::Ar,
            search_term: Some("عود".to_string()),
            brand: Some("ماركة".to_string()),
            stock_status: Some("in_stock".to_string()),
            ..Default::default()
        };
        let (clause, binds, next_idx) = build_catalog_filter(&filter, true);

        assert_eq!(
            clause,
            "WHERE is_active = true AND name_ar ILIKE $1 AND brand_ar = $2 \
             AND LOWER(stock_status) = LOWER($3)"
        );
        assert_eq!(binds, vec!["%عود%", "ماركة", "In Stock"]);
        assert_eq!(next_idx, 4);
    }

    #[test]
    fn search_term_wildcards_are_escaped() {
        let filter = CatalogFilter {
            search_term: Some("50%_pure".to_string()),
            ..Default::default()
        };
        let (_, binds, _) = build_catalog_filter(&filter, false);
        assert_eq!(binds, vec!["%50\\%\\_pure%"]);
    }

    #[test]
    fn unknown_stock_filter_is_compared_literally() {
        let filter = CatalogFilter {
            stock_status: Some("Backordered".to_string()),
            ..Default::default()
        };
        let (clause, binds, _) = build_catalog_filter(&filter, false);
        assert_eq!(clause, "WHERE LOWER(stock_status) = LOWER($1)");
        assert_eq!(binds, vec!["Backordered"]);
    }
}
