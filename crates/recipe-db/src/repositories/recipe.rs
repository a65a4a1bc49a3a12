//! PostgreSQL implementation of RecipeRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use tracing::{debug, info, instrument};

use recipe_core::entities::{Category, Recipe, RecipeDetail, RecipeIngredient, RecipeSummary};
use recipe_core::error::DomainError;
use recipe_core::feed::{Page, PageRequest};
use recipe_core::traits::{RecipeRepository, RepoResult};
use recipe_core::value_objects::Snowflake;

use crate::models::{CategoryModel, RecipeDetailModel, RecipeModel, RecipeSummaryModel};

use super::error::{map_db_error, map_unique_violation};

/// Tags of recipe `r` as `TEXT[]`, sorted
pub(super) const TAGS_COLUMN: &str =
    "ARRAY(SELECT t.tag::text FROM recipe_tags t WHERE t.recipe_id = r.id ORDER BY t.tag) AS tags";

/// Categories of recipe `r` as a JSON array of `{name, slug}`
pub(super) const CATEGORIES_COLUMN: &str = r"COALESCE(
        (SELECT json_agg(json_build_object('name', c.name, 'slug', c.slug) ORDER BY c.name)
         FROM recipe_categories rc
         JOIN categories c ON c.id = rc.category_id
         WHERE rc.recipe_id = r.id),
        '[]'::json
    ) AS categories";

/// Ingredient lines of recipe `r` as a JSON array of `{name, unit, amount}`,
/// in insertion order
const INGREDIENTS_COLUMN: &str = r"COALESCE(
        (SELECT json_agg(json_build_object(
                    'name', COALESCE(i.name, ''),
                    'unit', COALESCE(un.name, ''),
                    'amount', ri.amount) ORDER BY ri.id)
         FROM recipe_ingredients ri
         LEFT JOIN ingredients i ON i.id = ri.ingredient_id
         LEFT JOIN units un ON un.id = ri.unit_id
         WHERE ri.recipe_id = r.id),
        '[]'::json
    ) AS ingredients";

fn recipe_columns() -> String {
    format!(
        "r.id, r.author_id, r.title, r.slug, r.short_text, r.full_text, r.preview_image,
         r.cooking_time, r.pub_date, r.updated_at, {TAGS_COLUMN}, {CATEGORIES_COLUMN},
         {INGREDIENTS_COLUMN}"
    )
}

/// List-shape columns. Expects `r` (recipes) and `u` (authors) in scope.
fn summary_columns() -> String {
    format!(
        r"r.id, r.title, r.slug, r.short_text, r.preview_image, r.cooking_time,
          r.pub_date, {TAGS_COLUMN},
          u.id AS author_id,
          u.username AS author_username,
          u.display_name AS author_display_name,
          u.avatar AS author_avatar,
          (SELECT COUNT(*) FROM reactions rx
           WHERE rx.target_kind = 'recipe' AND rx.target_id = r.id
             AND NOT rx.is_deleted) AS reactions_count,
          (SELECT COUNT(*) FROM views v WHERE v.recipe_id = r.id) AS views_count,
          (SELECT COUNT(*) FROM comments cm WHERE cm.recipe_id = r.id) AS comments_count"
    )
}

/// Escape `LIKE` wildcards so a term only matches literally
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// `AND r.title ILIKE ..` for every term
fn push_title_terms(builder: &mut QueryBuilder<'_, Postgres>, terms: &[String]) {
    for term in terms {
        builder
            .push(" AND r.title ILIKE ")
            .push_bind(like_pattern(term));
    }
}

pub(crate) fn search_count_statement(terms: &[String]) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM recipes r WHERE TRUE");
    push_title_terms(&mut builder, terms);
    builder
}

pub(crate) fn search_page_statement(
    terms: &[String],
    page: PageRequest,
) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT {} FROM recipes r JOIN users u ON u.id = r.author_id WHERE TRUE",
        summary_columns()
    ));
    push_title_terms(&mut builder, terms);
    builder
        .push(" ORDER BY r.pub_date DESC, r.id ASC LIMIT ")
        .push_bind(page.limit())
        .push(" OFFSET ")
        .push_bind(page.offset());
    builder
}

/// Replace the ingredient lines of a recipe. Unknown ingredient and unit
/// names are added to their dictionaries first.
async fn replace_ingredients(
    tx: &mut Transaction<'_, Postgres>,
    recipe_id: Snowflake,
    ingredients: &[RecipeIngredient],
) -> RepoResult<()> {
    sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_id = $1")
        .bind(recipe_id.into_inner())
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;

    if ingredients.is_empty() {
        return Ok(());
    }

    let names: Vec<&str> = ingredients.iter().map(|i| i.name.as_str()).collect();
    let units: Vec<&str> = ingredients.iter().map(|i| i.unit.as_str()).collect();
    let amounts: Vec<i32> = ingredients.iter().map(|i| i.amount).collect();

    sqlx::query(
        r"
        INSERT INTO ingredients (name)
        SELECT DISTINCT name FROM UNNEST($1::text[]) AS name
        ON CONFLICT (name) DO NOTHING
        ",
    )
    .bind(&names)
    .execute(&mut **tx)
    .await
    .map_err(map_db_error)?;

    sqlx::query(
        r"
        INSERT INTO units (name)
        SELECT DISTINCT name FROM UNNEST($1::text[]) AS name
        ON CONFLICT (name) DO NOTHING
        ",
    )
    .bind(&units)
    .execute(&mut **tx)
    .await
    .map_err(map_db_error)?;

    sqlx::query(
        r"
        INSERT INTO recipe_ingredients (recipe_id, ingredient_id, unit_id, amount)
        SELECT $1, i.id, un.id, x.amount
        FROM UNNEST($2::text[], $3::text[], $4::int4[])
             WITH ORDINALITY AS x(name, unit, amount, ord)
        JOIN ingredients i ON i.name = x.name
        JOIN units un ON un.name = x.unit
        ORDER BY x.ord
        ",
    )
    .bind(recipe_id.into_inner())
    .bind(&names)
    .bind(&units)
    .bind(&amounts)
    .execute(&mut **tx)
    .await
    .map_err(map_db_error)?;

    Ok(())
}

/// PostgreSQL implementation of RecipeRepository
#[derive(Clone)]
pub struct PgRecipeRepository {
    pool: PgPool,
}

impl PgRecipeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeRepository for PgRecipeRepository {
    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Recipe>> {
        let sql = format!("SELECT {} FROM recipes r WHERE r.slug = $1", recipe_columns());
        let result = sqlx::query_as::<_, RecipeModel>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Recipe::from))
    }

    #[instrument(skip(self))]
    async fn find_detail(&self, slug: &str) -> RepoResult<Option<RecipeDetail>> {
        let sql = format!(
            r"
            SELECT {},
                   u.username AS author_username,
                   u.display_name AS author_display_name,
                   u.avatar AS author_avatar,
                   (SELECT COUNT(*) FROM reactions rx
                    WHERE rx.target_kind = 'recipe' AND rx.target_id = r.id
                      AND NOT rx.is_deleted) AS reactions_count,
                   (SELECT COUNT(*) FROM views v WHERE v.recipe_id = r.id) AS views_count
            FROM recipes r
            JOIN users u ON u.id = r.author_id
            WHERE r.slug = $1
            ",
            recipe_columns()
        );
        let result = sqlx::query_as::<_, RecipeDetailModel>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(RecipeDetail::from))
    }

    #[instrument(skip(self))]
    async fn slug_exists(&self, slug: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM recipes WHERE slug = $1)")
            .bind(slug)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_categories(&self, slugs: &[String]) -> RepoResult<Vec<Category>> {
        if slugs.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT name, slug
            FROM categories
            WHERE slug = ANY($1)
            ORDER BY name
            ",
        )
        .bind(slugs)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    #[instrument(skip(self, recipe), fields(recipe_id = %recipe.id, slug = %recipe.slug))]
    async fn create(&self, recipe: &Recipe) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO recipes (id, author_id, title, slug, short_text, full_text,
                                 preview_image, cooking_time, pub_date, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(recipe.id.into_inner())
        .bind(recipe.author_id.into_inner())
        .bind(&recipe.title)
        .bind(&recipe.slug)
        .bind(&recipe.short_text)
        .bind(&recipe.full_text)
        .bind(&recipe.preview_image)
        .bind(recipe.cooking_time)
        .bind(recipe.pub_date)
        .bind(recipe.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::SlugExists(recipe.slug.clone())))?;

        if !recipe.tags.is_empty() {
            sqlx::query(
                r"
                INSERT INTO recipe_tags (recipe_id, tag)
                SELECT $1, tag FROM UNNEST($2::text[]) AS tag
                ON CONFLICT DO NOTHING
                ",
            )
            .bind(recipe.id.into_inner())
            .bind(&recipe.tags)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        if !recipe.categories.is_empty() {
            let slugs: Vec<String> = recipe.categories.iter().map(|c| c.slug.clone()).collect();
            sqlx::query(
                r"
                INSERT INTO recipe_categories (recipe_id, category_id)
                SELECT $1, id FROM categories WHERE slug = ANY($2)
                ",
            )
            .bind(recipe.id.into_inner())
            .bind(&slugs)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        replace_ingredients(&mut tx, recipe.id, &recipe.ingredients).await?;

        tx.commit().await.map_err(map_db_error)?;

        info!(recipe_id = %recipe.id, "Recipe created");
        Ok(())
    }

    #[instrument(skip(self, recipe), fields(recipe_id = %recipe.id))]
    async fn update(&self, recipe: &Recipe) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE recipes
            SET title = $2, short_text = $3, full_text = $4, cooking_time = $5, updated_at = $6
            WHERE id = $1
            ",
        )
        .bind(recipe.id.into_inner())
        .bind(&recipe.title)
        .bind(&recipe.short_text)
        .bind(&recipe.full_text)
        .bind(recipe.cooking_time)
        .bind(recipe.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::RecipeNotFound(recipe.slug.clone()));
        }

        replace_ingredients(&mut tx, recipe.id, &recipe.ingredients).await?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Reactions are not foreign keys, so clear them before the cascade
        sqlx::query(
            r"
            DELETE FROM reactions
            WHERE (target_kind = 'recipe' AND target_id = $1)
               OR (target_kind = 'comment'
                   AND target_id IN (SELECT id FROM comments WHERE recipe_id = $1))
            ",
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        info!(recipe_id = %id, "Recipe deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_favorites(
        &self,
        user_id: Snowflake,
        page: PageRequest,
    ) -> RepoResult<Page<RecipeSummary>> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM favorites WHERE author_id = $1",
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        if count == 0 {
            return Ok(Page::empty(page));
        }

        let sql = format!(
            r"
            SELECT {}
            FROM favorites f
            JOIN recipes r ON r.id = f.recipe_id
            JOIN users u ON u.id = r.author_id
            WHERE f.author_id = $1
            ORDER BY r.pub_date DESC, r.id ASC
            LIMIT $2 OFFSET $3
            ",
            summary_columns()
        );
        let rows = sqlx::query_as::<_, RecipeSummaryModel>(&sql)
            .bind(user_id.into_inner())
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Page::new(
            page,
            count,
            rows.into_iter().map(RecipeSummary::from).collect(),
        ))
    }

    #[instrument(skip(self))]
    async fn search(&self, terms: &[String], page: PageRequest) -> RepoResult<Page<RecipeSummary>> {
        let count = search_count_statement(terms)
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        if count <= page.offset() {
            debug!(count, "Search page is past the matching recipes");
            return Ok(Page::new(page, count, Vec::new()));
        }

        let rows = search_page_statement(terms, page)
            .build_query_as::<RecipeSummaryModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Page::new(
            page,
            count,
            rows.into_iter().map(RecipeSummary::from).collect(),
        ))
    }
}
