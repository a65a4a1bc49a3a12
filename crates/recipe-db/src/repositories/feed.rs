//! PostgreSQL implementation of FeedRepository
//!
//! The feed is one statement over the candidate set. Each recipe row gets its
//! own `LATERAL` aggregate per engagement table, so joining tags, categories
//! or several engagement tables can never multiply a count. Windowed and
//! all-time counts come from the same scan via `COUNT(*) FILTER (...)`.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::{debug, instrument};

use recipe_core::feed::{FeedFilter, FeedItem, FeedOrdering, FeedQuery, Page};
use recipe_core::traits::{FeedRepository, RepoResult};

use crate::models::FeedRowModel;

use super::error::map_db_error;
use super::recipe::{CATEGORIES_COLUMN, TAGS_COLUMN};

const ACTIVITY_EXPR: &str = "(rx.latest + vw.latest + cm.latest)";

/// Restrict the candidate set. Expects `r` (recipes) and `u` (authors) in scope.
fn push_filter<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a FeedFilter) {
    match filter {
        FeedFilter::All => {}
        FeedFilter::Subscriptions(viewer) => {
            builder
                .push(" WHERE r.author_id IN (SELECT f.author_id FROM follows f WHERE f.user_id = ")
                .push_bind(viewer.into_inner())
                .push(")");
        }
        FeedFilter::Author(username) => {
            builder
                .push(" WHERE u.username = ")
                .push_bind(username.as_str());
        }
    }
}

/// Sort keys; `r.id ASC` always breaks ties
fn order_clause(ordering: FeedOrdering) -> String {
    match ordering {
        FeedOrdering::PubDateDesc => "r.pub_date DESC, r.id ASC".to_string(),
        FeedOrdering::ActivityDesc => format!("{ACTIVITY_EXPR} DESC, r.id ASC"),
        FeedOrdering::ActivityAsc => format!("{ACTIVITY_EXPR} ASC, r.id ASC"),
    }
}

/// Size of the candidate set
pub(crate) fn count_statement(query: &FeedQuery) -> QueryBuilder<'_, Postgres> {
    let mut builder =
        QueryBuilder::new("SELECT COUNT(*) FROM recipes r JOIN users u ON u.id = r.author_id");
    push_filter(&mut builder, &query.filter);
    builder
}

/// One page of the candidate set with its engagement counts
pub(crate) fn page_statement(query: &FeedQuery) -> QueryBuilder<'_, Postgres> {
    let mut builder = QueryBuilder::new(
        "SELECT r.id, r.title, r.slug, r.short_text, r.preview_image, r.cooking_time, r.pub_date, ",
    );
    builder
        .push(TAGS_COLUMN)
        .push(", ")
        .push(CATEGORIES_COLUMN)
        .push(
            r",
            u.id AS author_id,
            u.username AS author_username,
            u.display_name AS author_display_name,
            u.avatar AS author_avatar,
            rx.total AS reactions_count, rx.latest AS latest_reactions_count,
            vw.total AS views_count, vw.latest AS latest_views_count,
            cm.total AS comments_count, cm.latest AS latest_comments_count
            FROM recipes r
            JOIN users u ON u.id = r.author_id",
        );

    // Reactions: recipe targets only, soft-deleted rows excluded from both counts
    builder
        .push(
            r"
            CROSS JOIN LATERAL (
                SELECT COUNT(*) AS total, COUNT(*) FILTER (WHERE x.pub_date >= ",
        )
        .push_bind(query.window_start)
        .push(
            r") AS latest
                FROM reactions x
                WHERE x.target_kind = 'recipe' AND x.target_id = r.id AND NOT x.is_deleted
            ) rx",
        );

    builder
        .push(
            r"
            CROSS JOIN LATERAL (
                SELECT COUNT(*) AS total, COUNT(*) FILTER (WHERE x.created_at >= ",
        )
        .push_bind(query.window_start)
        .push(
            r") AS latest
                FROM views x
                WHERE x.recipe_id = r.id
            ) vw",
        );

    builder
        .push(
            r"
            CROSS JOIN LATERAL (
                SELECT COUNT(*) AS total, COUNT(*) FILTER (WHERE x.pub_date >= ",
        )
        .push_bind(query.window_start)
        .push(
            r") AS latest
                FROM comments x
                WHERE x.recipe_id = r.id
            ) cm",
        );

    push_filter(&mut builder, &query.filter);

    builder
        .push(" ORDER BY ")
        .push(order_clause(query.ordering))
        .push(" LIMIT ")
        .push_bind(query.page.limit())
        .push(" OFFSET ")
        .push_bind(query.page.offset());

    builder
}

/// PostgreSQL implementation of FeedRepository
#[derive(Clone)]
pub struct PgFeedRepository {
    pool: PgPool,
}

impl PgFeedRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedRepository for PgFeedRepository {
    #[instrument(skip(self, query), fields(filter = ?query.filter, ordering = %query.ordering, page = query.page.page))]
    async fn fetch_feed(&self, query: &FeedQuery) -> RepoResult<Page<FeedItem>> {
        let count = count_statement(query)
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        if count <= query.page.offset() {
            debug!(count, "Feed page is past the candidate set");
            return Ok(Page::new(query.page, count, Vec::new()));
        }

        let rows = page_statement(query)
            .build_query_as::<FeedRowModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        debug!(count, rows = rows.len(), "Feed page fetched");

        Ok(Page::new(
            query.page,
            count,
            rows.into_iter().map(FeedItem::from).collect(),
        ))
    }
}
