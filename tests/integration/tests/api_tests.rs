//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests
//!
//! The database is shared between tests, so feed assertions are always
//! scoped to users created by the test itself (`username=` or subscriptions).

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer, TestUser,
};
use reqwest::StatusCode;

/// Publish a recipe as `user` and return it
async fn publish(server: &TestServer, user: &TestUser) -> RecipeDetailResponse {
    let response = server
        .post_auth("/api/v1/recipe/", &user.token, &CreateRecipeRequest::unique())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

/// Fetch the feed as `viewer` (anonymous when `None`)
async fn feed(
    server: &TestServer,
    query: &str,
    viewer: Option<&TestUser>,
) -> PageResponse<FeedItemResponse> {
    let path = format!("/api/v1/feed/?{query}");
    let response = match viewer {
        Some(user) => server.get_auth(&path, &user.token).await.unwrap(),
        None => server.get(&path).await.unwrap(),
    };
    assert_json(response, StatusCode::OK).await.unwrap()
}

fn slugs(page: &PageResponse<FeedItemResponse>) -> Vec<&str> {
    page.results.iter().map(|item| item.slug.as_str()).collect()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Feed Tests
// ============================================================================

#[tokio::test]
async fn test_feed_subscriptions_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server
        .get("/api/v1/feed/?filter=subscriptions")
        .await
        .unwrap();

    let body: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "MISSING_AUTH");
    assert_eq!(body.error.message, "Missing authentication");
}

#[tokio::test]
async fn test_feed_subscriptions_and_username_filters() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let a = server.create_user("alice").await.unwrap();
    let b = server.create_user("bob").await.unwrap();
    let c = server.create_user("carol").await.unwrap();

    let mut b_slugs = Vec::new();
    let mut c_slugs = Vec::new();
    for _ in 0..3 {
        publish(&server, &a).await;
        b_slugs.push(publish(&server, &b).await.slug);
        c_slugs.push(publish(&server, &c).await.slug);
    }

    let response = server
        .post_auth(
            "/api/v1/subscriptions/",
            &a.token,
            &CreateFollowRequest {
                author: b.username.clone(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Only B's recipes, newest first
    let page = feed(&server, "filter=subscriptions&ordering=-pub_date", Some(&a)).await;
    assert_eq!(page.count, 3);
    let expected: Vec<&str> = b_slugs.iter().rev().map(String::as_str).collect();
    assert_eq!(slugs(&page), expected);
    assert!(page.results.iter().all(|item| item.author.id == b.id));

    // username wins over the subscriptions filter
    let query = format!(
        "filter=subscriptions&username={}&ordering=-pub_date",
        c.username
    );
    let page = feed(&server, &query, Some(&a)).await;
    let expected: Vec<&str> = c_slugs.iter().rev().map(String::as_str).collect();
    assert_eq!(slugs(&page), expected);

    // username needs no authentication
    let page = feed(&server, &format!("username={}", c.username), None).await;
    assert_eq!(page.count, 3);
}

#[tokio::test]
async fn test_feed_unknown_username_is_empty() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let page = feed(&server, "username=nobody_by_this_name_at_all", None).await;

    assert_eq!(page.count, 0);
    assert!(page.results.is_empty());
    assert!(page.next.is_none());
    assert!(page.previous.is_none());
}

#[tokio::test]
async fn test_feed_invalid_page() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();

    for page in ["0", "abc", "-3"] {
        let response = server
            .get(&format!("/api/v1/feed/?page={page}"))
            .await
            .unwrap();
        let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(body.error.code, "INVALID_QUERY_PARAMETER");
    }

    let author = server.create_user("paged").await.unwrap();
    publish(&server, &author).await;
    let response = server
        .get(&format!("/api/v1/feed/?username={}&page=99", author.username))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_feed_activity_ordering() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let author = server.create_user("chef").await.unwrap();
    let fan = server.create_user("fan").await.unwrap();

    let busy = publish(&server, &author).await;
    let quiet = publish(&server, &author).await;
    let talked = publish(&server, &author).await;

    // busy: two reactions and one view
    for (user, emoji) in [(&fan, "like"), (&author, "fire")] {
        let response = server
            .post_auth(
                &format!("/api/v1/recipe/{}/reactions/", busy.slug),
                &user.token,
                &CreateReactionRequest::new(emoji),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }
    let response = server
        .get(&format!("/api/v1/recipe/{}/", busy.slug))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // talked: one comment
    let response = server
        .post_auth(
            &format!("/api/v1/recipe/{}/comment/", talked.slug),
            &fan.token,
            &CreateCommentRequest::new("Lovely"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let query = format!("username={}&ordering=-activity_count", author.username);
    let page = feed(&server, &query, None).await;
    assert_eq!(
        slugs(&page),
        vec![busy.slug.as_str(), talked.slug.as_str(), quiet.slug.as_str()]
    );

    let top = &page.results[0];
    assert_eq!(top.reactions_count, 2);
    assert_eq!(top.views_count, 1);
    assert_eq!(top.comments_count, 0);
    assert_eq!(top.activity_count, 3);

    let query = format!("username={}&ordering=activity_count", author.username);
    let page = feed(&server, &query, None).await;
    assert_eq!(
        slugs(&page),
        vec![quiet.slug.as_str(), talked.slug.as_str(), busy.slug.as_str()]
    );

    // Unknown ordering falls back to newest first
    let query = format!("username={}&ordering=bogus", author.username);
    let page = feed(&server, &query, None).await;
    assert_eq!(page.results[0].slug, talked.slug);
}

#[tokio::test]
async fn test_feed_excludes_withdrawn_reactions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let author = server.create_user("cook").await.unwrap();
    let recipe = publish(&server, &author).await;

    let path = format!("/api/v1/recipe/{}/reactions/", recipe.slug);
    let response = server
        .post_auth(&path, &author.token, &CreateReactionRequest::new("heart"))
        .await
        .unwrap();
    let reaction: ReactionResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(reaction.target_kind, "recipe");

    // Same emoji again is rejected while active
    let response = server
        .post_auth(&path, &author.token, &CreateReactionRequest::new("heart"))
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.error.code, "REACTION_ALREADY_SET");

    let response = server
        .delete_auth(&format!("{path}{}/", reaction.id), &author.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let page = feed(&server, &format!("username={}", author.username), None).await;
    assert_eq!(page.results[0].reactions_count, 0);
    assert_eq!(page.results[0].activity_count, 0);

    let response = server.get(&path).await.unwrap();
    let counts: Vec<ReactionCountResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(counts.is_empty());
}

#[tokio::test]
async fn test_feed_is_favorite_per_viewer() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let author = server.create_user("baker").await.unwrap();
    let fan = server.create_user("taster").await.unwrap();
    let other = server.create_user("stranger").await.unwrap();
    let recipe = publish(&server, &author).await;

    let response = server
        .post_empty_auth(&format!("/api/v1/recipe/{}/favorite/", recipe.slug), &fan.token)
        .await
        .unwrap();
    let body: DetailResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(!body.detail.is_empty());

    let query = format!("username={}", author.username);
    assert!(feed(&server, &query, Some(&fan)).await.results[0].is_favorite);
    assert!(!feed(&server, &query, Some(&other)).await.results[0].is_favorite);
    assert!(!feed(&server, &query, None).await.results[0].is_favorite);

    let response = server
        .get_auth("/api/v1/recipe/favorites/", &fan.token)
        .await
        .unwrap();
    let favorites: PageResponse<RecipeSummaryResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(favorites.count, 1);
    assert_eq!(favorites.results[0].slug, recipe.slug);

    let response = server
        .post_empty_auth(&format!("/api/v1/recipe/{}/favorite/", recipe.slug), &fan.token)
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "ALREADY_FAVORITED");
}

#[tokio::test]
async fn test_feed_pagination_links() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let author = server.create_user("prolific").await.unwrap();
    for _ in 0..7 {
        publish(&server, &author).await;
    }

    let query = format!("username={}&ordering=-pub_date", author.username);
    let first = feed(&server, &query, None).await;
    assert_eq!(first.count, 7);
    assert_eq!(first.results.len(), 6);
    assert!(first.previous.is_none());

    let next = first.next.expect("first page links to the second");
    assert!(next.starts_with(&server.base_url()));
    assert!(next.contains(&format!("username={}", author.username)));
    assert!(next.ends_with("page=2"));

    let second = feed(&server, &format!("{query}&page=2"), None).await;
    assert_eq!(second.results.len(), 1);
    assert!(second.next.is_none());
    let previous = second.previous.expect("second page links back");
    assert!(!previous.contains("page="));
}

// ============================================================================
// Recipe Tests
// ============================================================================

#[tokio::test]
async fn test_recipe_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let owner = server.create_user("owner").await.unwrap();
    let intruder = server.create_user("intruder").await.unwrap();

    let recipe = publish(&server, &owner).await;
    assert_eq!(recipe.author.id, owner.id);
    assert_eq!(recipe.views_count, 0);

    let response = server
        .get_auth(&format!("/api/v1/recipe/{}/", recipe.slug), &intruder.token)
        .await
        .unwrap();
    let detail: RecipeDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.id, recipe.id);
    assert_eq!(detail.views_count, 1);

    let update = UpdateRecipeRequest {
        title: "Renamed soup".to_string(),
    };
    let path = format!("/api/v1/recipe/{}/", recipe.slug);

    let response = server.patch_auth(&path, &intruder.token, &update).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.error.code, "NOT_RECIPE_AUTHOR");

    let response = server.patch_auth(&path, &owner.token, &update).await.unwrap();
    let updated: RecipeUpdateResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.title, "Renamed soup");
    assert_eq!(updated.slug, recipe.slug);

    let response = server.delete_auth(&path, &owner.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&path).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_RECIPE");
}

#[tokio::test]
async fn test_create_recipe_requires_auth_and_valid_body() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = server.create_user("newbie").await.unwrap();

    let response = server
        .client
        .post(format!("{}/api/v1/recipe/", server.base_url()))
        .json(&CreateRecipeRequest::unique())
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let mut request = CreateRecipeRequest::unique();
    request.cooking_time = 5;
    let response = server
        .post_auth("/api/v1/recipe/", &user.token, &request)
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_recipe_ingredients() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let cook = server.create_user("cook").await.unwrap();

    let recipe = publish(&server, &cook).await;
    assert_eq!(recipe.ingredients, vec![Ingredient::new("beet", "pcs", 2)]);

    let mut request = CreateRecipeRequest::unique();
    request.ingredients = vec![Ingredient::new("beet", "pcs", 0)];
    let response = server
        .post_auth("/api/v1/recipe/", &cook.token, &request)
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");

    let mut request = CreateRecipeRequest::unique();
    request.ingredients = vec![
        Ingredient::new("Beet", "pcs", 1),
        Ingredient::new("beet", "g", 100),
    ];
    let response = server
        .post_auth("/api/v1/recipe/", &cook.token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_recipe_title_search() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let cook = server.create_user("searcher").await.unwrap();
    let marker = format!("zq{}", unique_suffix());

    for title in ["Beet Soup", "Onion Soup"] {
        let mut request = CreateRecipeRequest::unique();
        request.title = format!("{title} {marker}");
        let response = server
            .post_auth("/api/v1/recipe/", &cook.token, &request)
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .get(&format!("/api/v1/recipe/?search={marker}"))
        .await
        .unwrap();
    let all: PageResponse<RecipeSummaryResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(all.count, 2);

    let response = server
        .get(&format!("/api/v1/recipe/?search=beet,{}", marker.to_uppercase()))
        .await
        .unwrap();
    let beet: PageResponse<RecipeSummaryResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(beet.count, 1);
    assert!(beet.results[0].title.starts_with("Beet Soup"));

    let response = server
        .get(&format!("/api/v1/recipe/?search={marker}&page=2"))
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "NOT_FOUND");
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comments_and_replies() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let author = server.create_user("writer").await.unwrap();
    let reader = server.create_user("reader").await.unwrap();
    let recipe = publish(&server, &author).await;
    let path = format!("/api/v1/recipe/{}/comment/", recipe.slug);

    let response = server
        .post_auth(&path, &reader.token, &CreateCommentRequest::new("First!"))
        .await
        .unwrap();
    let first: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let reply = CreateCommentRequest {
        text: "Thanks".to_string(),
        parent: Some(first.id.clone()),
    };
    let response = server.post_auth(&path, &author.token, &reply).await.unwrap();
    let second: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(second.parent.as_deref(), Some(first.id.as_str()));

    let response = server.get(&path).await.unwrap();
    let page: PageResponse<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.count, 2);
    assert_eq!(page.results[0].text, "First!");

    // Comment reactions use their own target
    let response = server
        .post_auth(
            &format!("/api/v1/comment/{}/reactions/", first.id),
            &author.token,
            &CreateReactionRequest::new("like"),
        )
        .await
        .unwrap();
    let reaction: ReactionResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(reaction.target_kind, "comment");
    assert_eq!(reaction.emoji, "like");

    // Only the author may delete
    let response = server
        .delete_auth(&format!("{path}{}/", first.id), &author.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete_auth(&format!("{path}{}/", first.id), &reader.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Subscription Tests
// ============================================================================

#[tokio::test]
async fn test_subscriptions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let follower = server.create_user("follower").await.unwrap();
    let author = server.create_user("followed").await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/subscriptions/",
            &follower.token,
            &CreateFollowRequest {
                author: follower.username.clone(),
            },
        )
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "CANNOT_FOLLOW_SELF");

    let follow = CreateFollowRequest {
        author: author.username.clone(),
    };
    let response = server
        .post_auth("/api/v1/subscriptions/", &follower.token, &follow)
        .await
        .unwrap();
    let entry: FollowEntryResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(entry.user.username, author.username);
    assert_eq!(entry.subscribers_count, 1);

    let response = server
        .post_auth("/api/v1/subscriptions/", &follower.token, &follow)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let response = server
        .get_auth(
            &format!("/api/v1/users/{}/followers/", author.username),
            &follower.token,
        )
        .await
        .unwrap();
    let followers: PageResponse<FollowEntryResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(followers.count, 1);
    assert_eq!(followers.results[0].user.id, follower.id);

    let response = server
        .delete_auth(
            &format!("/api/v1/subscriptions/{}/", author.username),
            &follower.token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/v1/subscriptions/{}/", author.username),
            &follower.token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
