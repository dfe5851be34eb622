//! PostgreSQL repository tests.
//!
//! Each test gets a fresh database with `./migrations` applied; `DATABASE_URL`
//! must point at a PostgreSQL server.

use shorturl::domain::repositories::UrlRepository;
use shorturl::infrastructure::persistence::PgUrlRepository;
use sqlx::PgPool;
use std::collections::HashSet;
use std::sync::Arc;

#[sqlx::test]
async fn test_insert_if_absent(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let mapping = repo.insert_if_absent("https://example.com").await.unwrap();

    assert_eq!(mapping.short_id, 1);
    assert_eq!(mapping.original_url, "https://example.com");
}

#[sqlx::test]
async fn test_insert_if_absent_is_idempotent(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let first = repo.insert_if_absent("https://example.com").await.unwrap();
    let second = repo.insert_if_absent("https://example.com").await.unwrap();

    assert_eq!(first.short_id, second.short_id);
    assert_eq!(first.created_at, second.created_at);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[sqlx::test]
async fn test_trailing_slash_is_a_different_url(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let bare = repo.insert_if_absent("https://example.com").await.unwrap();
    let slashed = repo.insert_if_absent("https://example.com/").await.unwrap();

    assert_ne!(bare.short_id, slashed.short_id);
}

#[sqlx::test]
async fn test_find_by_short_id(pool: PgPool) {
    sqlx::query("INSERT INTO url_mappings (original_url) VALUES ($1)")
        .bind("https://freecodecamp.org")
        .execute(&pool)
        .await
        .unwrap();

    let repo = PgUrlRepository::new(Arc::new(pool));
    let result = repo.find_by_short_id(1).await;

    assert!(result.is_ok());
    let mapping = result.unwrap();
    assert!(mapping.is_some());
    assert_eq!(mapping.unwrap().original_url, "https://freecodecamp.org");
}

#[sqlx::test]
async fn test_find_by_short_id_not_found(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let result = repo.find_by_short_id(9999).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_by_original_url(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let created = repo.insert_if_absent("https://rust-lang.org").await.unwrap();

    let found = repo
        .find_by_original_url("https://rust-lang.org")
        .await
        .unwrap();
    let missing = repo
        .find_by_original_url("https://rust-lang.org/")
        .await
        .unwrap();

    assert_eq!(found, Some(created));
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_count_and_ping(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
    assert_eq!(repo.count().await.unwrap(), 0);

    for url in ["https://a.example.com", "https://b.example.com"] {
        repo.insert_if_absent(url).await.unwrap();
    }

    assert_eq!(repo.count().await.unwrap(), 2);
}

#[sqlx::test]
async fn test_concurrent_inserts(pool: PgPool) {
    let repo = Arc::new(PgUrlRepository::new(Arc::new(pool)));
    let mut tasks = tokio::task::JoinSet::new();

    for i in 0..20 {
        let repo = repo.clone();
        tasks.spawn(async move {
            // two requests per url race each other
            let url = format!("https://example.com/{}", i / 2);
            repo.insert_if_absent(&url).await.unwrap()
        });
    }

    let mut by_url = std::collections::HashMap::new();
    while let Some(result) = tasks.join_next().await {
        let mapping = result.unwrap();
        let previous = by_url.insert(mapping.original_url.clone(), mapping.short_id);
        if let Some(previous) = previous {
            assert_eq!(previous, mapping.short_id);
        }
    }

    let ids: HashSet<i64> = by_url.values().copied().collect();
    assert_eq!(by_url.len(), 10);
    assert_eq!(ids.len(), 10);
    assert_eq!(repo.count().await.unwrap(), 10);
}
