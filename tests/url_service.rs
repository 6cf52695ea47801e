//! End-to-end tests of the URL service against the in-process backends.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use snaplink::error::AppError;
use snaplink::infrastructure::persistence::MemoryUrlRepository;
use snaplink::infrastructure::storage::MemoryBlobStore;
use snaplink::prelude::*;
use snaplink::utils::qr;

const BASE_URL: &str = "https://store.test";

fn service() -> (
    UrlService<MemoryUrlRepository, MemoryBlobStore>,
    Arc<MemoryUrlRepository>,
    Arc<MemoryBlobStore>,
) {
    let repo = Arc::new(MemoryUrlRepository::new());
    let blobs = Arc::new(MemoryBlobStore::new(BASE_URL));
    (UrlService::new(repo.clone(), blobs.clone()), repo, blobs)
}

fn seeded_record(
    id: i64,
    short_url: &str,
    custom_url: Option<&str>,
    user_id: &str,
    created_at: DateTime<Utc>,
) -> UrlRecord {
    UrlRecord::new(
        id,
        format!("Row {id}"),
        format!("https://example.com/{id}"),
        short_url.to_string(),
        custom_url.map(str::to_string),
        format!("https://store.test/storage/v1/object/public/qrs/qr-{short_url}"),
        user_id.to_string(),
        created_at,
    )
}

fn new_url(title: &str, user_id: &str, custom_url: Option<&str>) -> NewUrl {
    NewUrl {
        title: title.to_string(),
        long_url: "https://example.com/some/long/path".to_string(),
        custom_url: custom_url.map(str::to_string),
        user_id: user_id.to_string(),
    }
}

#[tokio::test]
async fn create_stores_row_and_blob() {
    let (service, _repo, blobs) = service();

    let qr_png = qr::generate_png("https://s.test/pending").unwrap();
    let record = service
        .create_url(new_url("Docs", "user-1", None), qr_png.clone())
        .await
        .unwrap();

    assert_eq!(record.short_url.len(), 4);
    assert_eq!(
        record.qr,
        format!(
            "{BASE_URL}/storage/v1/object/public/qrs/qr-{}",
            record.short_url
        )
    );

    let stored = blobs.get(&format!("qr-{}", record.short_url)).unwrap();
    assert_eq!(stored, qr_png);
}

#[tokio::test]
async fn list_returns_only_the_owners_urls_newest_first() {
    let (service, _repo, _blobs) = service();

    let first = service
        .create_url(new_url("One", "user-1", None), vec![0])
        .await
        .unwrap();
    let second = service
        .create_url(new_url("Two", "user-1", None), vec![0])
        .await
        .unwrap();
    service
        .create_url(new_url("Other", "user-2", None), vec![0])
        .await
        .unwrap();

    let urls = service.list_urls("user-1").await.unwrap();

    assert_eq!(urls.len(), 2);
    assert_eq!(urls[0].id, second.id);
    assert_eq!(urls[1].id, first.id);
}

#[tokio::test]
async fn list_orders_by_created_at_descending_not_insertion() {
    let (service, repo, _blobs) = service();

    let now = Utc::now();
    repo.seed(seeded_record(1, "aaaa", None, "user-1", now - Duration::hours(2)));
    repo.seed(seeded_record(2, "bbbb", None, "user-1", now));
    repo.seed(seeded_record(3, "cccc", None, "user-1", now - Duration::hours(1)));

    let urls = service.list_urls("user-1").await.unwrap();

    let ids: Vec<i64> = urls.iter().map(|u| u.id).collect();
    assert_eq!(ids, [2, 3, 1]);
}

#[tokio::test]
async fn resolve_matches_short_code() {
    let (service, _repo, _blobs) = service();

    let record = service
        .create_url(new_url("Docs", "user-1", None), vec![0])
        .await
        .unwrap();

    let resolved = service.resolve(&record.short_url).await.unwrap();
    assert_eq!(resolved.id, record.id);
    assert_eq!(resolved.original_url, record.original_url);
}

#[tokio::test]
async fn resolve_matches_custom_alias() {
    let (service, _repo, _blobs) = service();

    let record = service
        .create_url(new_url("Docs", "user-1", Some("my-docs")), vec![0])
        .await
        .unwrap();

    let resolved = service.resolve("my-docs").await.unwrap();
    assert_eq!(resolved.id, record.id);
}

#[tokio::test]
async fn resolve_with_code_matching_two_rows_fails_with_fetch_error() {
    let (service, repo, _blobs) = service();

    // The hosted store can hold one row whose short code equals another
    // row's custom alias; resolution must then refuse rather than pick one.
    let now = Utc::now();
    repo.seed(seeded_record(1, "x9k2", None, "user-1", now));
    repo.seed(seeded_record(2, "zz9q", Some("x9k2"), "user-2", now));

    assert_eq!(
        service.resolve("x9k2").await.unwrap_err(),
        AppError::FetchShortLink
    );

    // Each row stays reachable through its unambiguous code.
    assert_eq!(service.resolve("zz9q").await.unwrap().id, 2);
}

#[tokio::test]
async fn resolve_unknown_code_fails_with_fetch_error() {
    let (service, _repo, _blobs) = service();

    let result = service.resolve("nope").await;
    assert_eq!(result.unwrap_err(), AppError::FetchShortLink);
}

#[tokio::test]
async fn get_url_enforces_ownership() {
    let (service, _repo, _blobs) = service();

    let record = service
        .create_url(new_url("Docs", "user-1", None), vec![0])
        .await
        .unwrap();

    let owned = service.get_url(record.id, "user-1").await.unwrap();
    assert_eq!(owned.id, record.id);

    let result = service.get_url(record.id, "user-2").await;
    assert_eq!(result.unwrap_err(), AppError::UrlNotFound);
}

#[tokio::test]
async fn delete_removes_the_row() {
    let (service, _repo, _blobs) = service();

    let record = service
        .create_url(new_url("Docs", "user-1", None), vec![0])
        .await
        .unwrap();

    service.delete_url(record.id).await.unwrap();

    assert!(service.list_urls("user-1").await.unwrap().is_empty());
    assert_eq!(
        service.resolve(&record.short_url).await.unwrap_err(),
        AppError::FetchShortLink
    );
}

#[tokio::test]
async fn duplicate_custom_alias_is_rejected_before_upload() {
    let (service, _repo, blobs) = service();

    service
        .create_url(new_url("Docs", "user-1", Some("my-docs")), vec![0])
        .await
        .unwrap();
    let blobs_before = blobs.len();

    let result = service
        .create_url(new_url("Again", "user-2", Some("my-docs")), vec![0])
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
    assert_eq!(blobs.len(), blobs_before);
}

#[tokio::test]
async fn repository_rejects_code_collision_on_insert() {
    let (_service, repo, _blobs) = service();

    repo.insert(
        new_url("Docs", "user-1", None),
        "ab3x".to_string(),
        "qr".to_string(),
    )
    .await
    .unwrap();

    let result = repo
        .insert(
            new_url("Clash", "user-2", None),
            "ab3x".to_string(),
            "qr".to_string(),
        )
        .await;

    assert_eq!(result.unwrap_err(), AppError::CreateUrl);
}

#[tokio::test]
async fn short_code_probe_sees_both_columns() {
    let (service, repo, _blobs) = service();

    let record = service
        .create_url(new_url("Docs", "user-1", Some("my-docs")), vec![0])
        .await
        .unwrap();

    assert!(repo.short_code_exists(&record.short_url).await.unwrap());
    assert!(repo.short_code_exists("my-docs").await.unwrap());
    assert!(!repo.short_code_exists("free").await.unwrap());
}
