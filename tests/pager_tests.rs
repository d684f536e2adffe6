#![allow(clippy::unwrap_used, missing_docs)]

mod common;

use common::{MockHttpClient, make_client};
use skiff_dev::SkiffError;
use skiff_dev::models::ListParams;

#[tokio::test]
async fn get_all_drains_three_pages_in_order() {
    let mock = MockHttpClient::new();
    mock.push_json(
        200,
        r#"{"apps":[{"name":"a1"},{"name":"a2"}],"next":{"start":"t1"}}"#,
    );
    mock.push_json(
        200,
        r#"{"apps":[{"name":"a3"},{"name":"a4"}],"next":{"start":"t2"}}"#,
    );
    mock.push_json(200, r#"{"apps":[{"name":"a5"}]}"#);
    let client = make_client(&mock);

    let mut pager = client.apps("p-1").list_all(&ListParams::default()).unwrap();
    let apps = pager.get_all().await.unwrap();

    let names: Vec<_> = apps.iter().filter_map(|a| a.name.as_deref()).collect();
    assert_eq!(names, ["a1", "a2", "a3", "a4", "a5"]);
    assert!(!pager.has_next(), "pager must be exhausted after get_all");
    assert_eq!(mock.request_count(), 3);

    let urls = mock.urls();
    assert!(!urls[0].contains("start="), "first page has no cursor");
    assert!(urls[1].ends_with("start=t1"));
    assert!(urls[2].ends_with("start=t2"));
}

#[tokio::test]
async fn configmaps_two_page_scenario() {
    let mock = MockHttpClient::new();
    mock.push_json(
        200,
        r#"{"configmaps":[{"name":"cm1"}],"next":{"start":"tok1"}}"#,
    );
    mock.push_json(200, r#"{"configmaps":[{"name":"cm2"}]}"#);
    let client = make_client(&mock);

    let mut pager = client
        .config_maps("abc")
        .list_all(&ListParams::with_limit(1))
        .unwrap();
    let maps = pager.get_all().await.unwrap();

    let names: Vec<_> = maps.iter().filter_map(|m| m.name.as_deref()).collect();
    assert_eq!(names, ["cm1", "cm2"]);

    let urls = mock.urls();
    assert_eq!(
        urls[0],
        "https://api.example.test/projects/abc/configmaps?limit=1"
    );
    assert_eq!(
        urls[1],
        "https://api.example.test/projects/abc/configmaps?limit=1&start=tok1"
    );
}

#[tokio::test]
async fn get_next_fetches_exactly_one_page() {
    let mock = MockHttpClient::new();
    mock.push_json(200, r#"{"apps":[{"name":"a1"}],"next":{"start":"t1"}}"#);
    mock.push_json(200, r#"{"apps":[{"name":"a2"}]}"#);
    let client = make_client(&mock);

    let mut pager = client.apps("p-1").list_all(&ListParams::default()).unwrap();

    assert!(pager.has_next());
    let first = pager.get_next().await.unwrap();
    assert_eq!(first.len(), 1);
    assert!(pager.has_next(), "a continuation token means more pages");
    assert_eq!(mock.request_count(), 1);

    let second = pager.get_next().await.unwrap();
    assert_eq!(second.len(), 1);
    assert!(!pager.has_next());
    assert_eq!(mock.request_count(), 2);
}

#[tokio::test]
async fn empty_next_start_ends_iteration() {
    let mock = MockHttpClient::new();
    mock.push_json(200, r#"{"apps":[{"name":"a1"}],"next":{"href":"/more"}}"#);
    let client = make_client(&mock);

    let mut pager = client.apps("p-1").list_all(&ListParams::default()).unwrap();
    pager.get_next().await.unwrap();
    assert!(
        !pager.has_next(),
        "a next block without a start token is the final page"
    );
}

#[tokio::test]
async fn get_next_after_exhaustion_is_an_error_without_io() {
    let mock = MockHttpClient::new();
    mock.push_json(200, r#"{"apps":[]}"#);
    let client = make_client(&mock);

    let mut pager = client.apps("p-1").list_all(&ListParams::default()).unwrap();
    pager.get_next().await.unwrap();

    let err = pager.get_next().await.unwrap_err();
    assert!(matches!(err, SkiffError::Validation(_)), "got {err:?}");
    assert_eq!(mock.request_count(), 1, "no further fetch may happen");
}

#[tokio::test]
async fn a_failed_fetch_is_terminal() {
    let mock = MockHttpClient::new();
    mock.push_json(200, r#"{"apps":[{"name":"a1"}],"next":{"start":"t1"}}"#);
    mock.push_json(503, r#"{"message":"backend unavailable"}"#);
    let client = make_client(&mock);

    let mut pager = client.apps("p-1").list_all(&ListParams::default()).unwrap();
    pager.get_next().await.unwrap();

    let err = pager.get_next().await.unwrap_err();
    assert!(matches!(err, SkiffError::Api { status: 503, .. }), "got {err:?}");
    assert!(!pager.has_next(), "a failed pager expects no more pages");

    // The terminal error repeats without touching the network.
    let err = pager.get_next().await.unwrap_err();
    let SkiffError::Validation(message) = err else {
        panic!("expected a terminal-state error");
    };
    assert!(message.contains("backend unavailable"), "got {message}");
    assert_eq!(mock.request_count(), 2);
}

#[tokio::test]
async fn get_all_is_all_or_nothing() {
    let mock = MockHttpClient::new();
    mock.push_json(200, r#"{"apps":[{"name":"a1"}],"next":{"start":"t1"}}"#);
    mock.push_json(500, r#"{"message":"boom"}"#);
    let client = make_client(&mock);

    let mut pager = client.apps("p-1").list_all(&ListParams::default()).unwrap();
    let err = pager.get_all().await.unwrap_err();
    assert!(matches!(err, SkiffError::Api { status: 500, .. }), "got {err:?}");
}

#[tokio::test]
async fn prefilled_cursor_is_rejected_at_construction() {
    let mock = MockHttpClient::new();
    let client = make_client(&mock);

    let params = ListParams {
        limit: Some(10),
        start: Some("tok".to_owned()),
    };
    let err = client.apps("p-1").list_all(&params).unwrap_err();
    assert!(matches!(err, SkiffError::Validation(_)), "got {err:?}");
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn zero_limit_is_rejected_at_construction() {
    let mock = MockHttpClient::new();
    let client = make_client(&mock);

    let err = client
        .apps("p-1")
        .list_all(&ListParams::with_limit(0))
        .unwrap_err();
    assert!(matches!(err, SkiffError::Validation(_)), "got {err:?}");
}

#[tokio::test]
async fn pager_filters_are_snapshotted_into_every_page() {
    let mock = MockHttpClient::new();
    mock.push_json(
        200,
        r#"{"job_runs":[{"name":"r1"}],"next":{"start":"t1"}}"#,
    );
    mock.push_json(200, r#"{"job_runs":[{"name":"r2"}]}"#);
    let client = make_client(&mock);

    let mut pager = client
        .job_runs("p-1")
        .list_all(&ListParams::default(), Some("nightly"))
        .unwrap();
    let runs = pager.get_all().await.unwrap();
    assert_eq!(runs.len(), 2);

    for url in mock.urls() {
        assert!(url.contains("job_name=nightly"), "got {url}");
    }
}

#[tokio::test]
async fn caller_driven_paging_passes_start_through() {
    let mock = MockHttpClient::new();
    mock.push_json(200, r#"{"apps":[],"limit":5}"#);
    let client = make_client(&mock);

    let params = ListParams {
        limit: Some(5),
        start: Some("tok9".to_owned()),
    };
    client.apps("p-1").list(&params).await.unwrap();

    assert_eq!(
        mock.urls()[0],
        "https://api.example.test/projects/p-1/apps?limit=5&start=tok9"
    );
}

#[tokio::test]
async fn fresh_pager_reiterates_from_the_start() {
    let mock = MockHttpClient::new();
    mock.push_json(200, r#"{"apps":[{"name":"a1"}]}"#);
    mock.push_json(200, r#"{"apps":[{"name":"a1"}]}"#);
    let client = make_client(&mock);

    let params = ListParams::default();
    let apps = client.apps("p-1");

    let first = apps.list_all(&params).unwrap().get_all().await.unwrap();
    let second = apps.list_all(&params).unwrap().get_all().await.unwrap();
    assert_eq!(first.len(), second.len());

    let urls = mock.urls();
    assert_eq!(urls[0], urls[1], "both iterations start from page one");
}
