#![allow(clippy::unwrap_used, missing_docs)]

mod common;

use std::io::Read as _;

use common::{MockHttpClient, fast_retry, make_client};
use http::Method;
use skiff_dev::models::{AppCreate, AppPatch, ConfigMapCreate, Field, ProjectCreate};
use skiff_dev::{ClientBuilder, HttpClientError, SkiffError};

#[tokio::test]
async fn get_decodes_a_typed_model() {
    let mock = MockHttpClient::new();
    mock.push_json(
        200,
        r#"{"name":"web","image_reference":"registry.test/web:1","status":"ready"}"#,
    );
    let client = make_client(&mock);

    let app = client.apps("p-1").get("web").await.unwrap();
    assert_eq!(app.name.as_deref(), Some("web"));
    assert_eq!(app.status.as_deref(), Some("ready"));

    let req = mock.request(0);
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.url, "https://api.example.test/projects/p-1/apps/web");
}

#[tokio::test]
async fn missing_fields_decode_as_absent() {
    let mock = MockHttpClient::new();
    mock.push_json(200, r#"{"name":"web"}"#);
    let client = make_client(&mock);

    let app = client.apps("p-1").get("web").await.unwrap();
    assert!(app.status.is_none());
    assert!(app.scale_min_instances.is_none());
}

#[tokio::test]
async fn empty_path_param_fails_before_any_io() {
    let mock = MockHttpClient::new();
    let client = make_client(&mock);

    let err = client.apps("p-1").get("").await.unwrap_err();
    assert!(matches!(err, SkiffError::Validation(_)), "got {err:?}");
    assert_eq!(mock.request_count(), 0, "no request may be sent");
}

#[tokio::test]
async fn bearer_token_is_attached_to_every_request() {
    let mock = MockHttpClient::new();
    mock.push_json(200, r#"{"projects":[]}"#);
    let client = ClientBuilder::new()
        .base_url("https://api.example.test")
        .bearer_token("tok-123")
        .unwrap()
        .build_with(mock.clone())
        .unwrap();

    client.projects().list(&Default::default()).await.unwrap();

    let req = mock.request(0);
    assert_eq!(req.headers["authorization"], "Bearer tok-123");
}

#[tokio::test]
async fn default_user_agent_fills_the_gap() {
    let mock = MockHttpClient::new();
    mock.push_json(200, r#"{"projects":[]}"#);
    let client = make_client(&mock);

    client.projects().list(&Default::default()).await.unwrap();

    let ua = mock.request(0).headers["user-agent"].to_str().unwrap().to_owned();
    assert!(ua.starts_with("skiff-dev-rust/"), "got {ua}");
}

#[tokio::test]
async fn api_error_carries_status_and_parsed_body() {
    let mock = MockHttpClient::new();
    mock.push_json(404, r#"{"code":"not_found","message":"no such app"}"#);
    let client = make_client(&mock);

    let err = client.apps("p-1").get("web").await.unwrap_err();
    let SkiffError::Api {
        status,
        code,
        message,
    } = err
    else {
        panic!("expected an API error, got {err:?}");
    };
    assert_eq!(status, 404);
    assert_eq!(code.as_deref(), Some("not_found"));
    assert_eq!(message, "no such app");
}

#[tokio::test]
async fn unparseable_error_body_still_surfaces_the_status() {
    let mock = MockHttpClient::new();
    mock.push_json(500, "<html>oops</html>");
    let client = make_client(&mock);

    let err = client.apps("p-1").get("web").await.unwrap_err();
    assert!(
        matches!(err, SkiffError::Api { status: 500, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn precondition_failure_maps_to_conflict() {
    let mock = MockHttpClient::new();
    mock.push_json(412, r#"{"code":"stale_tag","message":"entity tag mismatch"}"#);
    let client = make_client(&mock);

    let patch = AppPatch {
        image_reference: Some("registry.test/web:2".to_owned()),
        ..AppPatch::default()
    };
    let err = client
        .apps("p-1")
        .update("web", "v1", &patch)
        .await
        .unwrap_err();
    assert!(
        matches!(err, SkiffError::Conflict { status: 412, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn update_sends_the_if_match_precondition() {
    let mock = MockHttpClient::new();
    mock.push_json(200, r#"{"name":"web"}"#);
    let client = make_client(&mock);

    let patch = AppPatch::default();
    client.apps("p-1").update("web", "v7", &patch).await.unwrap();

    let req = mock.request(0);
    assert_eq!(req.method, Method::PATCH);
    assert_eq!(req.headers["if-match"], "v7");
}

#[tokio::test]
async fn merge_patch_omits_unset_fields() {
    let mock = MockHttpClient::new();
    mock.push_json(200, r#"{"name":"web"}"#);
    let client = make_client(&mock);

    let patch = AppPatch {
        image_reference: Some("registry.test/web:2".to_owned()),
        ..AppPatch::default()
    };
    client.apps("p-1").update("web", "v1", &patch).await.unwrap();

    let body = mock.request(0).body.unwrap();
    assert_eq!(&body[..], br#"{"image_reference":"registry.test/web:2"}"#);
}

#[tokio::test]
async fn merge_patch_sends_explicit_null_to_clear() {
    let mock = MockHttpClient::new();
    mock.push_json(200, r#"{"name":"web"}"#);
    let client = make_client(&mock);

    let patch = AppPatch {
        scale_memory_limit: Field::Null,
        ..AppPatch::default()
    };
    client.apps("p-1").update("web", "v1", &patch).await.unwrap();

    let body = mock.request(0).body.unwrap();
    assert_eq!(&body[..], br#"{"scale_memory_limit":null}"#);
}

#[tokio::test]
async fn delete_returns_unit_on_empty_body() {
    let mock = MockHttpClient::new();
    mock.push_empty(202);
    let client = make_client(&mock);

    client.config_maps("p-1").delete("cm1").await.unwrap();
    assert_eq!(mock.request(0).method, Method::DELETE);
}

#[tokio::test]
async fn wrong_shape_is_a_decode_error_naming_the_field() {
    let mock = MockHttpClient::new();
    mock.push_json(200, r#"{"apps":"nope"}"#);
    let client = make_client(&mock);

    let err = client
        .apps("p-1")
        .list(&Default::default())
        .await
        .unwrap_err();
    let SkiffError::Decode { path, .. } = err else {
        panic!("expected a decode error, got {err:?}");
    };
    assert!(path.contains("apps"), "path should name the field, got {path}");
}

#[tokio::test]
async fn transient_status_is_retried_for_idempotent_methods() {
    let mock = MockHttpClient::new();
    mock.push_json(503, r#"{"message":"try later"}"#);
    mock.push_json(200, r#"{"apps":[]}"#);
    let client = ClientBuilder::new()
        .base_url("https://api.example.test")
        .retry(fast_retry(2))
        .build_with(mock.clone())
        .unwrap();

    let page = client.apps("p-1").list(&Default::default()).await.unwrap();
    assert!(page.apps.is_empty());
    assert_eq!(mock.request_count(), 2, "one retry expected");
}

#[tokio::test]
async fn connection_errors_are_retried() {
    let mock = MockHttpClient::new();
    mock.push_error(HttpClientError::Connection("reset by peer".to_owned()));
    mock.push_json(200, r#"{"apps":[]}"#);
    let client = ClientBuilder::new()
        .base_url("https://api.example.test")
        .retry(fast_retry(2))
        .build_with(mock.clone())
        .unwrap();

    client.apps("p-1").list(&Default::default()).await.unwrap();
    assert_eq!(mock.request_count(), 2);
}

#[tokio::test]
async fn post_is_not_retried_under_the_default_policy() {
    let mock = MockHttpClient::new();
    mock.push_json(503, r#"{"message":"try later"}"#);
    let client = ClientBuilder::new()
        .base_url("https://api.example.test")
        .retry(fast_retry(2))
        .build_with(mock.clone())
        .unwrap();

    let req = ProjectCreate {
        name: "p".to_owned(),
        region: None,
        tags: None,
    };
    let err = client.projects().create(&req).await.unwrap_err();
    assert!(matches!(err, SkiffError::Api { status: 503, .. }));
    assert_eq!(mock.request_count(), 1, "a create must not be replayed");
}

#[tokio::test]
async fn non_transient_status_is_not_retried() {
    let mock = MockHttpClient::new();
    mock.push_json(400, r#"{"message":"bad"}"#);
    let client = ClientBuilder::new()
        .base_url("https://api.example.test")
        .retry(fast_retry(2))
        .build_with(mock.clone())
        .unwrap();

    let err = client
        .apps("p-1")
        .list(&Default::default())
        .await
        .unwrap_err();
    assert!(matches!(err, SkiffError::Api { status: 400, .. }));
    assert_eq!(mock.request_count(), 1);
}

#[tokio::test]
async fn retry_budget_exhaustion_surfaces_the_last_error() {
    let mock = MockHttpClient::new();
    mock.push_json(503, r#"{"message":"one"}"#);
    mock.push_json(503, r#"{"message":"two"}"#);
    let client = ClientBuilder::new()
        .base_url("https://api.example.test")
        .retry(fast_retry(1))
        .build_with(mock.clone())
        .unwrap();

    let err = client
        .apps("p-1")
        .list(&Default::default())
        .await
        .unwrap_err();
    let SkiffError::Api { message, .. } = err else {
        panic!("expected an API error, got {err:?}");
    };
    assert_eq!(message, "two");
    assert_eq!(mock.request_count(), 2);
}

#[tokio::test]
async fn timeout_is_cancellation_and_never_retried() {
    let mock = MockHttpClient::new();
    mock.push_error(HttpClientError::Timeout);
    let client = ClientBuilder::new()
        .base_url("https://api.example.test")
        .retry(fast_retry(3))
        .build_with(mock.clone())
        .unwrap();

    let err = client
        .apps("p-1")
        .list(&Default::default())
        .await
        .unwrap_err();
    assert!(matches!(err, SkiffError::Cancelled), "got {err:?}");
    assert_eq!(mock.request_count(), 1, "cancellation ends the call");
}

#[tokio::test]
async fn gzip_compresses_the_outgoing_body() {
    let mock = MockHttpClient::new();
    mock.push_json(200, r#"{"name":"web"}"#);
    let client = ClientBuilder::new()
        .base_url("https://api.example.test")
        .enable_gzip(true)
        .build_with(mock.clone())
        .unwrap();

    let req = AppCreate {
        name: "web".to_owned(),
        image_reference: "registry.test/web:1".to_owned(),
        image_port: None,
        scale_min_instances: None,
        scale_max_instances: None,
        scale_cpu_limit: None,
        scale_memory_limit: None,
        run_env_variables: None,
    };
    client.apps("p-1").create(&req).await.unwrap();

    let sent = mock.request(0);
    assert_eq!(sent.headers["content-encoding"], "gzip");

    let body = sent.body.unwrap();
    let mut decoder = flate2::read::GzDecoder::new(&body[..]);
    let mut plain = String::new();
    decoder.read_to_string(&mut plain).unwrap();
    assert_eq!(plain, serde_json::to_string(&req).unwrap());
}

#[tokio::test]
async fn invalid_base_url_is_rejected_at_build_time() {
    let mock = MockHttpClient::new();
    let err = ClientBuilder::new()
        .base_url("not a url")
        .build_with(mock.clone())
        .unwrap_err();
    assert!(matches!(err, SkiffError::Validation(_)), "got {err:?}");
}

#[tokio::test]
async fn replace_sends_put_with_the_full_payload() {
    let mock = MockHttpClient::new();
    mock.push_json(200, r#"{"name":"cm1"}"#);
    let client = make_client(&mock);

    let req = ConfigMapCreate {
        name: "cm1".to_owned(),
        data: Some([("k".to_owned(), "v".to_owned())].into()),
    };
    client
        .config_maps("p-1")
        .replace("cm1", "v3", &req)
        .await
        .unwrap();

    let sent = mock.request(0);
    assert_eq!(sent.method, Method::PUT);
    assert_eq!(sent.headers["if-match"], "v3");
    assert_eq!(
        sent.url,
        "https://api.example.test/projects/p-1/configmaps/cm1"
    );
}
