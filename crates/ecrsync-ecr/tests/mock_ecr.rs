//! Mock ECR tests.
//!
//! These tests use wiremock to stand in for the ECR JSON 1.1 endpoint and
//! check request shape, pagination and error mapping without AWS access.

use ecrsync_core::error::Error;
use ecrsync_core::{Cursor, RegistryId, RegistryLister, ServiceUrl, image_pages, repository_pages};
use ecrsync_ecr::{AwsCredentials, EcrClient, EcrRegistry};
use futures_util::TryStreamExt;
use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TARGET_REPOSITORIES: &str = "AmazonEC2ContainerRegistry_V20150921.DescribeRepositories";
const TARGET_IMAGES: &str = "AmazonEC2ContainerRegistry_V20150921.DescribeImages";

fn mock_endpoint(server: &MockServer) -> ServiceUrl {
    ServiceUrl::new(format!("http://127.0.0.1:{}", server.address().port())).unwrap()
}

fn registry(server: &MockServer, session_token: Option<&str>) -> EcrRegistry {
    let credentials = AwsCredentials::new(
        "AKIDEXAMPLE",
        "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
        session_token.map(str::to_string),
    );
    let client = EcrClient::new("us-east-1", Some(mock_endpoint(server)), credentials, None)
        .unwrap();
    EcrRegistry::new(client, Some(RegistryId::new("123456789012").unwrap()))
}

fn repository_json(name: &str) -> serde_json::Value {
    json!({
        "registryId": "123456789012",
        "repositoryName": name,
        "repositoryArn": format!("arn:aws:ecr:us-east-1:123456789012:repository/{}", name),
        "repositoryUri": format!("123456789012.dkr.ecr.us-east-1.amazonaws.com/{}", name),
        "createdAt": 1704067200.0,
        "imageTagMutability": "MUTABLE",
        "imageScanningConfiguration": { "scanOnPush": true }
    })
}

// ============================================================================
// Request Shape
// ============================================================================

#[tokio::test]
async fn test_request_is_signed_json_1_1() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("content-type", "application/x-amz-json-1.1"))
        .and(header("x-amz-target", TARGET_REPOSITORIES))
        .and(header_exists("x-amz-date"))
        .and(header_regex(
            "authorization",
            r"^AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/\d{8}/us-east-1/ecr/aws4_request, SignedHeaders=content-type;host;x-amz-date;x-amz-target, Signature=[0-9a-f]{64}$",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "repositories": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let page = registry(&server, None)
        .list_repositories(None, 999)
        .await
        .unwrap();

    assert!(page.records.is_empty());
    assert!(page.cursor.is_none());
}

#[tokio::test]
async fn test_session_token_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("x-amz-security-token", "temporary-token"))
        .and(header_regex(
            "authorization",
            "SignedHeaders=content-type;host;x-amz-date;x-amz-security-token;x-amz-target,",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "repositories": [] })))
        .expect(1)
        .mount(&server)
        .await;

    registry(&server, Some("temporary-token"))
        .list_repositories(None, 999)
        .await
        .unwrap();
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn test_repository_pages_follow_next_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("x-amz-target", TARGET_REPOSITORIES))
        .and(body_json(json!({ "registryId": "123456789012", "maxResults": 999 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "repositories": [repository_json("app"), repository_json("web")],
            "nextToken": "opaque/token+1=="
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(header("x-amz-target", TARGET_REPOSITORIES))
        .and(body_json(json!({
            "registryId": "123456789012",
            "nextToken": "opaque/token+1==",
            "maxResults": 999
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "repositories": [repository_json("worker")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let registry = registry(&server, None);
    let pages: Vec<_> = repository_pages(&registry).try_collect().await.unwrap();

    let names: Vec<Vec<String>> = pages
        .iter()
        .map(|page| page.iter().map(|r| r.repository_name.clone()).collect())
        .collect();
    assert_eq!(
        names,
        vec![
            vec!["app".to_string(), "web".to_string()],
            vec!["worker".to_string()]
        ]
    );
}

#[tokio::test]
async fn test_empty_next_token_ends_enumeration() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("x-amz-target", TARGET_IMAGES))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "imageDetails": [],
            "nextToken": ""
        })))
        .expect(1)
        .mount(&server)
        .await;

    let registry = registry(&server, None);
    let pages: Vec<_> = image_pages(&registry, "app").try_collect().await.unwrap();
    assert_eq!(pages.len(), 1);
}

#[tokio::test]
async fn test_describe_images_decodes_details() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("x-amz-target", TARGET_IMAGES))
        .and(body_json(json!({
            "registryId": "123456789012",
            "repositoryName": "app",
            "nextToken": "page-2",
            "maxResults": 999
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "imageDetails": [
                {
                    "registryId": "123456789012",
                    "repositoryName": "app",
                    "imageDigest": "sha256:aaa",
                    "imageTags": ["latest", "v1"],
                    "imageSizeInBytes": 1000,
                    "imagePushedAt": 1704153600.5,
                    "imageManifestMediaType": "application/vnd.oci.image.manifest.v1+json",
                    "artifactMediaType": "application/vnd.oci.image.config.v1+json",
                    "lastRecordedPullTime": 1704326400.0
                },
                {
                    "registryId": "123456789012",
                    "repositoryName": "app",
                    "imageDigest": "sha256:bbb",
                    "imageSizeInBytes": 2000,
                    "imagePushedAt": 1704240000
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = registry(&server, None)
        .list_images("app", Some(&Cursor::new("page-2")), 999)
        .await
        .unwrap();

    assert!(page.cursor.is_none());
    assert_eq!(page.records.len(), 2);

    let first = &page.records[0];
    assert_eq!(first.image_digest, "sha256:aaa");
    assert_eq!(first.image_tags, vec!["latest", "v1"]);
    assert_eq!(first.image_pushed_at.timestamp(), 1_704_153_600);
    assert_eq!(
        first.last_recorded_pull_time.map(|t| t.timestamp()),
        Some(1_704_326_400)
    );

    let second = &page.records[1];
    assert!(second.image_tags.is_empty());
    assert!(second.artifact_media_type.is_none());
    assert!(second.last_recorded_pull_time.is_none());
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_service_error_maps_to_protocol_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "__type": "com.amazonaws.ecr#RepositoryNotFoundException",
            "message": "The repository with name 'gone' does not exist"
        })))
        .mount(&server)
        .await;

    let err = registry(&server, None)
        .list_images("gone", None, 999)
        .await
        .unwrap_err();

    match err {
        Error::Protocol(e) => {
            assert_eq!(e.status, 400);
            assert_eq!(e.error.as_deref(), Some("RepositoryNotFoundException"));
            assert!(e.message.unwrap().contains("gone"));
        }
        other => panic!("expected protocol error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_listing_error_ends_stream_with_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "__type": "UnrecognizedClientException",
            "message": "The security token included in the request is invalid."
        })))
        .mount(&server)
        .await;

    let registry = registry(&server, None);
    let result: Result<Vec<_>, Error> = repository_pages(&registry).try_collect().await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("403"));
    assert!(matches!(err, Error::Protocol(ref e) if e.is_auth_error()));
}
