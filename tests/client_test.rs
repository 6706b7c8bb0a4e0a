use anyhow::Result;
use migadu_api::api::requests::{AliasCreate, RewriteUpdate};
use migadu_api::{Error, Migadu};
use mockito::{Matcher, Server};
use serde_json::json;

const AUTH_HEADER: &str = "Basic YWRtaW5AZXhhbXBsZS5vcmc6c2VjcmV0";

fn client(base_url: &str) -> Migadu {
    Migadu::builder()
        .email("admin@example.org")
        .api_key("secret")
        .domain("example.org")
        .base_url(base_url)
        .build()
        .expect("client should build")
}

fn mailbox_fixture(local_part: &str) -> serde_json::Value {
    json!({
        "address": format!("{local_part}@example.org"),
        "local_part": local_part,
        "domain_name": "example.org",
        "name": "Demo User",
        "is_active": true,
        "is_internal": false,
        "expireable": false,
        "expires_on": null,
        "remove_upon_expiry": false,
        "activated_at": "2023-01-01T00:00:00Z",
        "last_login_at": null,
        "changed_at": null,
        "autorespond_active": null,
        "delegations": [],
        "identities": [],
        "forwardings": [],
        "may_send": true,
        "may_receive": true,
        "may_access_imap": true,
        "may_access_pop3": true,
        "may_access_managesieve": false,
        "password_recovery_email": "recovery@elsewhere.test",
        "recipient_denylist": [],
        "sender_allowlist": [],
        "sender_denylist": [],
        "spam_action": "folder",
        "spam_aggressiveness": "default",
        "storage_usage": 0.0,
    })
}

#[tokio::test]
async fn test_mailbox_get_sends_basic_auth() -> Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/domains/example.org/mailboxes/demo")
        .match_header("authorization", AUTH_HEADER)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(mailbox_fixture("demo").to_string())
        .create_async()
        .await;

    let mailbox = client(&server.url()).mailbox().get("demo").await?;
    mock.assert_async().await;
    assert_eq!(mailbox.address, "demo@example.org");
    assert_eq!(mailbox.local_part, "demo");
    Ok(())
}

#[tokio::test]
async fn test_mailbox_get_all_unwraps_collection_object() -> Result<()> {
    let mut server = Server::new_async().await;
    let body = json!({ "mailboxes": [mailbox_fixture("a"), mailbox_fixture("b")] });
    let mock = server
        .mock("GET", "/domains/example.org/mailboxes")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let mailboxes = client(&server.url()).mailbox().get_all().await?;
    mock.assert_async().await;
    assert_eq!(mailboxes.len(), 2);
    assert_eq!(mailboxes[1].local_part, "b");
    Ok(())
}

#[tokio::test]
async fn test_mailbox_get_all_degrades_to_empty_without_key() -> Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/domains/example.org/mailboxes")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let mailboxes = client(&server.url()).mailbox().get_all().await?;
    mock.assert_async().await;
    assert!(mailboxes.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_alias_create_posts_json_body() -> Result<()> {
    let mut server = Server::new_async().await;
    let response = json!({
        "address": "sales@example.org",
        "local_part": "sales",
        "domain_name": "example.org",
        "is_internal": false,
        "destinations": ["demo"],
        "expireable": false,
        "expires_on": null,
        "remove_upon_expiry": false,
    });
    let mock = server
        .mock("POST", "/domains/example.org/aliases")
        .match_header("authorization", AUTH_HEADER)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "local_part": "sales",
            "destinations": ["demo"],
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(response.to_string())
        .create_async()
        .await;

    let payload = AliasCreate::new("sales", vec!["demo".to_string()]);
    let alias = client(&server.url()).alias().create(&payload).await?;
    mock.assert_async().await;
    assert_eq!(alias.address, "sales@example.org");
    assert_eq!(alias.destinations, vec!["demo"]);
    Ok(())
}

#[tokio::test]
async fn test_rewrite_update_puts_partial_payload() -> Result<()> {
    let mut server = Server::new_async().await;
    let response = json!({
        "name": "demo",
        "local_part_rule": "demo-*",
        "order_num": 2,
        "destinations": ["aa", "bb"],
    });
    let mock = server
        .mock("PUT", "/domains/example.org/rewrites/demo")
        .match_body(Matcher::Json(json!({ "order_num": 2 })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(response.to_string())
        .create_async()
        .await;

    let payload = RewriteUpdate {
        order_num: Some(2),
        ..Default::default()
    };
    let rewrite = client(&server.url())
        .rewrite()
        .update("demo", &payload)
        .await?;
    mock.assert_async().await;
    assert_eq!(rewrite.order_num, 2);
    Ok(())
}

#[tokio::test]
async fn test_identity_paths_include_the_owning_mailbox() -> Result<()> {
    let mut server = Server::new_async().await;
    let response = json!({
        "local_part": "support",
        "address": "support@example.org",
        "name": "Support",
        "may_send": true,
        "may_receive": true,
        "may_access_imap": true,
        "may_access_pop3": false,
        "may_access_managesieve": false,
    });
    let mock = server
        .mock(
            "GET",
            "/domains/example.org/mailboxes/demo/identities/support",
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(response.to_string())
        .create_async()
        .await;

    let identity = client(&server.url()).identity().get("demo", "support").await?;
    mock.assert_async().await;
    assert_eq!(identity.address, "support@example.org");
    Ok(())
}

#[tokio::test]
async fn test_forwarding_delete_targets_the_destination_address() -> Result<()> {
    let mut server = Server::new_async().await;
    let response = json!({
        "address": "ext@external.com",
        "blocked_at": null,
        "confirmation_sent_at": null,
        "confirmed_at": null,
        "expires_on": null,
        "is_active": true,
        "remove_upon_expiry": false,
    });
    let mock = server
        .mock(
            "DELETE",
            "/domains/example.org/mailboxes/demo/forwardings/ext@external.com",
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(response.to_string())
        .create_async()
        .await;

    let forwarding = client(&server.url())
        .forwarding()
        .delete("demo", "ext@external.com")
        .await?;
    mock.assert_async().await;
    assert_eq!(forwarding.address, "ext@external.com");
    Ok(())
}

#[tokio::test]
async fn test_server_error_carries_the_api_message() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/domains/example.org/mailboxes/demo")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(json!({ "error": "mailbox storage unavailable" }).to_string())
        .create_async()
        .await;

    let err = client(&server.url())
        .mailbox()
        .get("demo")
        .await
        .unwrap_err();
    match err {
        Error::Api { message, method, .. } => {
            assert_eq!(message, "mailbox storage unavailable");
            assert_eq!(method, "GET");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_bad_request_maps_to_not_found() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/domains/example.org/aliases/ghost")
        .with_status(400)
        .with_body("Not Found")
        .create_async()
        .await;

    let err = client(&server.url()).alias().get("ghost").await.unwrap_err();
    match err {
        Error::NotFound { path, .. } => {
            assert!(path.ends_with("/domains/example.org/aliases/ghost"));
        }
        other => panic!("expected NotFound error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unmodeled_status_is_surfaced_verbatim() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/domains/example.org/rewrites/demo")
        .with_status(418)
        .with_body("teapot")
        .create_async()
        .await;

    let err = client(&server.url())
        .rewrite()
        .get("demo")
        .await
        .unwrap_err();
    match err {
        Error::UnexpectedStatus { status, body } => {
            assert_eq!(status, 418);
            assert_eq!(body, "teapot");
        }
        other => panic!("expected UnexpectedStatus error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_domain_fails_before_any_request() {
    let client = Migadu::builder()
        .email("admin@example.org")
        .api_key("secret")
        .build()
        .expect("client should build without a domain");

    let err = client.mailbox().get_all().await.unwrap_err();
    assert!(matches!(err, Error::MissingPathItem(_)));
}

#[test]
fn test_blank_credentials_are_rejected() {
    assert!(matches!(
        Migadu::builder().email("  ").api_key("secret").build(),
        Err(Error::EmptyArgument("Email")),
    ));
    assert!(matches!(
        Migadu::builder().email("admin@example.org").api_key("").build(),
        Err(Error::EmptyArgument("API key")),
    ));
    assert!(matches!(
        Migadu::new("admin@example.org", "secret"),
        Ok(_),
    ));
}
