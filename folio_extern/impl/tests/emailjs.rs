use std::collections::BTreeMap;

use folio_extern_contracts::emailjs::{EmailJsApiService, EmailJsSendRequest};
use folio_extern_impl::emailjs::{EmailJsApiServiceConfig, EmailJsApiServiceImpl};
use folio_testing::emailjs::{Credentials, FakeEmailJs, SentEmail};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn ok() {
    let (sut, server) = make_sut().await;

    sut.send(make_request("service", "template", "key"))
        .await
        .unwrap();

    assert_eq!(
        server.sent().await,
        [SentEmail {
            service_id: "service".into(),
            template_id: "template".into(),
            template_params: template_params(),
        }]
    );
}

#[tokio::test]
async fn invalid_public_key() {
    let (sut, server) = make_sut().await;

    let result = sut.send(make_request("service", "template", "other")).await;

    let err = result.unwrap_err().to_string();
    assert!(err.contains("400"), "{err}");
    assert!(err.contains("The Public Key is invalid"), "{err}");
    assert!(server.sent().await.is_empty());
}

#[tokio::test]
async fn empty_credentials() {
    let (sut, server) = make_sut().await;

    let result = sut.send(make_request("", "", "")).await;

    assert!(result.is_err());
    assert!(server.sent().await.is_empty());
}

#[tokio::test]
async fn unreachable_endpoint() {
    let server = FakeEmailJs::spawn(credentials()).await.unwrap();
    let mut endpoint = server.send_endpoint().clone();
    endpoint.set_path("/does/not/exist");
    let sut = EmailJsApiServiceImpl::new(EmailJsApiServiceConfig::new(Some(endpoint))).unwrap();

    let result = sut.send(make_request("service", "template", "key")).await;

    assert!(result.is_err());
}

async fn make_sut() -> (EmailJsApiServiceImpl, FakeEmailJs) {
    let server = FakeEmailJs::spawn(credentials()).await.unwrap();
    let config = EmailJsApiServiceConfig::new(Some(server.send_endpoint().clone()));
    let sut = EmailJsApiServiceImpl::new(config).unwrap();
    (sut, server)
}

fn credentials() -> Credentials {
    Credentials {
        service_id: "service".into(),
        template_id: "template".into(),
        public_key: "key".into(),
    }
}

fn make_request(service_id: &str, template_id: &str, public_key: &str) -> EmailJsSendRequest {
    EmailJsSendRequest {
        service_id: service_id.into(),
        template_id: template_id.into(),
        public_key: public_key.into(),
        template_params: template_params(),
    }
}

fn template_params() -> BTreeMap<String, String> {
    [
        ("from_name", "Max Mustermann"),
        ("from_email", "max.mustermann@example.de"),
        ("message", "Hello World! Nice portfolio."),
    ]
    .into_iter()
    .map(|(k, v)| (k.into(), v.into()))
    .collect()
}
