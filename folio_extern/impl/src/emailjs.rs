use std::{collections::BTreeMap, sync::Arc};

use anyhow::{bail, Context};
use folio_extern_contracts::emailjs::{EmailJsApiService, EmailJsSendRequest};
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::http::HttpClient;

/// https://www.emailjs.com/docs/rest-api/send/
const SEND_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone)]
pub struct EmailJsApiServiceImpl {
    config: EmailJsApiServiceConfig,
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct EmailJsApiServiceConfig {
    send_endpoint: Arc<Url>,
}

impl EmailJsApiServiceConfig {
    pub fn new(send_endpoint_override: Option<Url>) -> Self {
        Self {
            send_endpoint: send_endpoint_override
                .unwrap_or_else(|| SEND_ENDPOINT.parse().unwrap())
                .into(),
        }
    }

    pub fn send_endpoint(&self) -> &Url {
        &self.send_endpoint
    }
}

impl EmailJsApiServiceImpl {
    pub fn new(config: EmailJsApiServiceConfig) -> anyhow::Result<Self> {
        Ok(Self {
            config,
            http: HttpClient::new()?,
        })
    }
}

impl EmailJsApiService for EmailJsApiServiceImpl {
    async fn send(&self, request: EmailJsSendRequest) -> anyhow::Result<()> {
        let body = SendRequest {
            service_id: &request.service_id,
            template_id: &request.template_id,
            user_id: &request.public_key,
            template_params: &request.template_params,
        };

        debug!(
            endpoint = %self.config.send_endpoint,
            service_id = %request.service_id,
            template_id = %request.template_id,
            "sending emailjs request"
        );

        let response = self
            .http
            .post((*self.config.send_endpoint).clone())
            .json(&body)
            .send()
            .await
            .context("Failed to send emailjs request")?;

        let status = response.status();
        if !status.is_success() {
            let reason = response.text().await.unwrap_or_default();
            bail!("EmailJS rejected the request with status {status}: {reason}");
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a BTreeMap<String, String>,
}
