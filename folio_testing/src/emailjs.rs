use std::{
    collections::BTreeMap,
    net::{IpAddr, Ipv4Addr},
    sync::Arc,
};

use anyhow::Context;
use axum::{extract::State, http::StatusCode, routing, Json, Router};
use serde::Deserialize;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{error, info};
use url::Url;

pub const SEND_ROUTE: &str = "/api/v1.0/email/send";

/// The only credentials the testing server accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// An email the testing server accepted for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub service_id: String,
    pub template_id: String,
    pub template_params: BTreeMap<String, String>,
}

pub async fn start_server(host: IpAddr, port: u16, credentials: Credentials) -> anyhow::Result<()> {
    info!("Starting emailjs testing server on {host}:{port}");
    info!("EmailJS send endpoint: http://{host}:{port}{SEND_ROUTE}");
    info!(
        "Accepted credentials: service_id={:?} template_id={:?} public_key={:?}",
        credentials.service_id, credentials.template_id, credentials.public_key
    );

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(Arc::new(StateInner::new(credentials))))
        .await
        .context("Failed to start HTTP server")
}

/// Handle to a testing server running in the background on a random local
/// port.
#[derive(Debug, Clone)]
pub struct FakeEmailJs {
    send_endpoint: Url,
    state: Arc<StateInner>,
}

impl FakeEmailJs {
    pub async fn spawn(credentials: Credentials) -> anyhow::Result<Self> {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
            .await
            .context("Failed to bind to a local port")?;
        let addr = listener.local_addr()?;
        let send_endpoint = format!("http://{addr}{SEND_ROUTE}").parse()?;
        let state = Arc::new(StateInner::new(credentials));

        let router = router(Arc::clone(&state));
        tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, router).await {
                error!("EmailJS testing server on {addr} stopped: {err}");
            }
        });

        Ok(Self {
            send_endpoint,
            state,
        })
    }

    pub fn send_endpoint(&self) -> &Url {
        &self.send_endpoint
    }

    pub async fn sent(&self) -> Vec<SentEmail> {
        self.state.sent.read().await.clone()
    }
}

fn router(state: Arc<StateInner>) -> Router {
    Router::new()
        .route(SEND_ROUTE, routing::post(send))
        .with_state(state)
}

#[derive(Debug)]
struct StateInner {
    credentials: Credentials,
    sent: RwLock<Vec<SentEmail>>,
}

impl StateInner {
    fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            sent: Default::default(),
        }
    }
}

#[derive(Deserialize)]
struct SendRequest {
    service_id: String,
    template_id: String,
    user_id: String,
    #[serde(default)]
    template_params: BTreeMap<String, String>,
}

async fn send(
    State(state): State<Arc<StateInner>>,
    Json(request): Json<SendRequest>,
) -> (StatusCode, &'static str) {
    let credentials = &state.credentials;
    if request.user_id.is_empty() {
        return (StatusCode::BAD_REQUEST, "The Public Key is required");
    }
    if request.user_id != credentials.public_key {
        return (StatusCode::BAD_REQUEST, "The Public Key is invalid");
    }
    if request.service_id != credentials.service_id {
        return (StatusCode::BAD_REQUEST, "The service ID is invalid");
    }
    if request.template_id != credentials.template_id {
        return (StatusCode::BAD_REQUEST, "The template ID not found");
    }

    info!(params = ?request.template_params, "accepted email");
    state.sent.write().await.push(SentEmail {
        service_id: request.service_id,
        template_id: request.template_id,
        template_params: request.template_params,
    });

    (StatusCode::OK, "OK")
}
