use std::{collections::BTreeMap, future::Future};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailJsApiService: Send + Sync + 'static {
    /// Ask EmailJS to render the given template with `template_params` and
    /// deliver the resulting email. Fails if the request could not be sent or
    /// was rejected by EmailJS.
    fn send(&self, request: EmailJsSendRequest) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsSendRequest {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub template_params: BTreeMap<String, String>,
}

#[cfg(feature = "mock")]
impl MockEmailJsApiService {
    pub fn with_send(mut self, request: EmailJsSendRequest, result: bool) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(move |_| {
                Box::pin(std::future::ready(
                    result
                        .then_some(())
                        .ok_or_else(|| anyhow::anyhow!("The Public Key is invalid.")),
                ))
            });
        self
    }
}
