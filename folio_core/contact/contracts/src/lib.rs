use std::future::Future;

use folio_models::contact::{ContactField, ContactFormState, ContactMessage};
use thiserror::Error;

/// The contact form: field values, validation results and submission state.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormService: Send + Sync + 'static {
    /// Return a snapshot of the current form state.
    fn state(&self) -> impl Future<Output = ContactFormState> + Send;

    /// Replace the value of a single input.
    fn set_field(&self, field: ContactField, value: String) -> impl Future<Output = ()> + Send;

    /// Validate the current fields and, if they are valid, deliver them.
    ///
    /// Does nothing while another submission is in flight.
    fn submit(&self) -> impl Future<Output = SubmitOutcome> + Send;

    /// Leave the success view and start over with an empty form.
    fn send_another(&self) -> impl Future<Output = ()> + Send;

    /// Detach the form from its view. Submissions settling afterwards no
    /// longer update the state.
    fn unmount(&self) -> impl Future<Output = ()> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was not in a state that accepts a submission.
    Ignored,
    /// At least one field failed validation, nothing was sent.
    Invalid,
    Delivered,
    Failed,
}

/// Delivers validated contact messages to the site owner.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactDeliveryService: Send + Sync + 'static {
    fn deliver(
        &self,
        message: ContactMessage,
    ) -> impl Future<Output = Result<(), ContactDeliveryError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactDeliveryError {
    #[error("Failed to deliver message.")]
    Delivery(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactDeliveryService {
    pub fn with_deliver(mut self, message: ContactMessage, result: bool) -> Self {
        self.expect_deliver()
            .once()
            .with(mockall::predicate::eq(message))
            .return_once(move |_| {
                Box::pin(std::future::ready(if result {
                    Ok(())
                } else {
                    Err(anyhow::anyhow!("provider rejected the request").into())
                }))
            });
        self
    }
}
