use folio_core_contact_contracts::{ContactDeliveryService, ContactFormService, SubmitOutcome};
use folio_i18n_contracts::Translator;
use folio_models::{
    contact::{ContactField, ContactFormState, SubmissionStatus},
    i18n::ContactKey,
};
use tokio::sync::Mutex;
use tracing::debug;

use crate::schema;

pub struct ContactFormServiceImpl<Delivery, I18n> {
    delivery: Delivery,
    translator: I18n,
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    form: ContactFormState,
    unmounted: bool,
}

impl<Delivery, I18n> ContactFormServiceImpl<Delivery, I18n>
where
    I18n: Translator,
{
    pub fn new(delivery: Delivery, translator: I18n) -> Self {
        Self {
            delivery,
            translator,
            state: Default::default(),
        }
    }

    pub fn translator(&self) -> &I18n {
        &self.translator
    }
}

impl<Delivery, I18n> ContactFormService for ContactFormServiceImpl<Delivery, I18n>
where
    Delivery: ContactDeliveryService,
    I18n: Translator,
{
    async fn state(&self) -> ContactFormState {
        self.state.lock().await.form.clone()
    }

    async fn set_field(&self, field: ContactField, value: String) {
        self.state.lock().await.form.fields.set(field, value);
    }

    async fn submit(&self) -> SubmitOutcome {
        let fields = {
            let mut state = self.state.lock().await;
            if state.unmounted || state.form.status != SubmissionStatus::Idle {
                debug!(status = ?state.form.status, unmounted = state.unmounted, "ignoring submit");
                return SubmitOutcome::Ignored;
            }

            state.form.errors = Default::default();
            state.form.api_error = None;
            state.form.status = SubmissionStatus::Submitting;
            state.form.fields.clone()
        };

        let message = match schema::validate(&fields, &self.translator) {
            Ok(message) => message,
            Err(errors) => {
                debug!(invalid_fields = errors.len(), "contact form validation failed");
                let mut state = self.state.lock().await;
                state.form.errors = errors;
                state.form.status = SubmissionStatus::Idle;
                return SubmitOutcome::Invalid;
            }
        };

        // The lock is released while the request is in flight, the status
        // flag alone keeps other submits out.
        let result = self.delivery.deliver(message).await;

        let mut state = self.state.lock().await;
        if state.unmounted {
            debug!("discarding submission result of unmounted contact form");
            return match result {
                Ok(()) => SubmitOutcome::Delivered,
                Err(_) => SubmitOutcome::Failed,
            };
        }

        match result {
            Ok(()) => {
                state.form.fields = Default::default();
                state.form.status = SubmissionStatus::Success;
                SubmitOutcome::Delivered
            }
            Err(_) => {
                state.form.api_error = Some(self.translator.translate(ContactKey::ErrApiFailed));
                state.form.status = SubmissionStatus::Idle;
                SubmitOutcome::Failed
            }
        }
    }

    async fn send_another(&self) {
        let mut state = self.state.lock().await;
        if state.form.status == SubmissionStatus::Success {
            state.form = Default::default();
        }
    }

    async fn unmount(&self) {
        self.state.lock().await.unmounted = true;
    }
}
