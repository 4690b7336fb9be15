use std::future::Future;

use folio_core_contact_contracts::{
    ContactDeliveryError, ContactFormService, MockContactDeliveryService,
};
use folio_i18n_contracts::MockTranslator;
use folio_models::{
    contact::{
        ContactField, ContactFormFields, ContactMessage, ContactMessageAuthor, SubmissionStatus,
    },
    i18n::Locale,
};
use tokio::sync::oneshot;

use crate::ContactFormServiceImpl;

mod send_another;

type Sut = ContactFormServiceImpl<MockContactDeliveryService, MockTranslator>;

fn make_sut(delivery: MockContactDeliveryService) -> Sut {
    ContactFormServiceImpl::new(delivery, MockTranslator::new().with_keys(Locale::En))
}

fn fields(name: &str, email: &str, message: &str) -> ContactFormFields {
    ContactFormFields {
        name: name.into(),
        email: email.into(),
        message: message.into(),
    }
}

fn valid_fields() -> ContactFormFields {
    fields("Al", "a@b.co", "0123456789")
}

fn valid_message() -> ContactMessage {
    ContactMessage {
        author: ContactMessageAuthor {
            name: "Al".try_into().unwrap(),
            email: "a@b.co".try_into().unwrap(),
        },
        content: "0123456789".try_into().unwrap(),
    }
}

async fn fill(sut: &Sut, fields: &ContactFormFields) {
    for field in ContactField::ALL {
        sut.set_field(field, fields.get(field).into()).await;
    }
}

/// A delivery that settles with `result` only once the returned sender fires.
fn pending_delivery(
    message: ContactMessage,
    result: bool,
) -> (MockContactDeliveryService, oneshot::Sender<()>) {
    let (tx, rx) = oneshot::channel::<()>();
    let mut delivery = MockContactDeliveryService::new();
    delivery
        .expect_deliver()
        .once()
        .with(mockall::predicate::eq(message))
        .return_once(move |_| {
            Box::pin(async move {
                let _ = rx.await;
                settle(result)
            })
        });
    (delivery, tx)
}

fn settle(result: bool) -> Result<(), ContactDeliveryError> {
    if result {
        Ok(())
    } else {
        Err(anyhow::anyhow!("connection reset").into())
    }
}

/// Poll `sut` until it reports `status`, letting other futures run meanwhile.
fn wait_for_status(sut: &Sut, status: SubmissionStatus) -> impl Future<Output = ()> + '_ {
    async move {
        while sut.state().await.status != status {
            tokio::task::yield_now().await;
        }
    }
}
