use folio_core_contact_contracts::{ContactFormService, MockContactDeliveryService, SubmitOutcome};
use folio_models::contact::{ContactField, ContactFormState, SubmissionStatus};
use pretty_assertions::assert_eq;

use super::*;

#[tokio::test]
async fn reset_after_success() {
    // Arrange
    let delivery = MockContactDeliveryService::new().with_deliver(valid_message(), true);

    let sut = make_sut(delivery);
    fill(&sut, &fields("A", "a@b.co", "0123456789")).await;
    assert_eq!(sut.submit().await, SubmitOutcome::Invalid);
    sut.set_field(ContactField::Name, "Al".into()).await;
    assert_eq!(sut.submit().await, SubmitOutcome::Delivered);

    // Act
    sut.send_another().await;

    // Assert
    assert_eq!(sut.state().await, ContactFormState::default());
}

#[tokio::test]
async fn reset_clears_input_typed_after_success() {
    // Arrange
    let delivery = MockContactDeliveryService::new().with_deliver(valid_message(), true);

    let sut = make_sut(delivery);
    fill(&sut, &valid_fields()).await;
    assert_eq!(sut.submit().await, SubmitOutcome::Delivered);
    sut.set_field(ContactField::Message, "leftover".into()).await;

    // Act
    sut.send_another().await;

    // Assert
    assert_eq!(sut.state().await, ContactFormState::default());
}

#[tokio::test]
async fn idempotent() {
    // Arrange
    let delivery = MockContactDeliveryService::new().with_deliver(valid_message(), true);

    let sut = make_sut(delivery);
    fill(&sut, &valid_fields()).await;
    assert_eq!(sut.submit().await, SubmitOutcome::Delivered);

    // Act
    sut.send_another().await;
    sut.send_another().await;

    // Assert
    let state = sut.state().await;
    assert_eq!(state, ContactFormState::default());
    assert_eq!(state.status, SubmissionStatus::Idle);
}

#[tokio::test]
async fn no_op_outside_success() {
    // Arrange
    let sut = make_sut(MockContactDeliveryService::new());
    fill(&sut, &fields("A", "", "")).await;
    assert_eq!(sut.submit().await, SubmitOutcome::Invalid);
    let before = sut.state().await;

    // Act
    sut.send_another().await;

    // Assert
    assert_eq!(sut.state().await, before);
    assert_eq!(before.errors.len(), 3);
}
