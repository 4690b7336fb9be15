use std::sync::Arc;

use folio_core_contact_contracts::{ContactDeliveryError, ContactDeliveryService};
use folio_extern_contracts::emailjs::{EmailJsApiService, EmailJsSendRequest};
use folio_models::contact::ContactMessage;
use tracing::{debug, error};

#[derive(Debug, Clone)]
pub struct ContactDeliveryServiceImpl<EmailJsApi> {
    emailjs_api: EmailJsApi,
    config: Arc<ContactDeliveryServiceConfig>,
}

/// EmailJS credentials. Empty values are sent as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDeliveryServiceConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl<EmailJsApi> ContactDeliveryServiceImpl<EmailJsApi> {
    pub fn new(emailjs_api: EmailJsApi, config: ContactDeliveryServiceConfig) -> Self {
        Self {
            emailjs_api,
            config: config.into(),
        }
    }
}

impl<EmailJsApi> ContactDeliveryService for ContactDeliveryServiceImpl<EmailJsApi>
where
    EmailJsApi: EmailJsApiService,
{
    async fn deliver(&self, message: ContactMessage) -> Result<(), ContactDeliveryError> {
        let ContactMessage { author, content } = message;

        let request = EmailJsSendRequest {
            service_id: self.config.service_id.clone(),
            template_id: self.config.template_id.clone(),
            public_key: self.config.public_key.clone(),
            template_params: [
                ("from_name", author.name.into_inner()),
                ("from_email", author.email.into_inner()),
                ("message", content.into_inner()),
            ]
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value))
            .collect(),
        };

        self.emailjs_api
            .send(request)
            .await
            .inspect_err(|err| error!("Failed to deliver contact message: {err:#}"))?;

        debug!("contact message delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use folio_extern_contracts::emailjs::MockEmailJsApiService;
    use folio_models::contact::ContactMessageAuthor;
    use folio_utils::assert_matches;

    use super::*;

    fn config() -> ContactDeliveryServiceConfig {
        ContactDeliveryServiceConfig {
            service_id: "service_abc".into(),
            template_id: "template_xyz".into(),
            public_key: "public-key".into(),
        }
    }

    fn message() -> ContactMessage {
        ContactMessage {
            author: ContactMessageAuthor {
                name: "Max Mustermann".try_into().unwrap(),
                email: "max.mustermann@example.de".try_into().unwrap(),
            },
            content: "Hello World! Nice portfolio.".try_into().unwrap(),
        }
    }

    fn request(config: &ContactDeliveryServiceConfig) -> EmailJsSendRequest {
        EmailJsSendRequest {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
            template_params: [
                ("from_name".into(), "Max Mustermann".into()),
                ("from_email".into(), "max.mustermann@example.de".into()),
                ("message".into(), "Hello World! Nice portfolio.".into()),
            ]
            .into(),
        }
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let config = config();
        let emailjs_api = MockEmailJsApiService::new().with_send(request(&config), true);

        let sut = ContactDeliveryServiceImpl::new(emailjs_api, config);

        // Act
        let result = sut.deliver(message()).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn rejected() {
        // Arrange
        let config = config();
        let emailjs_api = MockEmailJsApiService::new().with_send(request(&config), false);

        let sut = ContactDeliveryServiceImpl::new(emailjs_api, config);

        // Act
        let result = sut.deliver(message()).await;

        // Assert
        assert_matches!(result, Err(ContactDeliveryError::Delivery(_)));
    }

    #[tokio::test]
    async fn empty_credentials_are_still_sent() {
        // Arrange
        let config = ContactDeliveryServiceConfig::default();
        let emailjs_api = MockEmailJsApiService::new().with_send(request(&config), false);

        let sut = ContactDeliveryServiceImpl::new(emailjs_api, config);

        // Act
        let result = sut.deliver(message()).await;

        // Assert
        assert_matches!(result, Err(ContactDeliveryError::Delivery(_)));
    }
}
