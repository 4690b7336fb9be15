use folio_config::Config;
use folio_core_contact_impl::{
    view::{contact_view, ContactCard, ContactView},
    ContactDeliveryServiceConfig, ContactDeliveryServiceImpl, ContactFormServiceImpl,
};
use folio_extern_impl::emailjs::{EmailJsApiServiceConfig, EmailJsApiServiceImpl};
use folio_i18n_impl::CatalogTranslator;
use folio_models::{contact::ContactFormState, i18n::Locale};
use folio_templates_impl::TemplateServiceImpl;

pub type EmailJsApi = EmailJsApiServiceImpl;
pub type ContactDelivery = ContactDeliveryServiceImpl<EmailJsApi>;
pub type ContactForm = ContactFormServiceImpl<ContactDelivery, CatalogTranslator>;

/// One contact form wired to the configured EmailJS account, rendering in a
/// single locale.
pub struct Environment {
    pub form: ContactForm,
    pub templates: TemplateServiceImpl,
    pub card: ContactCard,
}

impl Environment {
    pub fn new(config: &Config, locale: Locale) -> anyhow::Result<Self> {
        let emailjs_api = EmailJsApiServiceImpl::new(EmailJsApiServiceConfig::new(
            config.emailjs.send_endpoint_override.clone(),
        ))?;

        let delivery = ContactDeliveryServiceImpl::new(
            emailjs_api,
            ContactDeliveryServiceConfig {
                service_id: config.emailjs.service_id.clone(),
                template_id: config.emailjs.template_id.clone(),
                public_key: config.emailjs.public_key.clone(),
            },
        );

        Ok(Self {
            form: ContactFormServiceImpl::new(delivery, CatalogTranslator::new(locale)?),
            templates: TemplateServiceImpl::new()?,
            card: ContactCard {
                email: config.contact.email.clone(),
                location: config.contact.location.clone(),
            },
        })
    }

    pub fn view(&self, state: &ContactFormState) -> ContactView {
        contact_view(state, self.form.translator(), &self.card)
    }
}
