use folio_i18n_contracts::Translator;
use folio_models::{
    contact::{ContactField, ContactFormState, SubmissionStatus},
    i18n::ContactKey,
};
use folio_templates_contracts::{
    ContactFormTemplate, ContactSuccessTemplate, FormFieldKind, FormFieldTemplate, PageTemplate,
    TemplateService,
};

/// Static contact details shown next to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCard {
    pub email: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactView {
    Form(ContactFormTemplate),
    Success(ContactSuccessTemplate),
}

impl ContactView {
    pub fn render(&self, templates: &impl TemplateService) -> anyhow::Result<String> {
        match self {
            Self::Form(template) => templates.render(template),
            Self::Success(template) => templates.render(template),
        }
    }
}

/// Build the view for the given form state.
pub fn contact_view(
    state: &ContactFormState,
    translator: &impl Translator,
    card: &ContactCard,
) -> ContactView {
    let locale = translator.locale();
    let page = PageTemplate {
        lang: locale.as_str().into(),
        dir: locale.direction().as_str().into(),
    };

    if state.status == SubmissionStatus::Success {
        return ContactView::Success(ContactSuccessTemplate {
            page,
            title: translator.translate(ContactKey::SuccessTitle),
            message: translator.translate(ContactKey::SuccessMsg),
            send_another: translator.translate(ContactKey::SendAnother),
        });
    }

    let fields = ContactField::ALL
        .into_iter()
        .map(|field| FormFieldTemplate {
            id: field.id().into(),
            label: translator.translate(field.label_key()),
            placeholder: translator.translate(field.placeholder_key()),
            value: state.fields.get(field).into(),
            error: state.errors.get(field).map(Into::into),
            kind: match field {
                ContactField::Name => FormFieldKind::Text,
                ContactField::Email => FormFieldKind::Email,
                ContactField::Message => FormFieldKind::Textarea,
            },
        })
        .collect();

    ContactView::Form(ContactFormTemplate {
        page,
        description: translator.translate(ContactKey::Description),
        email_label: translator.translate(ContactKey::Email),
        contact_email: card.email.clone(),
        location_label: translator.translate(ContactKey::Location),
        location: card.location.clone(),
        api_error: state.api_error.clone(),
        fields,
        submitting: state.status == SubmissionStatus::Submitting,
        send: translator.translate(ContactKey::Send),
    })
}
