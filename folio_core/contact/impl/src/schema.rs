use folio_i18n_contracts::Translator;
use folio_models::contact::{
    ContactField, ContactFormFields, ContactMessage, ContactMessageAuthor,
    ContactMessageAuthorName, ContactMessageContent, ContactMessageEmail, FieldErrors,
};

/// Validate the raw form fields.
///
/// Every field is checked, so the returned [`FieldErrors`] contain a localized
/// message for each invalid field, not just the first one.
pub fn validate(
    fields: &ContactFormFields,
    translator: &impl Translator,
) -> Result<ContactMessage, FieldErrors> {
    let name = ContactMessageAuthorName::try_new(fields.name.clone());
    let email = ContactMessageEmail::try_new(fields.email.clone());
    let content = ContactMessageContent::try_new(fields.message.clone());

    match (name, email, content) {
        (Ok(name), Ok(email), Ok(content)) => Ok(ContactMessage {
            author: ContactMessageAuthor { name, email },
            content,
        }),
        (name, email, content) => Err([
            (ContactField::Name, name.is_err()),
            (ContactField::Email, email.is_err()),
            (ContactField::Message, content.is_err()),
        ]
        .into_iter()
        .filter(|&(_, invalid)| invalid)
        .map(|(field, _)| (field, translator.translate(field.error_key())))
        .collect()),
    }
}

#[cfg(test)]
mod tests {
    use folio_i18n_contracts::MockTranslator;
    use folio_models::i18n::Locale;
    use pretty_assertions::assert_eq;

    use super::*;

    fn fields(name: &str, email: &str, message: &str) -> ContactFormFields {
        ContactFormFields {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[test]
    fn ok() {
        // Arrange
        let translator = MockTranslator::new();

        // Act
        let result = validate(&fields("Al", "a@b.co", "0123456789"), &translator);

        // Assert
        let message = result.unwrap();
        assert_eq!(*message.author.name, "Al");
        assert_eq!(*message.author.email, "a@b.co");
        assert_eq!(*message.content, "0123456789");
    }

    #[test]
    fn name_too_short() {
        let translator = MockTranslator::new().with_keys(Locale::En);

        for name in ["", "A", "é"] {
            let errors = validate(&fields(name, "a@b.co", "0123456789"), &translator).unwrap_err();

            assert_eq!(
                errors.iter().collect::<Vec<_>>(),
                [(ContactField::Name, "Contact.err_name_min")]
            );
        }
    }

    #[test]
    fn email_invalid() {
        let translator = MockTranslator::new().with_keys(Locale::En);

        for email in ["", "max", "max@", "max@example", "@example.com", "max@@example.com"] {
            let errors = validate(&fields("Al", email, "0123456789"), &translator).unwrap_err();

            assert_eq!(
                errors.iter().collect::<Vec<_>>(),
                [(ContactField::Email, "Contact.err_email_invalid")],
                "{email:?}"
            );
        }
    }

    #[test]
    fn message_too_short() {
        let translator = MockTranslator::new().with_keys(Locale::En);

        let errors = validate(&fields("Al", "a@b.co", "012345678"), &translator).unwrap_err();

        assert_eq!(
            errors.iter().collect::<Vec<_>>(),
            [(ContactField::Message, "Contact.err_message_min")]
        );
    }

    #[test]
    fn collect_all_errors() {
        // Arrange
        let translator = MockTranslator::new().with_keys(Locale::En);

        // Act
        let result = validate(&ContactFormFields::default(), &translator);

        // Assert
        let errors = result.unwrap_err();
        assert_eq!(
            errors.iter().collect::<Vec<_>>(),
            [
                (ContactField::Name, "Contact.err_name_min"),
                (ContactField::Email, "Contact.err_email_invalid"),
                (ContactField::Message, "Contact.err_message_min"),
            ]
        );
    }

    #[test]
    fn lengths_are_not_trimmed() {
        let translator = MockTranslator::new();

        let result = validate(&fields("  ", "a@b.co", "          "), &translator);

        assert!(result.is_ok());
    }
}
