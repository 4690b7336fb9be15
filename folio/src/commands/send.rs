use anyhow::ensure;
use clap::Args;
use folio_config::Config;
use folio_core_contact_contracts::{ContactFormService, SubmitOutcome};
use folio_i18n_contracts::Translator;
use folio_models::{
    contact::{ContactField, ContactFormFields},
    i18n::{ContactKey, Locale},
};

use crate::environment::Environment;

#[derive(Debug, Args)]
pub struct SendCommand {
    /// Your name
    #[arg(long)]
    name: String,
    /// Your email address
    #[arg(long)]
    email: String,
    /// The message to send
    #[arg(long)]
    message: String,
    /// Locale of the feedback messages [default: i18n.default_locale]
    #[arg(short, long)]
    locale: Option<Locale>,
    /// Print the rendered view after submitting
    #[arg(long)]
    html: bool,
}

impl SendCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let env = Environment::new(&config, self.locale.unwrap_or(config.i18n.default_locale))?;
        let fields = ContactFormFields {
            name: self.name,
            email: self.email,
            message: self.message,
        };

        let outcome = submit(&env.form, &fields).await;
        let state = env.form.state().await;

        match outcome {
            SubmitOutcome::Delivered => {
                let translator = env.form.translator();
                println!("{}", translator.translate(ContactKey::SuccessTitle));
                println!("{}", translator.translate(ContactKey::SuccessMsg));
            }
            SubmitOutcome::Invalid => {
                for (field, error) in state.errors.iter() {
                    eprintln!("{}: {error}", field.id());
                }
            }
            SubmitOutcome::Failed => {
                if let Some(api_error) = &state.api_error {
                    eprintln!("{api_error}");
                }
            }
            SubmitOutcome::Ignored => {}
        }

        if self.html {
            println!("{}", env.view(&state).render(&env.templates)?);
        }

        ensure!(
            outcome == SubmitOutcome::Delivered,
            "Contact message was not delivered ({outcome:?})"
        );

        Ok(())
    }
}

/// Type `fields` into the form and submit it once.
pub async fn submit(form: &impl ContactFormService, fields: &ContactFormFields) -> SubmitOutcome {
    for field in ContactField::ALL {
        form.set_field(field, fields.get(field).into()).await;
    }
    form.submit().await
}
