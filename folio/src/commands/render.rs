use clap::Args;
use folio_config::Config;
use folio_core_contact_contracts::ContactFormService;
use folio_models::i18n::Locale;

use crate::environment::Environment;

#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Locale to render in [default: i18n.default_locale]
    #[arg(short, long)]
    locale: Option<Locale>,
}

impl RenderCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let env = Environment::new(&config, self.locale.unwrap_or(config.i18n.default_locale))?;
        let html = render(&env).await?;
        println!("{html}");
        Ok(())
    }
}

/// Render the current state of the contact form.
pub async fn render(env: &Environment) -> anyhow::Result<String> {
    let state = env.form.state().await;
    env.view(&state).render(&env.templates)
}
