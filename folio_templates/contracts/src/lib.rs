use serde::Serialize;

pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

pub trait Template: Serialize {
    /// Name of the template file, also used to register it with the engine.
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

pub const BASE_TEMPLATE: (&str, &str) = ("base.html", include_str!("../templates/base.html"));

macro_rules! templates {
    ($( $ident:ident ( $path:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = $path;
                const TEMPLATE: &'static str = include_str!(concat!("../templates/", $path));
            }
        )*

        pub const TEMPLATES: &[(&str, &str)] = &[
            BASE_TEMPLATE,
            $( ($ident::NAME, $ident::TEMPLATE) ),*
        ];
    };
}

templates! {
    ContactFormTemplate("contact_form.html"),
    ContactSuccessTemplate("contact_success.html"),
}

/// Document level attributes shared by every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageTemplate {
    pub lang: String,
    pub dir: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFormTemplate {
    #[serde(flatten)]
    pub page: PageTemplate,
    pub description: String,
    pub email_label: String,
    pub contact_email: String,
    pub location_label: String,
    pub location: String,
    pub api_error: Option<String>,
    pub fields: Vec<FormFieldTemplate>,
    pub submitting: bool,
    pub send: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormFieldTemplate {
    pub id: String,
    pub label: String,
    pub placeholder: String,
    pub value: String,
    pub error: Option<String>,
    pub kind: FormFieldKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormFieldKind {
    Text,
    Email,
    Textarea,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSuccessTemplate {
    #[serde(flatten)]
    pub page: PageTemplate,
    pub title: String,
    pub message: String,
    pub send_another: String,
}
