use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A supported UI language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
    Fr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported locale {0:?}, expected one of \"en\", \"ar\" or \"fr\"")]
pub struct UnsupportedLocale(pub String);

impl Locale {
    pub const ALL: [Self; 3] = [Self::En, Self::Ar, Self::Fr];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
            Self::Fr => "fr",
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Self::Ar => TextDirection::Rtl,
            Self::En | Self::Fr => TextDirection::Ltr,
        }
    }

    /// The locale the language switcher moves to: en -> ar -> fr -> en.
    pub fn next(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::Fr,
            Self::Fr => Self::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.as_str() == s)
            .ok_or_else(|| UnsupportedLocale(s.into()))
    }
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

/// Translation keys of the `Contact` namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactKey {
    Description,
    Location,
    Name,
    NamePlaceholder,
    Email,
    EmailPlaceholder,
    Message,
    MessagePlaceholder,
    Send,
    ErrNameMin,
    ErrEmailInvalid,
    ErrMessageMin,
    ErrApiFailed,
    SuccessTitle,
    SuccessMsg,
    SendAnother,
}

impl ContactKey {
    pub const NAMESPACE: &'static str = "Contact";

    pub const ALL: [Self; 16] = [
        Self::Description,
        Self::Location,
        Self::Name,
        Self::NamePlaceholder,
        Self::Email,
        Self::EmailPlaceholder,
        Self::Message,
        Self::MessagePlaceholder,
        Self::Send,
        Self::ErrNameMin,
        Self::ErrEmailInvalid,
        Self::ErrMessageMin,
        Self::ErrApiFailed,
        Self::SuccessTitle,
        Self::SuccessMsg,
        Self::SendAnother,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Location => "location",
            Self::Name => "name",
            Self::NamePlaceholder => "name_placeholder",
            Self::Email => "email",
            Self::EmailPlaceholder => "email_placeholder",
            Self::Message => "message",
            Self::MessagePlaceholder => "message_placeholder",
            Self::Send => "send",
            Self::ErrNameMin => "err_name_min",
            Self::ErrEmailInvalid => "err_email_invalid",
            Self::ErrMessageMin => "err_message_min",
            Self::ErrApiFailed => "err_api_failed",
            Self::SuccessTitle => "success_title",
            Self::SuccessMsg => "success_msg",
            Self::SendAnother => "send_another",
        }
    }
}

impl fmt::Display for ContactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", Self::NAMESPACE, self.as_str())
    }
}
