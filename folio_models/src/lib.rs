pub mod contact;
pub mod i18n;
