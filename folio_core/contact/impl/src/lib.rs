pub use delivery::{ContactDeliveryServiceConfig, ContactDeliveryServiceImpl};
pub use form::ContactFormServiceImpl;

mod delivery;
mod form;
pub mod schema;
pub mod view;

#[cfg(test)]
mod tests;
