pub mod emailjs;
mod http;
