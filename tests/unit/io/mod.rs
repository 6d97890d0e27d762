mod configuration;
mod error;
mod image;
