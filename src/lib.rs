pub mod asr;
pub mod chat;
pub mod config;
pub mod error;
pub mod generation;
pub mod routes;
pub mod service_client;
pub mod state;
pub mod translate;
pub mod tts;

pub use error::ServiceError;
