//! content-service: blog title suggestions and diarized transcription backed
//! by a generative model, with normalization of the model's loosely
//! structured replies.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod startup;
