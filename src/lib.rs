//! question-service: HTTP service that turns exam/subject/topic/difficulty
//! requests into Gemini-generated multiple-choice question sets.
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod services;
pub mod startup;
