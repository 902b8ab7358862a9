//! summarizer-service: turns traffic, weather and incident readings into
//! one-paragraph summaries using a generative language model.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod prompts;
pub mod services;
pub mod startup;
