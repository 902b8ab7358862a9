//! HTTP handlers for the summarizer service.

pub mod extract;
pub mod health;
pub mod summaries;
