//! In-memory blog article model: text statistics over article content and
//! type-checked attribute slots.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
