//! Contact form validation and submission pipeline
//!
//! Validates form fields against per-field rules, submits captured values
//! through an injected [`submit::Submitter`], and shows a transient status
//! message through an injected [`pipeline::StatusDisplay`]. A ratatui front
//! end in the `contact-form` binary drives it from a terminal.

pub mod app;
pub mod config;
pub mod form;
pub mod page;
pub mod pipeline;
pub mod platform;
pub mod submit;
pub mod ui;
