//! Client for the Career Advisor backend.
//!
//! The core is [`wizard::WizardController`]: a three-step Upload → Review → Predict
//! flow over one [`wizard::WizardSession`]. Network access goes through the
//! [`gateway`] traits, display goes through an injected [`wizard::WizardView`].

pub mod config;
pub mod errors;
pub mod gateway;
pub mod models;
pub mod render;
pub mod report;
pub mod shell;
pub mod terminal;
pub mod wizard;
