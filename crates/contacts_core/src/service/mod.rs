//! Core use-case services.
//!
//! # Responsibility
//! - Apply call-site rules (non-empty input, advisory name uniqueness)
//!   before delegating to the repository.
//! - Keep CLI/UI layers decoupled from storage details.

pub mod contact_service;
