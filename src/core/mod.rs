//! Core processing modules
//!
//! Contains the generation request model, the hipsum.co client and the
//! text assembly applied before insertion.

pub mod hipsum;
pub mod request;
pub mod text_normalizer;

pub use hipsum::{HipsumClient, TextGenerator};
pub use request::{GenerationRequest, RequestOptions, Style, Unit};
