//! Language-agnostic text building blocks for the kiln source generator.
//!
//! # Module Organization
//!
//! - [`CodeBuilder`] - Fluent API for building indented code
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod fragment;
mod indent;

pub use code_builder::CodeBuilder;
pub use fragment::CodeFragment;
pub use indent::Indent;
