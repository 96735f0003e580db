//! Rendering of the contract addresses page.
//!
//! Templates are plain text with `{{ name }}` placeholders. [`TemplateRenderer`]
//! substitutes the first occurrence of each known placeholder, and
//! [`DocumentAssembler`] puts the current section and the previous deployments
//! sections together.
//!
//! [`TemplateRenderer`]: ./renderer/struct.TemplateRenderer.html
//! [`DocumentAssembler`]: ./document/struct.DocumentAssembler.html

pub mod document;
pub mod error;
pub mod renderer;

pub use crate::{
    document::DocumentAssembler,
    error::TemplateError,
    renderer::{render, TemplateRenderer, Vars},
};
