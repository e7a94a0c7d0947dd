//! dass-export
//!
//! Results documents: Markdown rendered from a Tera template, and DOCX
//! built from that Markdown.

pub mod docx;
pub mod error;
pub mod render;
pub mod styles;
