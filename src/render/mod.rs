//! Diagram rendering
//!
//! Emits the dependency graph in the Mermaid flowchart dialect.

mod mermaid;

pub use mermaid::{
    render_mermaid, RenderOptions, DEFAULT_CLOSED_STYLE, DEFAULT_LAYOUT, EPIC_STYLE,
};
