//! Dependency graph building
//!
//! Turns epic issues and their "blocks" links into nodes, edges and leaves.

mod builder;

pub use builder::{
    build_dependency_graph, GraphOptions, DEFAULT_BLOCKS_LINK_TYPE, DEFAULT_CLOSED_STATUS,
};
