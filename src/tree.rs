//! Playlist tree: node construction and Load, Print rendering, and Export.

pub mod export;
pub mod node;
pub mod path;
pub mod render;

pub use export::ExportOptions;
pub use node::Node;
pub use render::PrintOptions;
