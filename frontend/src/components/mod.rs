pub mod anchor_link;
pub mod footer;
pub mod header;
pub mod hero;
pub mod reveal;
