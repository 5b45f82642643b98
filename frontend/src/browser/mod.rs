//! Thin wrappers over the DOM APIs the page view listens to. Every live
//! registration is an owned guard that unregisters itself on drop.

pub mod media;
pub mod navigation;
pub mod scroll;
pub mod visibility;
