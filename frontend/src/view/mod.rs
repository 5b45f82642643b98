//! Page view state, kept free of DOM access so it can be exercised on the
//! host. The `browser` module feeds it events.

pub mod media;
pub mod menu;
pub mod nav;
pub mod revealed;
pub mod scroll;
pub mod state;

pub use state::{PageAction, PageState, ViewPhase};
