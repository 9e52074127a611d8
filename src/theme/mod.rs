//! Theme for the collectives app.

mod styles;

pub use styles::{GLOBAL_STYLES, IFRAME_STYLES};
