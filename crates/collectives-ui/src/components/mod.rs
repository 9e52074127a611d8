//! Reusable UI components
//!
//! Everything here is data-agnostic; pages in the app crate wire them to
//! collectives data.

mod button;
mod input;
mod loading_grid;
mod styled_link;

pub use button::*;
pub use input::*;
pub use loading_grid::*;
pub use styled_link::*;
