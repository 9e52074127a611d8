//! Collectives UI Components
//!
//! Presentation primitives shared by the collectives pages: buttons, form
//! inputs, links styled as buttons and loading placeholders.
//!
//! ## Design Notes
//!
//! Components only emit markup and class names; the app supplies the
//! stylesheet. Class names follow `block-element` naming:
//! - **Buttons**: `btn`, `btn-primary`, `btn-large`
//! - **Links**: `styled-link`, `styled-link-primary`
//! - **Loading**: `loading-grid`, `loading-card`

pub mod components;

pub use components::*;
