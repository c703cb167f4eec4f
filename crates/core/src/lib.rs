//! Core library for the consulting site.
//!
//! The page is static, prop-driven markup with one exception: the content
//! rotator behind the review and testimonial sections. Each module owns one
//! concern (rotator state, mobile menu state, section content, configuration
//! loading, HTML rendering) so the stateful parts can be exercised without
//! rendering anything.

pub mod config;
pub mod content;
pub mod error;
pub mod nav;
pub mod render;
pub mod rotator;

pub use config::{ConfigFormat, SiteConfig};
pub use content::{NavLink, Service, ServiceIcon, Testimonial};
pub use error::{Result, SiteError};
pub use nav::MenuState;
pub use render::{render_html, render_page, PageState, RotatorSection};
pub use rotator::{Indicator, Rotator, RotatorCommand, RotatorLayout, Transition};
