//! Platform-independent core of the treaty globe.
//!
//! Projects geographic coordinates onto the globe, picks markers under a
//! pointer ray and keeps the per-session state the front-ends drive.

pub mod camera;
pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod geo;
pub mod lookup;
pub mod marker;
pub mod picking;
pub mod tooltip;
pub mod treaty;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use context::*;
pub use error::*;
pub use geo::*;
pub use lookup::*;
pub use marker::*;
pub use picking::*;
pub use tooltip::*;
pub use treaty::*;
