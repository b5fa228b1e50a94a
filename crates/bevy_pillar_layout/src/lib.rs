//! # bevy_pillar_layout
//!
//! Deterministic layout for a grid of cylinder pillars, each paired with a
//! water disc floating above its top face and a fire disc floating below its
//! base face.
//!
//! The crate only computes transforms and dimensions; spawning meshes is left
//! to the caller.
//!
//! ```
//! use bevy_pillar_layout::prelude::*;
//!
//! let config = LayoutConfig::default();
//! let layout = generate_layout(&config);
//! assert_eq!(layout.len(), config.rows * config.columns);
//!
//! for pillar in layout.iter() {
//!     let water = pillar.water_disc(&config);
//!     assert!(water.center.y > pillar.top());
//! }
//! ```

pub mod config;
pub mod grid;

pub use config::{HeightProfile, LayoutConfig};
pub use grid::{
    DiscRole, DiscSpec, PillarLayout, PillarSpec, column_height, column_x, generate_layout,
    pillar, total_width,
};

/// Convenient re-exports of commonly used types.
pub mod prelude {
    pub use crate::config::{HeightProfile, LayoutConfig};
    pub use crate::grid::{
        DiscRole, DiscSpec, PillarLayout, PillarSpec, column_height, column_x, generate_layout,
        pillar, total_width,
    };
}
