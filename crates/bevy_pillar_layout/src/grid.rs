//! Pillar and disc placement.

use bevy::prelude::*;

use crate::config::LayoutConfig;

/// Which accent a disc represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub enum DiscRole {
    /// Floats above the pillar's top face.
    Water,
    /// Floats below the pillar's base face.
    Fire,
}

/// A single pillar of the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PillarSpec {
    pub row: usize,
    pub column: usize,
    pub height: f32,
    /// Center of the cylinder.
    pub center: Vec3,
}

impl PillarSpec {
    /// Y coordinate of the top face.
    pub fn top(&self) -> f32 {
        self.center.y + self.height / 2.0
    }

    /// Y coordinate of the base face.
    pub fn base(&self) -> f32 {
        self.center.y - self.height / 2.0
    }

    /// Disc floating `disc_offset` above the top face.
    pub fn water_disc(&self, config: &LayoutConfig) -> DiscSpec {
        DiscSpec {
            role: DiscRole::Water,
            row: self.row,
            column: self.column,
            center: self.center.with_y(self.top() + config.disc_offset),
        }
    }

    /// Disc floating `disc_offset` below the base face.
    pub fn fire_disc(&self, config: &LayoutConfig) -> DiscSpec {
        DiscSpec {
            role: DiscRole::Fire,
            row: self.row,
            column: self.column,
            center: self.center.with_y(self.base() - config.disc_offset),
        }
    }
}

/// An accent disc attached to a pillar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiscSpec {
    pub role: DiscRole,
    pub row: usize,
    pub column: usize,
    pub center: Vec3,
}

/// Every pillar of the grid in row-major order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PillarLayout {
    pillars: Vec<PillarSpec>,
}

impl PillarLayout {
    pub fn len(&self) -> usize {
        self.pillars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pillars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PillarSpec> {
        self.pillars.iter()
    }

    /// Pillars of a single row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &PillarSpec> {
        self.pillars.iter().filter(move |p| p.row == row)
    }

    /// Water disc followed by fire disc for every pillar.
    pub fn discs<'a>(&'a self, config: &'a LayoutConfig) -> impl Iterator<Item = DiscSpec> + 'a {
        self.pillars
            .iter()
            .flat_map(move |p| [p.water_disc(config), p.fire_disc(config)])
    }
}

impl IntoIterator for PillarLayout {
    type Item = PillarSpec;
    type IntoIter = std::vec::IntoIter<PillarSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.pillars.into_iter()
    }
}

/// Total width of one row, edge to edge.
pub fn total_width(config: &LayoutConfig) -> f32 {
    let columns = config.columns as f32;
    columns * config.radius * 2.0 + (columns - 1.0).max(0.0) * config.gap
}

/// X coordinate of a column's center. Rows are centered on zero.
pub fn column_x(config: &LayoutConfig, column: usize) -> f32 {
    column as f32 * config.column_pitch() - total_width(config) / 2.0 + config.radius
}

/// Height of every pillar standing in `column`.
pub fn column_height(config: &LayoutConfig, column: usize) -> f32 {
    let center = config.center_column();
    let normalized = if center > 0.0 {
        (column as f32 - center).abs() / center
    } else {
        0.0
    };
    config.max_height * config.profile.factor(normalized)
}

/// Build the pillar at `(row, column)`.
pub fn pillar(config: &LayoutConfig, row: usize, column: usize) -> PillarSpec {
    let height = column_height(config, column);
    PillarSpec {
        row,
        column,
        height,
        // Tops line up at max_height / 2.
        center: Vec3::new(
            column_x(config, column),
            (config.max_height - height) / 2.0,
            row as f32 * config.row_spacing,
        ),
    }
}

/// Lay out the whole grid.
pub fn generate_layout(config: &LayoutConfig) -> PillarLayout {
    let pillars = (0..config.rows)
        .flat_map(|row| (0..config.columns).map(move |column| pillar(config, row, column)))
        .collect();
    PillarLayout { pillars }
}
