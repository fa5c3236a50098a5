use crate::constants::{GRID_COLUMNS, GRID_SPACING};
use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

/// Where the groups are placed on the ground
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GroupLayout {
    /// Every group at the origin
    Origin,
    /// Rows of `columns` groups, `spacing` apart and centred on the origin
    Grid { columns: usize, spacing: f32 },
}

impl Default for GroupLayout {
    fn default() -> Self {
        GroupLayout::Grid {
            columns: GRID_COLUMNS,
            spacing: GRID_SPACING,
        }
    }
}

impl GroupLayout {
    pub fn validate(&self) -> Result<(), String> {
        match self {
            GroupLayout::Grid { columns: 0, .. } => {
                Err("groups.layout.columns must be at least 1".into())
            }
            _ => Ok(()),
        }
    }

    /// A lone group always sits at the origin
    pub fn position(&self, index: usize, group_count: usize) -> Vec3 {
        match *self {
            GroupLayout::Grid { columns, spacing } if group_count > 1 && columns > 0 => {
                let offset = columns as f32 * spacing / 2.0;
                Vec3::new(
                    (index / columns) as f32 * spacing - offset,
                    0.0,
                    (index % columns) as f32 * spacing - offset,
                )
            }
            _ => Vec3::ZERO,
        }
    }
}
