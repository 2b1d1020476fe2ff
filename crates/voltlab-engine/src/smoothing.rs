//! Corner-smoothed wire geometry.
//!
//! Routed paths are orthogonal polylines in grid space. For display each
//! waypoint is moved to its cell centre in pixel space and every interior
//! corner is replaced by a quadratic bend of constant radius, shrunk on short
//! segments so neighbouring bends never overlap.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use svg::node::element::path::Data;

use crate::config::LabConfig;
use crate::geometry::{GridPoint, PixelPoint};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingStyle {
    /// Pixel size of one grid cell.
    pub cell_size: f64,
    /// Corner radius in pixels before clamping.
    pub corner_radius: f64,
    /// Clamped radii below this render as sharp corners.
    pub min_radius: f64,
}

impl Default for SmoothingStyle {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            corner_radius: 12.0,
            min_radius: 2.0,
        }
    }
}

impl From<&LabConfig> for SmoothingStyle {
    fn from(config: &LabConfig) -> Self {
        Self {
            cell_size: config.grid.cell_size,
            corner_radius: config.render.corner_radius,
            min_radius: config.render.min_corner_radius,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { to: PixelPoint },
    LineTo { to: PixelPoint },
    QuadTo { control: PixelPoint, to: PixelPoint },
}

/// Backend-neutral drawing commands for one wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DrawablePath(Vec<PathCommand>);

impl DrawablePath {
    pub fn commands(&self) -> &[PathCommand] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn curve_count(&self) -> usize {
        self.0
            .iter()
            .filter(|c| matches!(c, PathCommand::QuadTo { .. }))
            .count()
    }

    /// The same commands as SVG path data.
    pub fn to_svg_data(&self) -> Data {
        let xy = |p: &PixelPoint| (p.x as f32, p.y as f32);
        self.0.iter().fold(Data::new(), |data, command| match command {
            PathCommand::MoveTo { to } => data.move_to(xy(to)),
            PathCommand::LineTo { to } => data.line_to(xy(to)),
            PathCommand::QuadTo { control, to } => {
                let (cx, cy) = xy(control);
                let (x, y) = xy(to);
                data.quadratic_curve_to((cx, cy, x, y))
            }
        })
    }
}

/// SVG path syntax, e.g. `M 20 20 L 20 48 Q 20 60 32 60 L 60 60`.
impl fmt::Display for DrawablePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match command {
                PathCommand::MoveTo { to } => write!(f, "M {} {}", to.x, to.y)?,
                PathCommand::LineTo { to } => write!(f, "L {} {}", to.x, to.y)?,
                PathCommand::QuadTo { control, to } => {
                    write!(f, "Q {} {} {} {}", control.x, control.y, to.x, to.y)?
                }
            }
        }
        Ok(())
    }
}

/// Centre of grid cell `p` in pixels.
pub fn to_pixel(p: GridPoint, cell_size: f64) -> PixelPoint {
    p.center().to_pixel(cell_size)
}

pub fn smooth_path(points: &[GridPoint], style: &SmoothingStyle) -> DrawablePath {
    if points.len() < 2 {
        return DrawablePath::default();
    }

    let px: Vec<PixelPoint> = points.iter().map(|&p| to_pixel(p, style.cell_size)).collect();
    let mut commands = vec![PathCommand::MoveTo { to: px[0] }];

    for (prev, curr, next) in px.iter().copied().tuple_windows() {
        let (v1x, v1y) = (curr.x - prev.x, curr.y - prev.y);
        let len1 = v1x.hypot(v1y);
        let (v2x, v2y) = (next.x - curr.x, next.y - curr.y);
        let len2 = v2x.hypot(v2y);

        let r = style.corner_radius.min(len1 / 2.0).min(len2 / 2.0);

        if len1 == 0.0 || len2 == 0.0 || r < style.min_radius {
            commands.push(PathCommand::LineTo { to: curr });
        } else if v1x * v2y - v1y * v2x == 0.0 && v1x * v2x + v1y * v2y > 0.0 {
            // Straight through, not a corner.
            continue;
        } else {
            let start = PixelPoint::new(curr.x - v1x / len1 * r, curr.y - v1y / len1 * r);
            let end = PixelPoint::new(curr.x + v2x / len2 * r, curr.y + v2y / len2 * r);
            commands.push(PathCommand::LineTo { to: start });
            commands.push(PathCommand::QuadTo {
                control: curr,
                to: end,
            });
        }
    }

    if let Some(&last) = px.last() {
        commands.push(PathCommand::LineTo { to: last });
    }

    DrawablePath(commands)
}
