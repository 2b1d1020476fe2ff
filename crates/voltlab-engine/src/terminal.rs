//! Terminal geometry.
//!
//! Terminal positions are never stored. They are derived from the owning
//! component's cell, its rotation and the catalog offset every time they are
//! needed, so moves and rotations are reflected immediately.

use serde::Serialize;
use voltlab_catalog::TerminalOffset;

use crate::geometry::{GridPoint, UnitPoint};
use crate::grid::{Component, Grid};
use crate::wire::ConnectionPoint;

/// Absolute unit-space position of `offset` on `component`.
pub fn resolve_terminal(component: &Component, offset: TerminalOffset) -> UnitPoint {
    let (rx, ry) = component.rotation.apply(offset.x, offset.y);
    let center = component.position.center();
    UnitPoint::new(center.x + rx, center.y + ry)
}

pub fn terminal_position(component: &Component, index: usize) -> Option<UnitPoint> {
    component
        .definition()
        .terminals
        .get(index)
        .map(|&offset| resolve_terminal(component, offset))
}

/// All terminal positions of `component` in catalog order.
pub fn terminal_positions(component: &Component) -> Vec<UnitPoint> {
    component
        .definition()
        .terminals
        .iter()
        .map(|&offset| resolve_terminal(component, offset))
        .collect()
}

/// The grid point a wire attached at `position` starts from.
pub fn snap(position: UnitPoint) -> GridPoint {
    position.cell()
}

/// Result of a terminal hit test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TerminalHit {
    pub point: ConnectionPoint,
    pub position: UnitPoint,
    /// Router-space anchor for wires attached here.
    pub snapped: GridPoint,
}

/// Resolves a connection point against the grid.
pub fn locate(grid: &Grid, point: ConnectionPoint) -> Option<TerminalHit> {
    let component = grid.component(point.component)?;
    let position = terminal_position(component, point.terminal)?;
    Some(TerminalHit {
        point,
        position,
        snapped: snap(position),
    })
}

/// First terminal strictly closer than `threshold` to `pointer`.
///
/// Components are scanned in row-major order and terminals in catalog order,
/// which decides ties.
pub fn find_terminal_near(grid: &Grid, pointer: UnitPoint, threshold: f64) -> Option<TerminalHit> {
    grid.components().find_map(|component| {
        component
            .definition()
            .terminals
            .iter()
            .enumerate()
            .find_map(|(index, &offset)| {
                let position = resolve_terminal(component, offset);
                (position.distance(pointer) < threshold).then(|| TerminalHit {
                    point: ConnectionPoint::new(component.id, index),
                    position,
                    snapped: snap(position),
                })
            })
    })
}
