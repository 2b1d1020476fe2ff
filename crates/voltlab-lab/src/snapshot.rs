//! Read-only render view of a session.
//!
//! A [`Snapshot`] carries everything a renderer needs, with terminal
//! positions and wire curves already resolved, so nothing downstream has to
//! know about rotations, routing or smoothing.

use serde::Serialize;
use voltlab_catalog::ComponentDefinition;
use voltlab_engine::terminal::terminal_positions;
use voltlab_engine::{
    smooth_path, Component, ConnectionPoint, DrawablePath, GridPoint, PixelPoint, TerminalHit,
    UnitPoint, WireId,
};

use crate::session::Session;
use crate::state::{Selection, Tool};

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub width: u32,
    pub height: u32,
    pub cell_size: f64,
    pub background: String,
    pub components: Vec<ComponentView>,
    pub wires: Vec<WireView>,
    pub preview: Option<PreviewView>,
    pub selection: Selection,
    pub tool: Tool,
    pub hovered: Option<TerminalHit>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentView {
    #[serde(flatten)]
    pub component: Component,
    #[serde(skip)]
    pub definition: &'static ComponentDefinition,
    pub label: &'static str,
    pub color: &'static str,
    pub selected: bool,
    pub terminals: Vec<TerminalView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TerminalView {
    pub index: usize,
    pub label: Option<&'static str>,
    pub position: UnitPoint,
    pub pixel: PixelPoint,
}

#[derive(Debug, Clone, Serialize)]
pub struct WireView {
    pub id: WireId,
    pub from: ConnectionPoint,
    pub to: ConnectionPoint,
    pub path: Vec<GridPoint>,
    pub drawable: DrawablePath,
    /// Display colour; the selection colour when selected.
    pub color: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreviewView {
    pub from: ConnectionPoint,
    pub path: Vec<GridPoint>,
    pub drawable: DrawablePath,
    pub color: String,
}

impl Snapshot {
    pub fn pixel_width(&self) -> f64 {
        self.width as f64 * self.cell_size
    }

    pub fn pixel_height(&self) -> f64 {
        self.height as f64 * self.cell_size
    }
}

impl Session {
    pub fn snapshot(&self) -> Snapshot {
        let render = &self.config.render;
        let cell_size = self.config.grid.cell_size;
        let grid = self.circuit.grid();

        let components = grid
            .components()
            .map(|component| {
                let definition = component.definition();
                let terminals = terminal_positions(component)
                    .into_iter()
                    .enumerate()
                    .map(|(index, position)| TerminalView {
                        index,
                        label: definition.terminal_label(index),
                        position,
                        pixel: position.to_pixel(cell_size),
                    })
                    .collect();
                ComponentView {
                    component: component.clone(),
                    definition,
                    label: definition.label,
                    color: definition.color,
                    selected: self.selection == Selection::Component(component.id),
                    terminals,
                }
            })
            .collect();

        let wires = self
            .circuit
            .wires()
            .iter()
            .map(|wire| {
                let selected = self.selection == Selection::Wire(wire.id);
                WireView {
                    id: wire.id,
                    from: wire.from,
                    to: wire.to,
                    path: wire.path.clone(),
                    drawable: smooth_path(&wire.path, &self.smoothing),
                    color: if selected {
                        render.selected_wire_color.clone()
                    } else {
                        wire.color.clone()
                    },
                    selected,
                }
            })
            .collect();

        let preview = self.wire_draw.active().map(|active| PreviewView {
            from: active.start,
            path: active.live_path.clone(),
            drawable: smooth_path(&active.live_path, &self.smoothing),
            color: render.preview_color.clone(),
        });

        Snapshot {
            width: grid.width(),
            height: grid.height(),
            cell_size,
            background: render.background.clone(),
            components,
            wires,
            preview,
            selection: self.selection,
            tool: self.tool,
            hovered: self.hovered,
        }
    }
}
