//! Pointer and keyboard handling.
//!
//! Pointer positions arrive in canvas pixels, already corrected for pan and
//! zoom. They are converted to unit space, hit-tested against terminals and
//! cells, and dispatched to the session commands.

use log::{debug, trace};
use voltlab_engine::{PixelPoint, UnitPoint};

use crate::session::Session;
use crate::state::{Selection, Tool};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Delete,
    Backspace,
    Escape,
    Char(char),
}

impl Session {
    fn to_unit(&self, position: PixelPoint) -> UnitPoint {
        position.to_unit(self.config.grid.cell_size)
    }

    pub fn pointer_down(&mut self, position: PixelPoint, button: PointerButton) {
        let unit = self.to_unit(position);
        // Any press closes an open context menu.
        self.context_target = None;
        match button {
            PointerButton::Primary => self.primary_down(unit),
            PointerButton::Secondary => self.secondary_down(unit),
        }
    }

    fn primary_down(&mut self, unit: UnitPoint) {
        if let Some(hit) = self.terminal_at(unit) {
            match self.wire_draw.active().map(|active| active.start) {
                None => {
                    let _ = self.start_wire(hit.point);
                }
                Some(start) if start == hit.point => {
                    trace!("Click on start terminal {start} ignored");
                }
                Some(_) => {
                    let _ = self.commit_wire(hit.point);
                }
            }
            return;
        }

        if self.wire_draw.is_drawing() {
            self.cancel_wire();
            return;
        }

        let cell = unit.cell();
        let occupant = self.component_at(cell).map(|c| c.id);
        match self.tool {
            Tool::Select => match occupant {
                Some(id) => {
                    self.selection = Selection::Component(id);
                    self.dragging = Some(id);
                }
                None => {
                    self.selection = self
                        .circuit
                        .wires()
                        .wire_through(cell)
                        .map_or(Selection::None, |wire| Selection::Wire(wire.id));
                }
            },
            Tool::Place(kind) => {
                if occupant.is_none() && self.place_component(cell, kind).is_ok() {
                    self.tool = Tool::Select;
                }
            }
            // Wires only start from terminals.
            Tool::Wire => {}
        }
    }

    fn secondary_down(&mut self, unit: UnitPoint) {
        if self.wire_draw.is_drawing() {
            self.cancel_wire();
            return;
        }

        self.context_target = self.component_at(unit.cell()).map(|c| c.id);
        if let Some(id) = self.context_target {
            debug!("Context menu on {id}");
            self.selection = Selection::Component(id);
        }
    }

    pub fn pointer_move(&mut self, position: PixelPoint) {
        let unit = self.to_unit(position);
        self.hovered = self.terminal_at(unit);

        if self.wire_draw.is_drawing() {
            self.update_wire_preview(unit);
            return;
        }

        let Some(id) = self.dragging else {
            return;
        };
        let cell = unit.cell();
        let current = self.circuit.component(id).map(|c| c.position);
        if current.is_some_and(|at| at != cell)
            && self.circuit.grid().cell(cell).is_some_and(|c| c.is_vacant())
        {
            let _ = self.move_component(id, cell);
        }
    }

    pub fn pointer_up(&mut self) {
        self.dragging = None;
    }

    /// Handles a key press; returns whether the key was recognised.
    pub fn key_down(&mut self, key: Key) -> bool {
        match key {
            Key::Delete | Key::Backspace => {
                let _ = self.remove_selection();
            }
            Key::Escape => {
                self.cancel_wire();
                self.selection = Selection::None;
                self.context_target = None;
                self.tool = Tool::Select;
            }
            Key::Char('r' | 'R') => {
                self.rotate_selection();
            }
            Key::Char('v' | 'V') => self.select_tool(Tool::Select),
            Key::Char('w' | 'W') => self.select_tool(Tool::Wire),
            Key::Char(_) => return false,
        }
        true
    }
}
