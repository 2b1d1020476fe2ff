use log::debug;
use voltlab_catalog::ComponentKind;
use voltlab_engine::terminal::locate;
use voltlab_engine::{
    find_terminal_near, Circuit, Component, ComponentId, ConnectionPoint, GridError, GridPoint,
    LabConfig, Rotation, Router, SmoothingStyle, TerminalHit, UnitPoint, Wire, WireError, WireId,
};

use crate::state::{ActiveWire, Selection, Tool, WireDraw};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Wire(#[from] WireError),

    #[error("No wire is being drawn")]
    NotDrawing,

    #[error("No component at {0}")]
    EmptyCell(GridPoint),
}

/// One editor session: the circuit plus all interaction state around it.
///
/// Sessions are plain owned values. Every mutation goes through `&mut self`,
/// and rejected edits leave the session exactly as it was.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) config: LabConfig,
    pub(crate) circuit: Circuit,
    pub(crate) router: Router,
    pub(crate) smoothing: SmoothingStyle,
    pub(crate) tool: Tool,
    pub(crate) selection: Selection,
    pub(crate) wire_draw: WireDraw,
    pub(crate) dragging: Option<ComponentId>,
    pub(crate) hovered: Option<TerminalHit>,
    pub(crate) context_target: Option<ComponentId>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(LabConfig::default())
    }
}

impl Session {
    pub fn new(config: LabConfig) -> Self {
        let circuit = Circuit::new(config.grid.width, config.grid.height);
        let router = Router::new(config.router.clone());
        let smoothing = SmoothingStyle::from(&config);
        Self {
            config,
            circuit,
            router,
            smoothing,
            tool: Tool::default(),
            selection: Selection::None,
            wire_draw: WireDraw::Idle,
            dragging: None,
            hovered: None,
            context_target: None,
        }
    }

    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn smoothing(&self) -> &SmoothingStyle {
        &self.smoothing
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn wire_draw(&self) -> &WireDraw {
        &self.wire_draw
    }

    pub fn dragging(&self) -> Option<ComponentId> {
        self.dragging
    }

    /// Terminal under the pointer after the last pointer move.
    pub fn hovered_terminal(&self) -> Option<&TerminalHit> {
        self.hovered.as_ref()
    }

    /// Component a context menu was last opened on.
    pub fn context_target(&self) -> Option<ComponentId> {
        self.context_target
    }

    pub fn clear_context_target(&mut self) {
        self.context_target = None;
    }

    pub fn component_at(&self, at: GridPoint) -> Option<&Component> {
        self.circuit.grid().component_at(at)
    }

    // --- Components ---

    pub fn place_component(
        &mut self,
        at: GridPoint,
        kind: ComponentKind,
    ) -> Result<ComponentId, SessionError> {
        self.circuit.place(at, kind).map_err(|e| rejected("place", e))
    }

    pub fn move_component(&mut self, id: ComponentId, to: GridPoint) -> Result<(), SessionError> {
        let dropped = self
            .circuit
            .move_component(id, to)
            .map_err(|e| rejected("move", e))?;
        self.after_geometry_change(id, &dropped);
        Ok(())
    }

    pub fn rotate_component(&mut self, id: ComponentId) -> Result<Rotation, SessionError> {
        let (rotation, dropped) = self.circuit.rotate(id).map_err(|e| rejected("rotate", e))?;
        self.after_geometry_change(id, &dropped);
        Ok(rotation)
    }

    pub fn remove_component(&mut self, id: ComponentId) -> Result<Component, SessionError> {
        let (component, dropped) = self.circuit.remove(id).map_err(|e| rejected("remove", e))?;
        self.after_geometry_change(id, &dropped);
        if self.selection == Selection::Component(id) {
            self.selection = Selection::None;
        }
        if self.dragging == Some(id) {
            self.dragging = None;
        }
        if self.context_target == Some(id) {
            self.context_target = None;
        }
        Ok(component)
    }

    pub fn set_component_value(&mut self, id: ComponentId, value: f64) -> Result<(), SessionError> {
        self.circuit
            .set_value(id, value)
            .map_err(|e| rejected("set value", e))
    }

    /// Wires attached to `id` are gone and its terminals may have moved.
    fn after_geometry_change(&mut self, id: ComponentId, dropped: &[WireId]) {
        if let Selection::Wire(wire) = self.selection {
            if dropped.contains(&wire) {
                self.selection = Selection::None;
            }
        }
        if self
            .wire_draw
            .active()
            .is_some_and(|active| active.start.component == id)
        {
            debug!("Start terminal of the wire being drawn changed, cancelling");
            self.cancel_wire();
        }
        self.hovered = None;
    }

    // --- Selection ---

    /// Selects a component or wire. Selecting something that does not exist
    /// is rejected and keeps the current selection.
    pub fn select(&mut self, selection: Selection) -> Result<(), SessionError> {
        match selection {
            Selection::None => {}
            Selection::Component(id) => {
                if self.circuit.component(id).is_none() {
                    return Err(rejected("select", GridError::UnknownComponent(id)));
                }
            }
            Selection::Wire(id) => {
                if self.circuit.wires().get(id).is_none() {
                    return Err(rejected("select", WireError::UnknownWire(id)));
                }
            }
        }
        self.selection = selection;
        Ok(())
    }

    /// Removes whatever is selected and returns what it was.
    pub fn remove_selection(&mut self) -> Result<Selection, SessionError> {
        let removed = self.selection;
        match removed {
            Selection::None => {}
            Selection::Component(id) => {
                self.remove_component(id)?;
            }
            Selection::Wire(id) => {
                self.remove_wire(id)?;
            }
        }
        self.selection = Selection::None;
        Ok(removed)
    }

    /// Rotates the selected component, if a component is selected.
    pub fn rotate_selection(&mut self) -> Option<Rotation> {
        let id = self.selection.component()?;
        self.rotate_component(id).ok()
    }

    pub fn select_tool(&mut self, tool: Tool) {
        if tool != self.tool {
            debug!("Tool changed to {tool:?}");
        }
        self.tool = tool;
        self.dragging = None;
        self.cancel_wire();
    }

    // --- Wires ---

    /// Begins drawing a wire from `start`, replacing any wire already in progress.
    pub fn start_wire(&mut self, start: ConnectionPoint) -> Result<(), SessionError> {
        let hit = locate(self.circuit.grid(), start).ok_or_else(|| {
            let err = match self.circuit.component(start.component) {
                Some(_) => WireError::NoSuchTerminal(start.component, start.terminal),
                None => WireError::UnknownComponent(start.component),
            };
            rejected("start wire", err)
        })?;

        debug!("Drawing wire from {start}");
        self.selection = Selection::None;
        self.wire_draw = WireDraw::Drawing(ActiveWire {
            start,
            start_point: hit.snapped,
            live_path: vec![hit.snapped],
        });
        Ok(())
    }

    /// Re-routes the live preview towards `cursor`.
    ///
    /// The preview snaps to a terminal when the cursor is over one, and to
    /// the containing cell (clamped to the grid) otherwise.
    pub fn update_wire_preview(&mut self, cursor: UnitPoint) {
        let target = match self.terminal_at(cursor) {
            Some(hit) => hit.snapped,
            None => self.circuit.grid().clamp(cursor.cell()),
        };
        let WireDraw::Drawing(active) = &mut self.wire_draw else {
            return;
        };
        active.live_path = self
            .router
            .find_path(self.circuit.grid(), active.start_point, target);
    }

    /// Completes the wire in progress at `end`.
    ///
    /// The session is back to idle afterwards whether or not the wire was
    /// accepted.
    pub fn commit_wire(&mut self, end: ConnectionPoint) -> Result<WireId, SessionError> {
        let WireDraw::Drawing(active) = std::mem::take(&mut self.wire_draw) else {
            return Err(SessionError::NotDrawing);
        };

        self.circuit
            .check_connection(active.start, end)
            .map_err(|e| rejected("connect", e))?;
        let end_point = self
            .circuit
            .anchor(end)
            .ok_or_else(|| rejected("connect", WireError::NoSuchTerminal(end.component, end.terminal)))?;

        let path = self
            .router
            .find_path(self.circuit.grid(), active.start_point, end_point);
        let color = self.config.render.wire_color.clone();
        let id = self
            .circuit
            .connect(active.start, end, path, color)
            .map_err(|e| rejected("connect", e))?;
        Ok(id)
    }

    pub fn cancel_wire(&mut self) {
        if self.wire_draw.is_drawing() {
            debug!("Wire draw cancelled");
        }
        self.wire_draw = WireDraw::Idle;
    }

    pub fn remove_wire(&mut self, id: WireId) -> Result<Wire, SessionError> {
        let wire = self
            .circuit
            .disconnect(id)
            .map_err(|e| rejected("remove wire", e))?;
        if self.selection == Selection::Wire(id) {
            self.selection = Selection::None;
        }
        Ok(wire)
    }

    /// Terminal within the hit radius of `at`. Positions off the grid hit nothing.
    pub(crate) fn terminal_at(&self, at: UnitPoint) -> Option<TerminalHit> {
        let grid = self.circuit.grid();
        if !grid.contains(at.cell()) {
            return None;
        }
        find_terminal_near(grid, at, self.config.interaction.terminal_hit_radius)
    }
}

fn rejected(action: &str, err: impl Into<SessionError>) -> SessionError {
    let err = err.into();
    debug!("Rejected {action}: {err}");
    err
}
