use log::debug;
use voltlab_catalog::ComponentKind;

use crate::geometry::{GridPoint, Rotation};
use crate::grid::{Component, Grid, GridError};
use crate::ids::{ComponentId, IdAllocator, WireId};
use crate::terminal;
use crate::wire::{ConnectionPoint, Wire, WireError, WireSet};

/// Grid, wires and the id allocator of one editing session.
///
/// Every mutation that invalidates wires (move, rotate, remove) drops the
/// affected wires in the same call, so no wire ever references a component
/// that is gone or has changed geometry.
#[derive(Debug, Clone)]
pub struct Circuit {
    ids: IdAllocator,
    grid: Grid,
    wires: WireSet,
}

impl Circuit {
    pub fn new(width: u32, height: u32) -> Self {
        let mut ids = IdAllocator::new();
        let grid = Grid::new(width, height, &mut ids);
        Self {
            ids,
            grid,
            wires: WireSet::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn wires(&self) -> &WireSet {
        &self.wires
    }

    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.grid.component(id)
    }

    pub fn place(&mut self, at: GridPoint, kind: ComponentKind) -> Result<ComponentId, GridError> {
        let id = self.grid.place(at, kind, &mut self.ids)?;
        debug!("Placed {kind} {id} at {at}");
        Ok(id)
    }

    /// Moves `id` to `to`; returns the ids of the wires that were dropped.
    pub fn move_component(
        &mut self,
        id: ComponentId,
        to: GridPoint,
    ) -> Result<Vec<WireId>, GridError> {
        self.grid.move_component(id, to, &mut self.ids)?;
        Ok(self.drop_wires(id))
    }

    /// Rotates `id` a quarter turn; returns the new rotation and the dropped wires.
    pub fn rotate(&mut self, id: ComponentId) -> Result<(Rotation, Vec<WireId>), GridError> {
        let rotation = self.grid.rotate(id)?;
        Ok((rotation, self.drop_wires(id)))
    }

    pub fn set_value(&mut self, id: ComponentId, value: f64) -> Result<(), GridError> {
        self.grid.set_value(id, value)
    }

    /// Removes `id` and every wire attached to it.
    pub fn remove(&mut self, id: ComponentId) -> Result<(Component, Vec<WireId>), GridError> {
        let component = self.grid.remove(id, &mut self.ids)?;
        Ok((component, self.drop_wires(id)))
    }

    fn drop_wires(&mut self, id: ComponentId) -> Vec<WireId> {
        let dropped = self.wires.remove_touching(id);
        if !dropped.is_empty() {
            debug!("Dropped {} wire(s) attached to {id}", dropped.len());
        }
        dropped
    }

    /// Checks that a wire between `from` and `to` could be committed.
    pub fn check_connection(
        &self,
        from: ConnectionPoint,
        to: ConnectionPoint,
    ) -> Result<(), WireError> {
        self.check_terminal(from)?;
        self.check_terminal(to)?;
        self.wires.check(from, to)
    }

    fn check_terminal(&self, point: ConnectionPoint) -> Result<(), WireError> {
        let component = self
            .grid
            .component(point.component)
            .ok_or(WireError::UnknownComponent(point.component))?;
        if point.terminal >= component.definition().terminal_count() {
            return Err(WireError::NoSuchTerminal(point.component, point.terminal));
        }
        Ok(())
    }

    /// Commits a wire along an already routed `path`.
    pub fn connect(
        &mut self,
        from: ConnectionPoint,
        to: ConnectionPoint,
        path: Vec<GridPoint>,
        color: impl Into<String>,
    ) -> Result<WireId, WireError> {
        self.check_connection(from, to)?;
        let id = self.ids.wire();
        self.wires.insert(Wire {
            id,
            from,
            to,
            path,
            color: color.into(),
        })?;
        debug!("Connected {from} -> {to} as {id}");
        Ok(id)
    }

    pub fn disconnect(&mut self, id: WireId) -> Result<Wire, WireError> {
        self.wires.remove(id)
    }

    /// Router-space anchor of a terminal, if it exists.
    pub fn anchor(&self, point: ConnectionPoint) -> Option<GridPoint> {
        terminal::locate(&self.grid, point).map(|hit| hit.snapped)
    }
}
