//! Fixed-size cell grid holding placed components.
//!
//! Every in-bounds position owns exactly one [`Cell`]. A cell is either vacant
//! (carrying a placeholder [`CellId`]) or occupied by one [`Component`].
//! Component identity is independent of position so that moving a part keeps
//! its id.

use std::collections::HashMap;

use serde::Serialize;
use voltlab_catalog::{ComponentDefinition, ComponentKind};

use crate::geometry::{GridPoint, Rotation};
use crate::ids::{CellId, ComponentId, IdAllocator};

/// Reasons a grid edit was rejected. A rejected edit never changes the grid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    #[error("Position {0} is outside the grid")]
    OutOfBounds(GridPoint),

    #[error("Position {0} is already occupied")]
    Occupied(GridPoint),

    #[error("Component {0} is already at {1}")]
    SamePosition(ComponentId, GridPoint),

    #[error("Unknown component {0}")]
    UnknownComponent(ComponentId),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    pub id: ComponentId,
    pub kind: ComponentKind,
    pub position: GridPoint,
    pub rotation: Rotation,
    pub value: f64,
}

impl Component {
    pub fn definition(&self) -> &'static ComponentDefinition {
        self.kind.definition()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CellContent {
    Vacant { id: CellId },
    Occupied(Component),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub position: GridPoint,
    pub content: CellContent,
}

impl Cell {
    pub fn component(&self) -> Option<&Component> {
        match &self.content {
            CellContent::Occupied(component) => Some(component),
            CellContent::Vacant { .. } => None,
        }
    }

    pub fn is_vacant(&self) -> bool {
        matches!(self.content, CellContent::Vacant { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Grid {
    width: u32,
    height: u32,
    /// Row-major, `width * height` long.
    cells: Vec<Cell>,
    /// Component id -> index into `cells`.
    locations: HashMap<ComponentId, usize>,
}

impl Grid {
    pub fn new(width: u32, height: u32, ids: &mut IdAllocator) -> Self {
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                cells.push(Cell {
                    position: GridPoint::new(x, y),
                    content: CellContent::Vacant { id: ids.cell() },
                });
            }
        }

        Self {
            width,
            height,
            cells,
            locations: HashMap::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, p: GridPoint) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height
    }

    /// Clamps `p` onto the nearest in-bounds cell.
    pub fn clamp(&self, p: GridPoint) -> GridPoint {
        GridPoint::new(
            p.x.clamp(0, self.width as i32 - 1),
            p.y.clamp(0, self.height as i32 - 1),
        )
    }

    fn index_of(&self, p: GridPoint) -> Option<usize> {
        self.contains(p)
            .then(|| p.y as usize * self.width as usize + p.x as usize)
    }

    pub fn cell(&self, p: GridPoint) -> Option<&Cell> {
        self.index_of(p).map(|i| &self.cells[i])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn component_at(&self, p: GridPoint) -> Option<&Component> {
        self.cell(p).and_then(Cell::component)
    }

    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.locations
            .get(&id)
            .and_then(|&i| self.cells[i].component())
    }

    /// Placed components in row-major order.
    pub fn components(&self) -> impl Iterator<Item = &Component> + '_ {
        self.cells.iter().filter_map(Cell::component)
    }

    pub fn component_count(&self) -> usize {
        self.locations.len()
    }

    /// True when routing may not pass through `p`. Out-of-bounds cells are
    /// not obstacles; the router bounds-checks separately.
    pub fn is_obstacle(&self, p: GridPoint) -> bool {
        self.component_at(p).is_some()
    }

    /// Places a new `kind` at `at` with the catalog default value and no rotation.
    pub fn place(
        &mut self,
        at: GridPoint,
        kind: ComponentKind,
        ids: &mut IdAllocator,
    ) -> Result<ComponentId, GridError> {
        let index = self.index_of(at).ok_or(GridError::OutOfBounds(at))?;
        if !self.cells[index].is_vacant() {
            return Err(GridError::Occupied(at));
        }

        let id = ids.component();
        self.cells[index].content = CellContent::Occupied(Component {
            id,
            kind,
            position: at,
            rotation: Rotation::Deg0,
            value: kind.definition().default_value,
        });
        self.locations.insert(id, index);
        Ok(id)
    }

    /// Moves a component to a vacant cell, keeping its id, kind, value and rotation.
    pub fn move_component(
        &mut self,
        id: ComponentId,
        to: GridPoint,
        ids: &mut IdAllocator,
    ) -> Result<(), GridError> {
        let from_index = *self
            .locations
            .get(&id)
            .ok_or(GridError::UnknownComponent(id))?;
        let to_index = self.index_of(to).ok_or(GridError::OutOfBounds(to))?;
        if from_index == to_index {
            return Err(GridError::SamePosition(id, to));
        }
        if !self.cells[to_index].is_vacant() {
            return Err(GridError::Occupied(to));
        }

        let mut component = self.cells[from_index]
            .component()
            .cloned()
            .ok_or(GridError::UnknownComponent(id))?;
        component.position = to;
        self.cells[from_index].content = CellContent::Vacant { id: ids.cell() };
        self.cells[to_index].content = CellContent::Occupied(component);
        self.locations.insert(id, to_index);
        Ok(())
    }

    /// Advances the rotation of `id` by a quarter turn and returns the new rotation.
    pub fn rotate(&mut self, id: ComponentId) -> Result<Rotation, GridError> {
        let component = self.component_mut(id)?;
        component.rotation = component.rotation.next();
        Ok(component.rotation)
    }

    pub fn set_value(&mut self, id: ComponentId, value: f64) -> Result<(), GridError> {
        self.component_mut(id)?.value = value;
        Ok(())
    }

    /// Vacates the cell holding `id` and returns the removed component.
    pub fn remove(
        &mut self,
        id: ComponentId,
        ids: &mut IdAllocator,
    ) -> Result<Component, GridError> {
        let index = *self
            .locations
            .get(&id)
            .ok_or(GridError::UnknownComponent(id))?;
        let component = self.cells[index]
            .component()
            .cloned()
            .ok_or(GridError::UnknownComponent(id))?;
        self.cells[index].content = CellContent::Vacant { id: ids.cell() };
        self.locations.remove(&id);
        Ok(component)
    }

    fn component_mut(&mut self, id: ComponentId) -> Result<&mut Component, GridError> {
        let index = *self
            .locations
            .get(&id)
            .ok_or(GridError::UnknownComponent(id))?;
        match &mut self.cells[index].content {
            CellContent::Occupied(component) => Ok(component),
            CellContent::Vacant { .. } => Err(GridError::UnknownComponent(id)),
        }
    }
}
