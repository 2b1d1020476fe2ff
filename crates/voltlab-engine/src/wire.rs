use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::GridPoint;
use crate::ids::{ComponentId, WireId};

/// A terminal, identified by its owning component and its catalog index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConnectionPoint {
    pub component: ComponentId,
    pub terminal: usize,
}

impl ConnectionPoint {
    pub fn new(component: ComponentId, terminal: usize) -> Self {
        Self {
            component,
            terminal,
        }
    }
}

impl fmt::Display for ConnectionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.component, self.terminal)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WireError {
    #[error("A wire cannot start and end on terminal {0}")]
    SameTerminal(ConnectionPoint),

    #[error("Terminals {0} and {1} are already connected")]
    Duplicate(ConnectionPoint, ConnectionPoint),

    #[error("Unknown component {0}")]
    UnknownComponent(ComponentId),

    #[error("Component {0} has no terminal {1}")]
    NoSuchTerminal(ComponentId, usize),

    #[error("Unknown wire {0}")]
    UnknownWire(WireId),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wire {
    pub id: WireId,
    pub from: ConnectionPoint,
    pub to: ConnectionPoint,
    /// Routed waypoints in grid space, start to end inclusive.
    pub path: Vec<GridPoint>,
    pub color: String,
}

impl Wire {
    pub fn touches(&self, component: ComponentId) -> bool {
        self.from.component == component || self.to.component == component
    }

    /// True when this wire joins `a` and `b` in either direction.
    pub fn connects(&self, a: ConnectionPoint, b: ConnectionPoint) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// Committed wires in creation order.
#[derive(Debug, Clone, Default)]
pub struct WireSet {
    wires: Vec<Wire>,
}

impl WireSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Wire> + '_ {
        self.wires.iter()
    }

    pub fn len(&self) -> usize {
        self.wires.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wires.is_empty()
    }

    pub fn get(&self, id: WireId) -> Option<&Wire> {
        self.wires.iter().find(|w| w.id == id)
    }

    pub fn contains_pair(&self, a: ConnectionPoint, b: ConnectionPoint) -> bool {
        self.wires.iter().any(|w| w.connects(a, b))
    }

    /// Checks the self-loop and duplicate-pair rules without inserting.
    pub fn check(&self, from: ConnectionPoint, to: ConnectionPoint) -> Result<(), WireError> {
        if from == to {
            return Err(WireError::SameTerminal(from));
        }
        if self.contains_pair(from, to) {
            return Err(WireError::Duplicate(from, to));
        }
        Ok(())
    }

    pub fn insert(&mut self, wire: Wire) -> Result<WireId, WireError> {
        self.check(wire.from, wire.to)?;
        let id = wire.id;
        self.wires.push(wire);
        Ok(id)
    }

    pub fn remove(&mut self, id: WireId) -> Result<Wire, WireError> {
        let index = self
            .wires
            .iter()
            .position(|w| w.id == id)
            .ok_or(WireError::UnknownWire(id))?;
        Ok(self.wires.remove(index))
    }

    /// Drops every wire attached to `component` and returns their ids.
    pub fn remove_touching(&mut self, component: ComponentId) -> Vec<WireId> {
        let mut removed = Vec::new();
        self.wires.retain(|w| {
            let touching = w.touches(component);
            if touching {
                removed.push(w.id);
            }
            !touching
        });
        removed
    }

    /// Topmost wire whose routed path passes through `cell`.
    pub fn wire_through(&self, cell: GridPoint) -> Option<&Wire> {
        self.wires.iter().rev().find(|w| w.path.contains(&cell))
    }
}
