use serde::Serialize;
use voltlab_catalog::ComponentKind;
use voltlab_engine::{ComponentId, ConnectionPoint, GridPoint, WireId};

/// The active toolbar tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "tool", content = "kind", rename_all = "snake_case")]
pub enum Tool {
    #[default]
    Select,
    Wire,
    /// Places one `ComponentKind` on the next click into an empty cell.
    Place(ComponentKind),
}

/// What is currently selected. At most one thing is selected at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum Selection {
    #[default]
    None,
    Component(ComponentId),
    Wire(WireId),
}

impl Selection {
    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }

    pub fn component(&self) -> Option<ComponentId> {
        match *self {
            Selection::Component(id) => Some(id),
            _ => None,
        }
    }

    pub fn wire(&self) -> Option<WireId> {
        match *self {
            Selection::Wire(id) => Some(id),
            _ => None,
        }
    }
}

/// A wire being drawn from a fixed start terminal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveWire {
    pub start: ConnectionPoint,
    /// Router anchor of `start`.
    pub start_point: GridPoint,
    /// Latest routed preview, `start_point` first.
    pub live_path: Vec<GridPoint>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum WireDraw {
    #[default]
    Idle,
    Drawing(ActiveWire),
}

impl WireDraw {
    pub fn is_drawing(&self) -> bool {
        matches!(self, WireDraw::Drawing(_))
    }

    pub fn active(&self) -> Option<&ActiveWire> {
        match self {
            WireDraw::Drawing(active) => Some(active),
            WireDraw::Idle => None,
        }
    }
}
