//! # voltlab-engine
//!
//! The deterministic core of the Circuit Lab editor: the cell grid that holds
//! placed components, terminal geometry, the A* wire router and the
//! corner-smoothing path renderer.
//!
//! Everything here is synchronous and owned. A [`Circuit`] holds the whole
//! editable state of one session; the interactive layer on top of it lives in
//! `voltlab-lab`.

pub mod circuit;
pub mod config;
pub mod geometry;
pub mod grid;
pub mod ids;
pub mod router;
pub mod smoothing;
pub mod terminal;
pub mod wire;

pub use circuit::Circuit;
pub use config::{ConfigError, LabConfig};
pub use geometry::{GridPoint, PixelPoint, Rotation, UnitPoint};
pub use grid::{Cell, CellContent, Component, Grid, GridError};
pub use ids::{CellId, ComponentId, IdAllocator, WireId};
pub use router::{Router, RouterConfig};
pub use smoothing::{smooth_path, DrawablePath, PathCommand, SmoothingStyle};
pub use terminal::{find_terminal_near, TerminalHit};
pub use wire::{ConnectionPoint, Wire, WireError, WireSet};
