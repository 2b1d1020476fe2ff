//! # voltlab-lab
//!
//! The interactive layer of the Circuit Lab editor. A [`Session`] owns one
//! [`voltlab_engine::Circuit`] together with the editor state around it
//! (active tool, selection, wire drawing, drag and hover) and exposes two
//! surfaces over it:
//!
//! * command entry points such as [`Session::place_component`] and
//!   [`Session::commit_wire`], used by scripts and tests;
//! * raw pointer and keyboard events ([`Session::pointer_down`],
//!   [`Session::key_down`], ...) that are hit-tested and translated into
//!   those commands.
//!
//! [`Session::snapshot`] produces a read-only, serializable view with every
//! geometric detail resolved, which [`svg_export`] turns into an SVG scene.

mod input;
pub mod script;
mod session;
pub mod snapshot;
mod state;
pub mod svg_export;

pub use input::{Key, PointerButton};
pub use script::{ReplayReport, SceneScript, ScriptError, Step, TerminalRef};
pub use session::{Session, SessionError};
pub use snapshot::{ComponentView, PreviewView, Snapshot, TerminalView, WireView};
pub use state::{ActiveWire, Selection, Tool, WireDraw};
