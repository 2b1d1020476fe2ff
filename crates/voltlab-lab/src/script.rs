//! Scene scripts.
//!
//! A scene script is a TOML list of editing steps replayed through the
//! [`Session`] command API, the same way a user would build the scene:
//!
//! ```toml
//! [[step]]
//! action = "place"
//! kind = "resistor"
//! at = [5, 5]
//!
//! [[step]]
//! action = "place"
//! kind = "led"
//! at = [10, 5]
//!
//! [[step]]
//! action = "wire"
//! from = { at = [5, 5], terminal = 1 }
//! to = { at = [10, 5], terminal = 0 }
//! ```
//!
//! Components are addressed by the cell they occupy at the time the step runs.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Deserialize;
use voltlab_catalog::ComponentKind;
use voltlab_engine::{ComponentId, ConnectionPoint, GridPoint};

use crate::session::{Session, SessionError};

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Failed to read scene script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse scene script: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneScript {
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TerminalRef {
    pub at: GridPoint,
    pub terminal: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Place { kind: ComponentKind, at: GridPoint },
    Move { from: GridPoint, to: GridPoint },
    Rotate { at: GridPoint },
    Remove { at: GridPoint },
    Value { at: GridPoint, value: f64 },
    Wire { from: TerminalRef, to: TerminalRef },
}

/// Outcome of replaying a script.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplayReport {
    pub applied: usize,
    /// Rejected steps as `(step index, reason)`.
    pub rejected: Vec<(usize, String)>,
}

impl ReplayReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

impl SceneScript {
    pub fn from_toml_str(source: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let source = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Replays every step against `session`. Rejected steps are skipped and
    /// reported; they never stop the replay.
    pub fn apply(&self, session: &mut Session) -> ReplayReport {
        let mut report = ReplayReport::default();
        for (index, step) in self.steps.iter().enumerate() {
            match step.apply(session) {
                Ok(()) => {
                    debug!("Step {index} applied: {step:?}");
                    report.applied += 1;
                }
                Err(err) => {
                    warn!("Step {index} rejected: {err}");
                    report.rejected.push((index, err.to_string()));
                }
            }
        }
        report
    }
}

impl Step {
    pub fn apply(&self, session: &mut Session) -> Result<(), SessionError> {
        match *self {
            Step::Place { kind, at } => {
                session.place_component(at, kind)?;
            }
            Step::Move { from, to } => {
                let id = occupant(session, from)?;
                session.move_component(id, to)?;
            }
            Step::Rotate { at } => {
                let id = occupant(session, at)?;
                session.rotate_component(id)?;
            }
            Step::Remove { at } => {
                let id = occupant(session, at)?;
                session.remove_component(id)?;
            }
            Step::Value { at, value } => {
                let id = occupant(session, at)?;
                session.set_component_value(id, value)?;
            }
            Step::Wire { from, to } => {
                let start = ConnectionPoint::new(occupant(session, from.at)?, from.terminal);
                let end = ConnectionPoint::new(occupant(session, to.at)?, to.terminal);
                session.start_wire(start)?;
                session.commit_wire(end)?;
            }
        }
        Ok(())
    }
}

fn occupant(session: &Session, at: GridPoint) -> Result<ComponentId, SessionError> {
    session
        .component_at(at)
        .map(|c| c.id)
        .ok_or(SessionError::EmptyCell(at))
}
