use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub fn raw(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

id_type!(
    /// Identity of a placed component. Survives moves and rotations.
    ComponentId,
    "c"
);
id_type!(
    /// Identity of a committed wire.
    WireId,
    "w"
);
id_type!(
    /// Placeholder identity of a vacant cell.
    CellId,
    "e"
);

/// Single source of identities for one editing session.
///
/// Values come from one monotonic counter shared by every id kind, so no
/// two entities of a session ever share a raw value.
#[derive(Debug, Default, Clone)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&mut self) -> u64 {
        self.next += 1;
        self.next
    }

    pub fn component(&mut self) -> ComponentId {
        ComponentId(self.bump())
    }

    pub fn wire(&mut self) -> WireId {
        WireId(self.bump())
    }

    pub fn cell(&mut self) -> CellId {
        CellId(self.bump())
    }
}
