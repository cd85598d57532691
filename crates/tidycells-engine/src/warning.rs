//! Non-fatal conditions collected in strict mode

use std::fmt;

use tidycells_core::Position;

use crate::direction::Direction;

/// A condition worth reporting that does not stop the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// No header governs a data cell; its field was left missing
    UnresolvedHeader {
        position: Position,
        field: String,
        direction: Direction,
    },

    /// A naive proximity direction was used to attach a field
    ProximityDirection { field: String, direction: Direction },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnresolvedHeader {
                position,
                field,
                direction,
            } => write!(
                f,
                "no {} header for '{}' governs {}",
                direction, field, position
            ),
            Warning::ProximityDirection { field, direction } => write!(
                f,
                "'{}' attached by proximity ({}); results ignore table regions",
                field, direction
            ),
        }
    }
}
