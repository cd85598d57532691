//! Options for engine stages

use crate::record::ValueSource;

/// Options for [`CellSet::enhead_with`](crate::CellSet::enhead_with)
#[derive(Debug, Clone, Default)]
pub struct EnheadOptions {
    /// Collect a warning for every data cell left without a header
    pub strict: bool,
}

/// Options for [`CellSet::behead_with`](crate::CellSet::behead_with)
#[derive(Debug, Clone)]
pub struct BeheadOptions {
    /// Collect a warning for every data cell left without a header
    pub strict: bool,
    /// Discard blank cells of the header level instead of using them as
    /// headers (default: true)
    pub drop_blank: bool,
}

impl Default for BeheadOptions {
    fn default() -> Self {
        Self {
            strict: false,
            drop_blank: true,
        }
    }
}

impl BeheadOptions {
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}

/// Options for [`spatter_with`](crate::spatter_with)
#[derive(Debug, Clone, Default)]
pub struct SpatterOptions {
    /// Where the widened values come from (default: the data cell value)
    pub values: ValueSource,
}
