//! Border types

/// Border presence for each side of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Borders {
    pub left: Option<BorderLine>,
    pub right: Option<BorderLine>,
    pub top: Option<BorderLine>,
    pub bottom: Option<BorderLine>,
}

impl Borders {
    /// No borders on any side
    pub fn new() -> Self {
        Self::default()
    }

    /// The same line on every side
    pub fn all(line: BorderLine) -> Self {
        Self {
            left: Some(line),
            right: Some(line),
            top: Some(line),
            bottom: Some(line),
        }
    }

    pub fn with_top(mut self, line: BorderLine) -> Self {
        self.top = Some(line);
        self
    }

    pub fn with_bottom(mut self, line: BorderLine) -> Self {
        self.bottom = Some(line);
        self
    }

    pub fn with_left(mut self, line: BorderLine) -> Self {
        self.left = Some(line);
        self
    }

    pub fn with_right(mut self, line: BorderLine) -> Self {
        self.right = Some(line);
        self
    }

    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    pub fn has_top(&self) -> bool {
        self.top.is_some()
    }

    pub fn has_bottom(&self) -> bool {
        self.bottom.is_some()
    }

    /// Check if no side has a border
    pub fn is_empty(&self) -> bool {
        !(self.has_left() || self.has_right() || self.has_top() || self.has_bottom())
    }
}

/// Border line styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderLine {
    #[default]
    Thin,
    Medium,
    Thick,
    Dashed,
    Dotted,
    Double,
    Hair,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_presence() {
        let borders = Borders::new().with_bottom(BorderLine::Double);
        assert!(borders.has_bottom());
        assert!(!borders.has_top());
        assert!(!borders.is_empty());
        assert!(Borders::new().is_empty());
        assert!(Borders::all(BorderLine::Thin).has_left());
    }
}
