/// Selects one of the two measured dimensions of a node.
///
/// Width is resolved on the horizontal axis, height on the vertical one.
/// The vertical stack consumes the vertical axis additively and shares the
/// horizontal axis between its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Width.
    Horizontal,

    /// Height.
    Vertical,
}

impl Axis {
    /// Returns the opposite axis.
    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}
