//! Measurement constraints passed from a parent to its children

use std::fmt;

/// Number of low bits a packed constraint reserves for the size.
const MODE_SHIFT: u32 = 30;

/// Largest size a packed constraint can carry.
pub const MAX_PACKED_SIZE: u32 = (1 << MODE_SHIFT) - 1;

/// How a parent bounds the size of a child along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeasureMode {
    /// No bound; the child takes its natural size.
    Unspecified,
    /// The child must take exactly the given size.
    Exactly,
    /// The given size is an upper bound only.
    AtMost,
}

impl MeasureMode {
    /// Raw wire value of this mode.
    pub const fn raw(self) -> i32 {
        match self {
            MeasureMode::Unspecified => 0,
            MeasureMode::Exactly => 1,
            MeasureMode::AtMost => 2,
        }
    }

    fn label(self) -> &'static str {
        match self {
            MeasureMode::Unspecified => "UNSPECIFIED",
            MeasureMode::Exactly => "EXACTLY",
            MeasureMode::AtMost => "AT_MOST",
        }
    }
}

impl TryFrom<i32> for MeasureMode {
    type Error = ConstraintError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(MeasureMode::Unspecified),
            1 => Ok(MeasureMode::Exactly),
            2 => Ok(MeasureMode::AtMost),
            mode => Err(ConstraintError::InvalidArgument { mode }),
        }
    }
}

impl fmt::Display for MeasureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error raised when a constraint is built from an unrecognized mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintError {
    InvalidArgument { mode: i32 },
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintError::InvalidArgument { mode } => write!(
                f,
                "invalid argument: mode {mode} must be UNSPECIFIED, EXACTLY, or AT_MOST"
            ),
        }
    }
}

impl std::error::Error for ConstraintError {}

/// A size plus the mode that says how strictly the size applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Constraint {
    size: u32,
    mode: MeasureMode,
}

impl Constraint {
    pub const fn new(size: u32, mode: MeasureMode) -> Self {
        Self { size, mode }
    }

    /// Builds a constraint from a raw mode value, rejecting unknown modes.
    pub fn make(size: u32, mode: i32) -> Result<Self, ConstraintError> {
        let mode = MeasureMode::try_from(mode)?;
        Ok(Self::new(size, mode))
    }

    pub const fn exactly(size: u32) -> Self {
        Self::new(size, MeasureMode::Exactly)
    }

    pub const fn at_most(size: u32) -> Self {
        Self::new(size, MeasureMode::AtMost)
    }

    pub const fn unspecified(size: u32) -> Self {
        Self::new(size, MeasureMode::Unspecified)
    }

    #[inline]
    pub const fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub const fn mode(&self) -> MeasureMode {
        self.mode
    }

    /// Returns true if the parent imposes any bound at all.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.mode != MeasureMode::Unspecified
    }

    /// Encodes the constraint into a single word: mode in the top two bits,
    /// size truncated to [`MAX_PACKED_SIZE`] in the rest.
    pub fn pack(self) -> u32 {
        ((self.mode.raw() as u32) << MODE_SHIFT) | (self.size & MAX_PACKED_SIZE)
    }

    /// Decodes a word produced by [`Constraint::pack`].
    pub fn unpack(packed: u32) -> Result<Self, ConstraintError> {
        let mode = (packed >> MODE_SHIFT) as i32;
        Self::make(packed & MAX_PACKED_SIZE, mode)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MeasureSpec: [{}, {}]", self.size, self.mode)
    }
}

#[cfg(test)]
#[path = "tests/constraint_tests.rs"]
mod tests;
