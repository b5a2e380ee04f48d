//! Tables

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::orders::ValidationError;

/// A validated table number, always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TableNumber(i32);

impl TableNumber {
    /// Validates a raw table number.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTableNumber`] when the value is below 1 or does not fit
    /// the stored integer width.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        i32::try_from(value)
            .ok()
            .filter(|number| *number >= 1)
            .map(Self)
            .ok_or(ValidationError::InvalidTableNumber(value))
    }

    /// Returns the underlying number.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i64> for TableNumber {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Display for TableNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}
