use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TaxError;

/// Filing status selecting which bracket schedule applies.
///
/// Each status has a stable integer code (0-3) used by the console and
/// batch front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilingStatus {
    Single,
    /// Married filing jointly, also used by a qualifying widow(er).
    MarriedJointly,
    MarriedSeparately,
    HeadOfHousehold,
}

impl FilingStatus {
    /// All statuses in code order.
    pub const ALL: [FilingStatus; 4] = [
        Self::Single,
        Self::MarriedJointly,
        Self::MarriedSeparately,
        Self::HeadOfHousehold,
    ];

    pub fn code(&self) -> i32 {
        match self {
            Self::Single => 0,
            Self::MarriedJointly => 1,
            Self::MarriedSeparately => 2,
            Self::HeadOfHousehold => 3,
        }
    }

    /// Looks up a status by its integer code.
    ///
    /// # Errors
    ///
    /// Returns [`TaxError::InvalidFilingStatus`] for any code outside `0..=3`.
    pub fn from_code(code: i32) -> Result<Self, TaxError> {
        match code {
            0 => Ok(Self::Single),
            1 => Ok(Self::MarriedJointly),
            2 => Ok(Self::MarriedSeparately),
            3 => Ok(Self::HeadOfHousehold),
            other => Err(TaxError::InvalidFilingStatus(other)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::MarriedJointly => "Married filing jointly",
            Self::MarriedSeparately => "Married filing separately",
            Self::HeadOfHousehold => "Head of household",
        }
    }
}

impl TryFrom<i32> for FilingStatus {
    type Error = TaxError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl fmt::Display for FilingStatus {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}
