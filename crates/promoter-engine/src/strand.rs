use serde::{Deserialize, Serialize};
use std::fmt;

/// Genomic orientation of a gene.
///
/// Annotation services encode strand as `1` / `-1`; that integer form is
/// only used when (de)serializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Forward),
            -1 => Some(Self::Reverse),
            _ => None,
        }
    }

    pub fn code(self) -> i8 {
        match self {
            Self::Forward => 1,
            Self::Reverse => -1,
        }
    }
}

impl TryFrom<i8> for Strand {
    type Error = String;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        Self::from_code(code.into()).ok_or_else(|| format!("invalid strand {code}, expected 1 or -1"))
    }
}

impl From<Strand> for i8 {
    fn from(strand: Strand) -> Self {
        strand.code()
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
