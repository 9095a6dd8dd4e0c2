use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Academic year a student is enrolled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
pub enum StudentLevel {
    B2,
    B3,
    M1,
    M2,
}

#[derive(Debug, Error)]
#[error("unknown student level `{0}`")]
pub struct UnknownStudentLevel(pub String);

impl StudentLevel {
    pub const ALL: [StudentLevel; 4] = [Self::B2, Self::B3, Self::M1, Self::M2];

    pub fn code(&self) -> &'static str {
        match self {
            Self::B2 => "B2",
            Self::B3 => "B3",
            Self::M1 => "M1",
            Self::M2 => "M2",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::B2 => "Bachelor 2",
            Self::B3 => "Bachelor 3",
            Self::M1 => "Master 1",
            Self::M2 => "Master 2",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::B2 => "Second year of the bachelor's programme",
            Self::B3 => "Third and final year of the bachelor's programme",
            Self::M1 => "First year of the master's programme",
            Self::M2 => "Second and final year of the master's programme",
        }
    }

    /// Badge color used by the admin UI, as a hex RGB string.
    pub fn color(&self) -> &'static str {
        match self {
            Self::B2 => "#3B82F6",
            Self::B3 => "#10B981",
            Self::M1 => "#F59E0B",
            Self::M2 => "#EF4444",
        }
    }
}

impl fmt::Display for StudentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for StudentLevel {
    type Err = UnknownStudentLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownStudentLevel(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StudentLevelInfo {
    pub level: StudentLevel,
    pub label: String,
    pub description: String,
    pub color: String,
}

impl From<StudentLevel> for StudentLevelInfo {
    fn from(level: StudentLevel) -> Self {
        Self {
            level,
            label: level.label().to_string(),
            description: level.description().to_string(),
            color: level.color().to_string(),
        }
    }
}

impl StudentLevelInfo {
    pub fn table() -> Vec<Self> {
        StudentLevel::ALL.into_iter().map(Self::from).collect()
    }
}
