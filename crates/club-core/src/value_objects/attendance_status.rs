//! Attendance status - the closed set of per-meeting attendance states

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Attendance of one member at one meeting
///
/// `Absent` is the default for any pair without a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    #[default]
    Absent,
    Attended,
    Cancelled,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 3] = [Self::Absent, Self::Attended, Self::Cancelled];

    /// Persisted form
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Attended => "attended",
            Self::Cancelled => "cancelled",
        }
    }

    /// Label shown on the admin attendance sheet
    pub fn label(self) -> &'static str {
        match self {
            Self::Absent => "불참",
            Self::Attended => "참석",
            Self::Cancelled => "취소",
        }
    }
}

impl FromStr for AttendanceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "absent" => Ok(Self::Absent),
            "attended" => Ok(Self::Attended),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(DomainError::InvalidAttendanceStatus(other.to_string())),
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
