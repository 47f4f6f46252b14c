//! Member lifecycle status and join source

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Member status. The only transition is `Active -> Deactivated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    #[default]
    Active,
    Deactivated,
}

impl MemberStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Deactivated => "deactivated",
        }
    }
}

impl FromStr for MemberStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "deactivated" => Ok(Self::Deactivated),
            other => Err(DomainError::InvalidMemberStatus(other.to_string())),
        }
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a member heard about the club
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoinSource {
    #[serde(rename = "당근마켓", alias = "daangn")]
    Daangn,
    #[serde(rename = "오픈채팅", alias = "open_chat")]
    OpenChat,
    #[serde(rename = "지인소개", alias = "referral")]
    Referral,
}

impl JoinSource {
    /// Persisted and displayed label
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daangn => "당근마켓",
            Self::OpenChat => "오픈채팅",
            Self::Referral => "지인소개",
        }
    }
}

impl FromStr for JoinSource {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "당근마켓" | "daangn" => Ok(Self::Daangn),
            "오픈채팅" | "open_chat" => Ok(Self::OpenChat),
            "지인소개" | "referral" => Ok(Self::Referral),
            other => Err(DomainError::InvalidJoinSource(other.to_string())),
        }
    }
}

impl fmt::Display for JoinSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
