use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PunchType {
    In,
    Out,
}

impl PunchType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PunchType::In => "in",
            PunchType::Out => "out",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "in" => Some(PunchType::In),
            "out" => Some(PunchType::Out),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PunchType::In => "IN",
            PunchType::Out => "OUT",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, PunchType::In)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, PunchType::Out)
    }
}

impl fmt::Display for PunchType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}
