//! The impls and functions
//!
use std::{cmp::Ordering, fmt, process};
use log::*;
use crate::checker::{CheckStatus, Checker};

impl CheckStatus {
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckStatus::Ok => 0,
            CheckStatus::Warning => 1,
            CheckStatus::Critical => 2,
            CheckStatus::Unknown => 3,
        }
    }
    fn severity(&self) -> Option<u8> {
        match self {
            CheckStatus::Ok => Some(0),
            CheckStatus::Warning => Some(1),
            CheckStatus::Critical => Some(2),
            CheckStatus::Unknown => None,
        }
    }
}

impl PartialOrd for CheckStatus {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.severity(), other.severity()) {
            (Some(left), Some(right)) => Some(left.cmp(&right)),
            (None, None) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CheckStatus::Ok => "OK",
            CheckStatus::Warning => "WARNING",
            CheckStatus::Critical => "CRITICAL",
            CheckStatus::Unknown => "UNKNOWN",
        };
        write!(f, "{}", text)
    }
}

impl Checker {
    pub fn new(
        status: CheckStatus,
        message: impl Into<String>,
    ) -> Self
    {
        Checker {
            name: String::new(),
            status,
            message: message.into(),
        }
    }
    pub fn ok(message: impl Into<String>) -> Self { Checker::new(CheckStatus::Ok, message) }
    pub fn warning(message: impl Into<String>) -> Self { Checker::new(CheckStatus::Warning, message) }
    pub fn critical(message: impl Into<String>) -> Self { Checker::new(CheckStatus::Critical, message) }
    pub fn unknown(message: impl Into<String>) -> Self { Checker::new(CheckStatus::Unknown, message) }
    /// Sets the name, which is printed in front of the status.
    pub fn with_name(
        mut self,
        name: impl Into<String>,
    ) -> Self
    {
        self.name = name.into();
        self
    }
    pub fn exit_code(&self) -> i32 {
        self.status.exit_code()
    }
    /// Print the checker line to stdout and terminate the process with the exit code of the status.
    pub fn exit(&self) -> ! {
        info!("{} exits with status {} ({})", self.name, self.status, self.exit_code());
        println!("{}", self);
        process::exit(self.exit_code())
    }
}

impl fmt::Display for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}: {}", self.status, self.message)
        } else {
            write!(f, "{} {}: {}", self.name, self.status, self.message)
        }
    }
}
