use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every policy passed
    Success = 0,
    /// At least one policy has critical or high violations
    PolicyViolations = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, parse error, unknown rule type, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::PolicyViolations => write!(f, "Policy Violations (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while decoding the parameter map of a single rule.
///
/// These never carry the rule type; the registry wraps them in
/// [`PolicyError::InvalidRule`] so the failing rule can be identified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("parameter '{name}' is required")]
    Missing { name: String },

    #[error("parameter '{name}' must be {expected}")]
    WrongType { name: String, expected: String },

    #[error("parameter '{name}' is out of range: {details}")]
    OutOfRange { name: String, details: String },
}

/// Errors produced while loading and resolving policy documents and BOMs.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Unknown rule type: {rule_type}\n\n💡 Hint: Registered rule types are: {}", .known.join(", "))]
    UnknownRuleType {
        rule_type: String,
        known: Vec<String>,
    },

    #[error("Invalid rule '{rule_type}' (rules[{index}]): {source}")]
    InvalidRule {
        rule_type: String,
        index: usize,
        #[source]
        source: ParamError,
    },

    #[error("Invalid severity: '{value}'\n\n💡 Hint: Severity must be one of: critical, high, medium, low")]
    InvalidSeverity { value: String },

    #[error("Failed to read policy file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    PolicyReadError { path: PathBuf, details: String },

    #[error("Failed to parse policy document\nDetails: {details}\n\n💡 Hint: Please verify that the policy document is valid JSON, TOML or YAML")]
    PolicyParseError { details: String },

    #[error("Failed to read AIBOM file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    BomReadError { path: PathBuf, details: String },

    #[error("Failed to parse AIBOM file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the AIBOM is a valid JSON document")]
    BomParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
