//! aibom-policy - governance policy engine for AI Bills of Materials
//!
//! This library evaluates declarative policy rules against an AIBOM (the
//! models, tools, frameworks and external services an AI system is built
//! from), following hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`aibom`): BOM model, rules, rule registry and engine
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Filesystem, console and report formatters
//! - **Shared** (`shared`): Error types, exit codes and file safety checks
//!
//! # Example
//!
//! ```no_run
//! use aibom_policy::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = EvaluatePoliciesUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//!     RuleRegistry::with_builtin_rules(),
//! );
//!
//! let request = EvaluationRequest::new(
//!     PathBuf::from("aibom.json"),
//!     vec![PathBuf::from("policy.yaml")],
//! );
//! let response = use_case.execute(request)?;
//!
//! let output = TextFormatter::new(false).format(&response.report)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod aibom;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextFormatter,
    };
    pub use crate::aibom::domain::{
        Aibom, Component, EvaluationResult, Policy, PolicyDocument, PolicyFormat, Rule,
        RuleDefinition, Service, Severity, Violation,
    };
    pub use crate::aibom::rules::RuleParams;
    pub use crate::aibom::services::{PolicyEngine, RuleRegistry};
    pub use crate::application::dto::{EvaluationRequest, EvaluationResponse, OutputFormat};
    pub use crate::application::read_models::EvaluationReport;
    pub use crate::application::use_cases::EvaluatePoliciesUseCase;
    pub use crate::ports::inbound::PolicyEvaluationPort;
    pub use crate::ports::outbound::{
        BomReader, OutputPresenter, PolicyReader, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::error::{ParamError, PolicyError};
    pub use crate::shared::Result;
}
