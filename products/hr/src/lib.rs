//! HR vertical slice: employee records held in an in-memory registry.

mod employee;
mod registry;

use thiserror::Error;

pub use employee::{Employee, EmployeeId, Gender, NewEmployee};
pub use registry::{EmployeeRegistry, seed_employees};

/// Failures raised by registry operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HrError {
    #[error("unrecognized gender `{0}`; expected MALE or FEMALE")]
    UnrecognizedGender(String),
}

pub type HrResult<T> = Result<T, HrError>;
