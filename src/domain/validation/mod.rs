//! Validation - output checks and the audit snapshot record.

mod audit_snapshot;
mod calculation_validator;

pub use audit_snapshot::{dataset_hash, AuditSnapshot, DEFAULT_ENGINE_VERSION, SNAPSHOT_FILE_PREFIX};
pub use calculation_validator::{
    CalculationValidator, ValidationFailure, ValidationReport, WEIGHT_SUM_TOLERANCE,
};
