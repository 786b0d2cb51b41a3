/// Numeric floors a plan must satisfy before it is sent to the platform.
use std::fmt;

use crate::types::Plan;

/// Smallest non-zero memory limit accepted, in bytes (4 MiB).
pub const MIN_MEMORY: i64 = 4 * 1024 * 1024;

/// Smallest CPU share accepted.
pub const MIN_CPU_SHARE: i64 = 2;

/// A single rule a plan failed. `Display` yields the user-facing warning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Memory is set but below [`MIN_MEMORY`].
    MemoryTooLow,
    /// CPU share is below [`MIN_CPU_SHARE`].
    CpuShareTooLow,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MemoryTooLow => f.write_str("Minimum memory limit allowed is 4MB!"),
            Self::CpuShareTooLow => f.write_str("The minimum allowed cpu-shares is 2!"),
        }
    }
}

/// Check `plan` against every rule.
///
/// Violations come back in a fixed order: memory first, then cpu share.
/// An empty vector means the plan may be submitted.
#[must_use]
pub fn validate(plan: &Plan) -> Vec<Violation> {
    let mut violations = Vec::new();
    if plan.memory != 0 && plan.memory < MIN_MEMORY {
        violations.push(Violation::MemoryTooLow);
    }
    if plan.cpu_share < MIN_CPU_SHARE {
        violations.push(Violation::CpuShareTooLow);
    }
    violations
}
