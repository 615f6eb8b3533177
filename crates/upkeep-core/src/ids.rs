//! ID prefixes and generation.
//!
//! IDs have the form `{prefix}-{8 hex chars}`, e.g. `run-a3f8b2c1`.

use crate::errors::CoreError;

pub const PREFIX_PLANNED_TASK: &str = "pln";
pub const PREFIX_TEMPLATE: &str = "tpl";
pub const PREFIX_RUN: &str = "run";
pub const PREFIX_AUDIT: &str = "aud";

/// Generate a fresh random ID with the given prefix.
///
/// # Errors
///
/// Returns `CoreError::IdGeneration` if the OS random source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes).map_err(|e| CoreError::IdGeneration(e.to_string()))?;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{prefix}-{hex}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_id_correct_format() {
        let id = generate_id(PREFIX_RUN).unwrap();
        assert!(id.starts_with("run-"), "ID should start with 'run-': {id}");
        assert_eq!(id.len(), 12, "ID should be 12 chars: {id}");
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generated_ids_differ() {
        let a = generate_id(PREFIX_AUDIT).unwrap();
        let b = generate_id(PREFIX_AUDIT).unwrap();
        assert_ne!(a, b);
    }
}
