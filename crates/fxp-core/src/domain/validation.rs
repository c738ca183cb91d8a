use crate::domain::{error::DomainError, value_objects::Framework};

const MIN_NAME_LEN: usize = 2;
const MAX_NAME_LEN: usize = 50;

/// Operating-system device names that cannot be used as directory names.
const RESERVED_NAMES: &[&str] = &[
    "con", "aux", "nul", "prn", "com1", "com2", "com3", "com4", "com5", "com6", "com7", "com8",
    "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Validate a proposed resource name.
    ///
    /// Rules apply in order and the first failing rule wins.
    pub fn validate_resource_name(name: &str) -> Result<(), DomainError> {
        match name_violation(name) {
            None => Ok(()),
            Some(reason) => Err(DomainError::InvalidResourceName {
                name: name.to_string(),
                reason: reason.to_string(),
            }),
        }
    }

    pub fn validate_framework(tag: &str) -> Result<Framework, DomainError> {
        tag.parse()
    }
}

fn name_violation(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("Resource name is required");
    }

    let len = name.chars().count();
    if len < MIN_NAME_LEN {
        return Some("Resource name must be at least 2 characters long");
    }
    if len > MAX_NAME_LEN {
        return Some("Resource name must be less than 50 characters long");
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Some("Resource name can only contain letters, numbers, hyphens, and underscores");
    }

    if name.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
        return Some("Resource name cannot start with a number or hyphen");
    }

    let lowered = name.to_ascii_lowercase();
    if RESERVED_NAMES.contains(&lowered.as_str()) {
        return Some("Resource name cannot be a reserved system name");
    }

    None
}
