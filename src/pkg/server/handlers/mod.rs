pub mod applications;
pub mod contacts;
pub mod employers;
pub mod enrollments;
pub mod jobs;
pub mod probes;
pub mod search;
pub mod students;

use crate::prelude::{Error, Result};

// create/update endpoints reject before touching storage when a required
// field is missing or blank
pub(crate) fn require<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::Validation(format!("{} is required", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_accepts_trimmed_value() -> Result<()> {
        let value = Some("  hello ".to_string());
        assert_eq!(require(&value, "field")?, "hello");
        Ok(())
    }

    #[test]
    fn test_require_rejects_missing_and_blank() {
        assert!(matches!(
            require(&None, "field"),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            require(&Some("   ".to_string()), "field"),
            Err(Error::Validation(_))
        ));
    }
}
