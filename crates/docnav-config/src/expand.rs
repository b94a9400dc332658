//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Strings without a `${` reference are returned unchanged, so literal dollar
/// signs in plain paths survive.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let mut unset = Vec::new();
    let expanded = shellexpand::env_with_context_no_errors(value, |var| {
        let found = std::env::var(var).ok();
        if found.is_none() {
            unset.push(var.to_owned());
        }
        found
    });

    // Unset variables without a default are left verbatim in the output
    if let Some(var) = unset
        .into_iter()
        .find(|var| expanded.contains(&format!("${{{var}}}")))
    {
        return Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{var}}} not set"),
        });
    }

    Ok(expanded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCNAV_TEST_PREFIX", "/just-go");
        }
        let result = expand_env("${DOCNAV_TEST_PREFIX}/v2", "base_path").unwrap();
        assert_eq!(result, "/just-go/v2");
        unsafe {
            std::env::remove_var("DOCNAV_TEST_PREFIX");
        }
    }

    #[test]
    fn test_expand_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCNAV_TEST_UNSET");
        }
        let result = expand_env("${DOCNAV_TEST_UNSET:-/docs}", "base_path").unwrap();
        assert_eq!(result, "/docs");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCNAV_TEST_MISSING");
        }
        let err = expand_env("${DOCNAV_TEST_MISSING}", "base_path").unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("DOCNAV_TEST_MISSING"));
        assert!(err.to_string().contains("base_path"));
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        assert_eq!(expand_env("/$prefix", "base_path").unwrap(), "/$prefix");
    }
}
