//! Query option interpretation.

use std::num::ParseIntError;

use crate::ais::DEPTH_UNBOUNDED;

/// Typed request parameters carried in the query options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Embedding depth; zero or negative means none.
    pub depth: i32,
    pub simulate: bool,
}

/// Interpret raw `key=value` options in order; later keys override
/// earlier ones. Unknown keys are ignored.
pub fn interpret_options(options: &[&str]) -> Result<RequestOptions, ParseIntError> {
    let mut parsed = RequestOptions::default();

    for option in options {
        if let Some(value) = option.strip_prefix("depth=") {
            parsed.depth = if value == "*" {
                DEPTH_UNBOUNDED
            } else {
                value.parse()?
            };
        } else if let Some(value) = option.strip_prefix("simulate=") {
            parsed.simulate = value == "true" || value == "1";
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(interpret_options(&[]).unwrap(), RequestOptions::default());
        let opts = interpret_options(&["other=1", ""]).unwrap();
        assert_eq!(opts.depth, 0);
        assert!(!opts.simulate);
    }

    #[test]
    fn test_wildcard_depth_and_simulate() {
        let opts = interpret_options(&["depth=*", "simulate=true"]).unwrap();
        assert_eq!(opts.depth, i32::MAX);
        assert!(opts.simulate);
    }

    #[test]
    fn test_numeric_depth() {
        assert_eq!(interpret_options(&["depth=3"]).unwrap().depth, 3);
    }

    #[test]
    fn test_simulate_truthiness() {
        for falsy in ["simulate=0", "simulate=false", "simulate=", "simulate=TRUE", "simulate=yes"] {
            assert!(!interpret_options(&[falsy]).unwrap().simulate, "{falsy}");
        }
        for truthy in ["simulate=true", "simulate=1"] {
            assert!(interpret_options(&[truthy]).unwrap().simulate, "{truthy}");
        }
    }

    #[test]
    fn test_last_write_wins() {
        let opts = interpret_options(&["depth=2", "simulate=1", "depth=5", "simulate=0"]).unwrap();
        assert_eq!(opts.depth, 5);
        assert!(!opts.simulate);
    }

    #[test]
    fn test_bad_depth_is_error() {
        assert!(interpret_options(&["depth=deep"]).is_err());
        assert!(interpret_options(&["depth="]).is_err());
        assert!(interpret_options(&["depth=3000000000"]).is_err());
    }

    #[test]
    fn test_negative_depth_accepted() {
        assert_eq!(interpret_options(&["depth=-1"]).unwrap().depth, -1);
        assert_eq!(interpret_options(&["depth=-2147483648"]).unwrap().depth, i32::MIN);
    }
}
