//! Client-side form validation.
//!
//! A form is rejected before any network call when every one of its required
//! fields is blank after trimming.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A single required field is blank.
    #[error("{field}을(를) 입력해 주세요.")]
    Required { field: &'static str },

    /// Every field of a group where at least one is required is blank.
    #[error("{fields} 중 하나 이상 입력해 주세요.")]
    AllBlank { fields: &'static str },
}

/// Fails when `value` is blank.
pub fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}

/// Fails when every one of `values` is blank.
pub fn require_any(values: &[&str], fields: &'static str) -> Result<(), ValidationError> {
    if values.iter().all(|v| v.trim().is_empty()) {
        return Err(ValidationError::AllBlank { fields });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_counts_as_blank() {
        assert_eq!(
            require(" \t\n", "제목"),
            Err(ValidationError::Required { field: "제목" })
        );
        assert!(require(" x ", "제목").is_ok());
    }

    #[test]
    fn one_filled_value_satisfies_the_group() {
        assert!(require_any(&["", "  ", "answer"], "키워드, 질문, 답변").is_ok());
        assert_eq!(
            require_any(&["", "  "], "인용구, 생각").unwrap_err().to_string(),
            "인용구, 생각 중 하나 이상 입력해 주세요."
        );
    }
}
