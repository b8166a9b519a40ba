use serde::Deserialize;

use crate::errors::FieldError;

/// Raw comment submission.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ValidatedComment {
    pub text: String,
}

impl CommentForm {
    pub fn validate(&self) -> Result<ValidatedComment, Vec<FieldError>> {
        let text = self.text.as_deref().unwrap_or("").trim().to_string();
        if text.is_empty() {
            return Err(vec![FieldError::new("text", "Text is required")]);
        }
        Ok(ValidatedComment { text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_comment_fails() {
        let form = CommentForm { text: None };
        assert!(form.validate().is_err());
        let form = CommentForm { text: Some("  ".to_string()) };
        assert!(form.validate().is_err());
    }

    #[test]
    fn comment_text_is_trimmed() {
        let form = CommentForm { text: Some("  nice post \n".to_string()) };
        let validated = form.validate().expect("valid");
        assert_eq!(validated.text, "nice post");
    }
}
