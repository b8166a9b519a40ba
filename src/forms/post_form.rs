use regex::Regex;
use serde::Deserialize;
use tokio_postgres::Client;

use crate::errors::FieldError;
use crate::models::Group;
use crate::repositories::group_repository::GroupRepository;

const IMAGE_PATH_PATTERN: &str = r"(?i)\.(png|jpe?g|gif|webp)$";

/// Raw post submission. Validation turns it into a [`ValidatedPost`] or a
/// list of field errors; it never writes anything.
#[derive(Debug, Clone, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub group: Option<i64>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Entity-ready values coming out of a successful validation. The group
/// reference is already resolved, so the service layer never re-checks it.
#[derive(Debug, Clone)]
pub struct ValidatedPost {
    pub text: String,
    pub group: Option<Group>,
    pub image: Option<String>,
}

fn validate_text(raw: Option<&str>) -> Result<String, FieldError> {
    let text = raw.unwrap_or("").trim().to_string();
    if text.is_empty() {
        return Err(FieldError::new("text", "Text is required"));
    }
    Ok(text)
}

fn validate_image(raw: Option<&str>) -> Result<Option<String>, FieldError> {
    let Some(path) = raw.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(None);
    };
    let re = Regex::new(IMAGE_PATH_PATTERN).expect("image path pattern");
    if !re.is_match(path) {
        return Err(FieldError::new("image", "Unsupported image path"));
    }
    Ok(Some(path.to_string()))
}

impl PostForm {
    /// Field rules: `text` required and non-blank; `group`, when present,
    /// must name an existing group (a read against storage, nothing more);
    /// `image`, when present, must look like an image path.
    pub async fn validate(
        &self,
        db: &Client,
    ) -> Result<Result<ValidatedPost, Vec<FieldError>>, tokio_postgres::Error> {
        let mut errors = Vec::new();

        let text = match validate_text(self.text.as_deref()) {
            Ok(text) => text,
            Err(e) => {
                errors.push(e);
                String::new()
            }
        };

        let mut group = None;
        if let Some(group_id) = self.group {
            match GroupRepository::get_by_id(db, group_id).await? {
                Some(found) => group = Some(found),
                None => errors.push(FieldError::new("group", "Select a valid group")),
            }
        }

        let image = match validate_image(self.image.as_deref()) {
            Ok(image) => image,
            Err(e) => {
                errors.push(e);
                None
            }
        };

        if errors.is_empty() {
            Ok(Ok(ValidatedPost { text, group, image }))
        } else {
            Ok(Err(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The group rule needs storage and is covered by the end-to-end suite;
    // the pure field rules are covered here.

    #[test]
    fn missing_text_is_an_error() {
        assert_eq!(
            validate_text(None),
            Err(FieldError::new("text", "Text is required"))
        );
    }

    #[test]
    fn blank_text_is_an_error() {
        assert!(validate_text(Some("   \n\t")).is_err());
    }

    #[test]
    fn text_is_trimmed() {
        assert_eq!(validate_text(Some("  a post \n")).as_deref(), Ok("a post"));
    }

    #[test]
    fn absent_image_is_fine() {
        assert_eq!(validate_image(None), Ok(None));
        assert_eq!(validate_image(Some("   ")), Ok(None));
    }

    #[test]
    fn image_rule_accepts_common_extensions() {
        for path in ["posts/small.gif", "a.PNG", "x/y/z.jpeg", "pic.webp", "pic.jpg"] {
            assert!(validate_image(Some(path)).is_ok(), "{path} should pass");
        }
    }

    #[test]
    fn image_rule_rejects_other_paths() {
        for path in ["notes.txt", "archive.tar.gz", "gif", "image.gif.exe"] {
            assert!(validate_image(Some(path)).is_err(), "{path} should fail");
        }
    }
}
