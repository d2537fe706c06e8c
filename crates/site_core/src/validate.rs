use thiserror::Error;

use crate::{ApplicationForm, FieldName, UploadTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in the {} field", .0.key())]
    Missing(FieldName),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please upload your resume")]
    MissingResume,
}

/// Checks required fields in order, then the email shape, then the resume.
/// Stops at the first failure.
pub fn validate_application(
    form: &ApplicationForm,
    upload: &dyn UploadTarget,
) -> Result<(), ValidationError> {
    if let Some(field) = FieldName::REQUIRED
        .into_iter()
        .find(|field| form.value(*field).trim().is_empty())
    {
        return Err(ValidationError::Missing(field));
    }

    if !is_valid_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }

    if upload.selected_resume().is_none() {
        return Err(ValidationError::MissingResume);
    }

    Ok(())
}

/// Shape check `local@domain.tld`: no whitespace, a single `@`, and a `.`
/// with at least one character on each side somewhere after the `@`.
pub fn is_valid_email(candidate: &str) -> bool {
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(is_blank) {
        return false;
    }
    if domain.chars().any(|c| c == '@' || is_blank(c)) {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

#[cfg(test)]
mod tests {
    use super::is_valid_email;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("jane.doe@mail.example.org"));
        assert!(is_valid_email("x@y..z"));

        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("a@bc"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("a@b@c.d"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@b.c "));
        assert!(!is_valid_email(""));
    }
}
