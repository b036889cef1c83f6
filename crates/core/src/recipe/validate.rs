use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("recipe slug is required")]
    MissingSlug,
    #[error("recipe title is required")]
    MissingTitle,
    #[error("recipe slug cannot be empty")]
    EmptySlug,
    #[error("recipe title cannot be empty")]
    EmptyTitle,
}

/// Validate that a CMS record carries the fields a view model cannot do without.
pub fn validate_recipe_fields(
    slug: Option<&str>,
    title: Option<&str>,
) -> Result<(), ValidationError> {
    match slug {
        None => return Err(ValidationError::MissingSlug),
        Some("") => return Err(ValidationError::EmptySlug),
        _ => {}
    }
    match title {
        None => return Err(ValidationError::MissingTitle),
        Some("") => return Err(ValidationError::EmptyTitle),
        _ => {}
    }
    Ok(())
}
