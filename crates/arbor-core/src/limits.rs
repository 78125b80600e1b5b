//! Input validation limits for the service boundary
//!
//! The tree engine itself does not length-check its inputs; callers facing
//! untrusted input validate here before reaching the core.

/// Maximum length for node identifiers (255 chars)
pub const MAX_NODE_ID_LEN: usize = 255;

/// Maximum length for node descriptions and collapse summaries (1000 chars)
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Validation error type
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyNodeId,
    NodeIdTooLong { len: usize, max: usize },
    EmptyDescription,
    DescriptionTooLong { len: usize, max: usize },
    EmptyExpansion,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyNodeId => write!(f, "Node id cannot be empty"),
            Self::NodeIdTooLong { len, max } => {
                write!(f, "Node id too long: {} chars (max {})", len, max)
            }
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::DescriptionTooLong { len, max } => {
                write!(f, "Description too long: {} chars (max {})", len, max)
            }
            Self::EmptyExpansion => write!(f, "Expansion requires at least one child"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a node identifier
pub fn validate_node_id(id: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::EmptyNodeId);
    }
    if id.len() > MAX_NODE_ID_LEN {
        return Err(ValidationError::NodeIdTooLong {
            len: id.len(),
            max: MAX_NODE_ID_LEN,
        });
    }
    Ok(())
}

/// Validate a description or collapse summary
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooLong {
            len: description.len(),
            max: MAX_DESCRIPTION_LEN,
        });
    }
    Ok(())
}

/// Validate an expand request's child count
pub fn validate_expansion(child_count: usize) -> Result<(), ValidationError> {
    if child_count == 0 {
        return Err(ValidationError::EmptyExpansion);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_node_id() {
        assert!(validate_node_id("node-1").is_ok());
        assert!(validate_node_id("").is_err());
        assert!(validate_node_id(&"x".repeat(255)).is_ok());
        assert!(validate_node_id(&"x".repeat(256)).is_err());
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("A node").is_ok());
        assert!(validate_description("").is_err());
        assert!(validate_description(&"x".repeat(1001)).is_err());
    }

    #[test]
    fn test_validate_expansion() {
        assert!(validate_expansion(1).is_ok());
        assert_eq!(validate_expansion(0), Err(ValidationError::EmptyExpansion));
    }
}
