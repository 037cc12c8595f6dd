use std::fmt;

use crate::domain::errors::DomainError;

/// Identifier of the authenticated user, as issued by the hosted auth service
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::EmptyUserId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_blank_user_id() {
        assert_eq!(UserId::new(" "), Err(DomainError::EmptyUserId));
        assert_eq!(UserId::new("user-1").unwrap().as_str(), "user-1");
    }
}
