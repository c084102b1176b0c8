//! Ownership policy for user-scoped resources.
//!
//! Notification settings and the notification feed are strictly private to
//! their owning user. Every handler that takes a user id from the request
//! path must call [`ensure_owner`] before touching the repository layer,
//! rather than inlining its own id comparison.

use crate::error::CoreError;
use crate::types::DbId;

/// Allow access only when the authenticated caller owns the resource.
///
/// There is no delegated-access or admin-override path; any such
/// capability would be checked before this equality test.
pub fn ensure_owner(owner_id: DbId, caller_id: DbId) -> Result<(), CoreError> {
    if owner_id == caller_id {
        Ok(())
    } else {
        Err(CoreError::Forbidden(
            "You can only access your own resources".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_is_allowed() {
        assert!(ensure_owner(7, 7).is_ok());
    }

    #[test]
    fn test_non_owner_is_forbidden() {
        let err = ensure_owner(7, 8).unwrap_err();
        assert!(matches!(err, CoreError::Forbidden(_)));
    }
}
