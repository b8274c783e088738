//! Request context carrying the acting principal.

use daylog_auth::Principal;
use daylog_core::types::UserId;
use daylog_entity::user::User;

/// Context for the current authenticated request.
///
/// Built by the HTTP extractor (or by callers of the core directly) and
/// passed into service methods so every operation knows who is acting.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The acting principal.
    pub principal: Principal,
}

impl RequestContext {
    /// Create a context for a principal.
    pub fn new(principal: Principal) -> Self {
        Self { principal }
    }

    /// Create a context for a stored user.
    pub fn for_user(user: &User) -> Self {
        Self::new(Principal::from_user(user))
    }

    /// The acting user's id.
    pub fn user_id(&self) -> UserId {
        self.principal.user_id
    }
}
