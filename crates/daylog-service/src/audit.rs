//! Watched-attribute diffing for the audit trail.

use daylog_core::types::UserId;
use daylog_entity::audit::{AuditEvent, CreateAuditEntry, WatchedAttribute};
use daylog_entity::user::{NewUser, User};

/// Builds audit entries for user writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Auditor;

impl Auditor {
    /// Create an auditor.
    pub fn new() -> Self {
        Self
    }

    /// The single `created` entry for a new user. It is keyed on the
    /// name; the initial credential is not recorded.
    pub fn registration(&self, user: &NewUser, actor: Option<UserId>) -> CreateAuditEntry {
        CreateAuditEntry {
            user_id: user.id,
            actor_id: actor,
            event: AuditEvent::Created,
            attribute: WatchedAttribute::Name,
            old_value: None,
            new_value: Some(user.name.clone()),
        }
    }

    /// One `updated` entry per watched attribute that differs between the
    /// stored and the pending user. Equal values yield nothing.
    pub fn changes(&self, before: &User, after: &User, actor: Option<UserId>) -> Vec<CreateAuditEntry> {
        WatchedAttribute::ALL
            .iter()
            .filter(|&&attribute| before.attribute(attribute) != after.attribute(attribute))
            .map(|&attribute| CreateAuditEntry {
                user_id: before.id,
                actor_id: actor,
                event: AuditEvent::Updated,
                attribute,
                old_value: Some(before.attribute(attribute).to_string()),
                new_value: Some(after.attribute(attribute).to_string()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn user() -> User {
        User {
            id: UserId::new(),
            name: "joe".to_string(),
            password_hash: "hash-1".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_no_change_no_entries() {
        let before = user();
        assert!(Auditor::new().changes(&before, &before.clone(), None).is_empty());
    }

    #[test]
    fn test_single_attribute() {
        let before = user();
        let after = User {
            name: "joe doe".to_string(),
            ..before.clone()
        };

        let entries = Auditor::new().changes(&before, &after, Some(before.id));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].attribute, WatchedAttribute::Name);
        assert_eq!(entries[0].event, AuditEvent::Updated);
        assert_eq!(entries[0].old_value.as_deref(), Some("joe"));
        assert_eq!(entries[0].new_value.as_deref(), Some("joe doe"));
    }

    #[test]
    fn test_bulk_change() {
        let before = user();
        let after = User {
            name: "ann".to_string(),
            password_hash: "hash-2".to_string(),
            ..before.clone()
        };

        let entries = Auditor::new().changes(&before, &after, None);
        let attributes: Vec<_> = entries.iter().map(|e| e.attribute).collect();
        assert_eq!(attributes, vec![WatchedAttribute::Name, WatchedAttribute::Password]);
    }

    #[test]
    fn test_registration() {
        let new_user = NewUser {
            id: UserId::new(),
            name: "joe".to_string(),
            password_hash: "hash".to_string(),
        };
        let entry = Auditor::new().registration(&new_user, None);
        assert_eq!(entry.event, AuditEvent::Created);
        assert_eq!(entry.attribute, WatchedAttribute::Name);
        assert!(entry.old_value.is_none());
        assert_eq!(entry.new_value.as_deref(), Some("joe"));
    }
}
