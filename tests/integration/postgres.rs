//! Record store tests against a live PostgreSQL database.
//!
//! Run with `DATABASE_URL=postgres://... cargo test -- --ignored`.

use std::sync::Arc;

use chrono::NaiveDate;

use daylog_core::config::{DatabaseBackend, DatabaseConfig};
use daylog_core::error::ErrorKind;
use daylog_core::traits::{Clock, FixedClock};
use daylog_core::types::UserId;
use daylog_database::Database;
use daylog_entity::audit::{AuditEvent, CreateAuditEntry, WatchedAttribute};
use daylog_entity::log::{CreateLog, LogFilter};
use daylog_entity::user::NewUser;

use crate::helpers::today;

async fn database() -> Database {
    let config = DatabaseConfig {
        backend: DatabaseBackend::Postgres,
        url: std::env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
        max_connections: 2,
        ..DatabaseConfig::default()
    };
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::on(today()));
    Database::connect(&config, clock)
        .await
        .expect("Failed to connect to test database")
}

fn new_user(name: &str) -> NewUser {
    NewUser {
        id: UserId::new(),
        name: name.to_string(),
        password_hash: "hash-1".to_string(),
    }
}

fn entry(user_id: UserId, actor_id: Option<UserId>, event: AuditEvent) -> CreateAuditEntry {
    CreateAuditEntry {
        user_id,
        actor_id,
        event,
        attribute: WatchedAttribute::Name,
        old_value: None,
        new_value: Some("joe".to_string()),
    }
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database in DATABASE_URL"]
async fn test_user_write_and_audits_commit_together() {
    let db = database().await;
    let users = db.users();
    let joe = new_user("joe");

    let created = users
        .create_user(&joe, vec![entry(joe.id, None, AuditEvent::Created)])
        .await
        .unwrap();
    assert_eq!(created.name, "joe");

    let renamed = daylog_entity::user::User {
        name: "joe doe".to_string(),
        ..created
    };
    let mut change = entry(joe.id, Some(joe.id), AuditEvent::Updated);
    change.old_value = Some("joe".to_string());
    change.new_value = Some("joe doe".to_string());
    let updated = users.update_user(&renamed, vec![change]).await.unwrap();
    assert_eq!(updated.name, "joe doe");

    let audits = users.audits_for(joe.id).await.unwrap();
    assert_eq!(audits.len(), 2);
    assert_eq!(audits[0].event, AuditEvent::Created);
    assert_eq!(audits[1].event, AuditEvent::Updated);
    assert_eq!(audits[1].actor_id, Some(joe.id));
    db.close().await;
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database in DATABASE_URL"]
async fn test_failed_audit_rolls_back_user_write() {
    let db = database().await;
    let users = db.users();
    let joe = new_user("joe");
    let ghost = UserId::new();

    let result = users
        .create_user(&joe, vec![entry(joe.id, Some(ghost), AuditEvent::Created)])
        .await;
    assert!(result.is_err());
    assert!(users.find_user(joe.id).await.unwrap().is_none());

    let created = users.create_user(&joe, Vec::new()).await.unwrap();
    let renamed = daylog_entity::user::User {
        name: "ann".to_string(),
        ..created
    };
    let result = users
        .update_user(&renamed, vec![entry(joe.id, Some(ghost), AuditEvent::Updated)])
        .await;
    assert!(result.is_err());

    let stored = users.find_user(joe.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "joe");
    assert!(users.audits_for(joe.id).await.unwrap().is_empty());
    db.close().await;
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database in DATABASE_URL"]
async fn test_log_for_unknown_owner_is_conflict() {
    let db = database().await;

    let err = db
        .logs()
        .create(&CreateLog {
            user_id: UserId::new(),
            text: "orphan".to_string(),
            date: today(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
    db.close().await;
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database in DATABASE_URL"]
async fn test_soft_delete_restore_and_today() {
    let db = database().await;
    let joe = new_user("joe");
    db.users().create_user(&joe, Vec::new()).await.unwrap();
    let logs = db.logs();

    let today_log = logs
        .create(&CreateLog {
            user_id: joe.id,
            text: "today".to_string(),
            date: today(),
        })
        .await
        .unwrap();
    logs.create(&CreateLog {
        user_id: joe.id,
        text: "earlier".to_string(),
        date: NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
    })
    .await
    .unwrap();

    let todays = logs
        .list_for_owner(
            joe.id,
            &LogFilter {
                on_date: Some(today()),
                include_deleted: false,
            },
        )
        .await
        .unwrap();
    assert_eq!(todays.len(), 1);
    assert_eq!(todays[0].id, today_log.id);

    logs.soft_delete(today_log.id).await.unwrap();
    assert!(logs.find(today_log.id, false).await.unwrap().is_none());
    let trashed = logs.find(today_log.id, true).await.unwrap().unwrap();
    assert!(trashed.deleted_at.is_some());

    let err = logs.soft_delete(today_log.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    let restored = logs.restore(today_log.id).await.unwrap();
    assert!(restored.deleted_at.is_none());
    assert_eq!(
        logs.list_for_owner(joe.id, &LogFilter::default()).await.unwrap().len(),
        2
    );
    db.close().await;
}
