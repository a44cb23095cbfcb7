//! End-to-end flows through the privileged operation handlers

use campus_authentication::{SessionClaims, SessionToken, SigningSecret, TokenCodec};
use campus_core::{CampusError, Role};
use campus_directory::{CampusService, MemoryDirectory, Sha256Hasher};
use campus_journal::{AuditAction, AuditFilter, MemoryAuditStore};
use std::sync::Arc;

struct Harness {
    service: CampusService,
    audit: Arc<MemoryAuditStore>,
}

async fn harness() -> Harness {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    let audit = MemoryAuditStore::new();
    let service = CampusService::new(
        MemoryDirectory::new(),
        audit.clone(),
        Arc::new(Sha256Hasher),
        TokenCodec::new(SigningSecret::generate()),
    );
    service
        .bootstrap_admin("root", "rootpw")
        .await
        .expect("bootstrap admin");
    Harness { service, audit }
}

async fn login(service: &CampusService, username: &str, password: &str) -> SessionClaims {
    let token = service.login(username, password).await.expect("login");
    claims_for(service, &token)
}

fn claims_for(service: &CampusService, token: &SessionToken) -> SessionClaims {
    service
        .authenticate(Some(&format!("Bearer {token}")))
        .expect("authenticate")
}

#[tokio::test]
async fn admin_creates_director_with_ownership_edge_and_one_audit_row() {
    let h = harness().await;
    let admin = login(&h.service, "root", "rootpw").await;

    let director = h
        .service
        .create_director(&admin, "d1", "p")
        .await
        .expect("create director");
    assert_eq!(director.role, Role::Director);
    assert_eq!(director.created_by, Some(admin.principal));

    h.service.flush_audit().await;
    let records = h
        .service
        .audit_log(&admin, AuditFilter::default())
        .await
        .expect("audit query");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].actor_id, admin.principal);
    assert_eq!(records[0].actor_role, Role::Admin);
    assert_eq!(records[0].action, AuditAction::Create);
    assert_eq!(records[0].target_user_id, Some(director.id));
    assert_eq!(records[0].target_role, Some(Role::Director));
    assert_eq!(records[0].description, "Admin created director d1");
}

#[tokio::test]
async fn director_cannot_create_directors() {
    let h = harness().await;
    let admin = login(&h.service, "root", "rootpw").await;
    h.service
        .create_director(&admin, "d1", "p")
        .await
        .expect("create director");

    let director = login(&h.service, "d1", "p").await;
    let err = h
        .service
        .create_director(&director, "d2", "p")
        .await
        .expect_err("directors may not create directors");
    assert!(matches!(err, CampusError::Forbidden { .. }));

    // Deny short-circuits: no audit row beyond the admin's create
    h.service.flush_audit().await;
    assert_eq!(h.audit.len(), 1);
}

#[tokio::test]
async fn duplicate_username_is_a_conflict_not_a_generic_failure() {
    let h = harness().await;
    let admin = login(&h.service, "root", "rootpw").await;
    h.service
        .create_director(&admin, "d1", "p")
        .await
        .expect("first create");
    let err = h
        .service
        .create_director(&admin, "d1", "p")
        .await
        .expect_err("duplicate username");
    assert!(matches!(err, CampusError::Conflict { .. }));
}

#[tokio::test]
async fn admin_acting_as_staff_retains_full_authority() {
    let h = harness().await;
    let admin = login(&h.service, "root", "rootpw").await;

    let switched = h
        .service
        .switch_role(&admin, Role::Staff)
        .await
        .expect("switch to staff");
    let acting = claims_for(&h.service, &switched);
    assert_eq!(acting.permanent, Role::Admin);
    assert_eq!(acting.acting, Role::Staff);

    // Still allowed the admin-only operation while acting as staff
    h.service
        .create_director(&acting, "d1", "p")
        .await
        .expect("admin override holds");
}

#[tokio::test]
async fn switch_role_rejects_the_student_tier_and_non_admins() {
    let h = harness().await;
    let admin = login(&h.service, "root", "rootpw").await;

    let err = h
        .service
        .switch_role(&admin, Role::Student)
        .await
        .expect_err("student is never a delegation target");
    assert!(matches!(err, CampusError::Invalid { .. }));

    h.service
        .create_director(&admin, "d1", "p")
        .await
        .expect("create director");
    let director = login(&h.service, "d1", "p").await;
    let err = h
        .service
        .switch_role(&director, Role::Staff)
        .await
        .expect_err("only admin switches roles");
    assert!(matches!(err, CampusError::Forbidden { .. }));
}

#[tokio::test]
async fn staff_cannot_delete_a_student_they_did_not_create() {
    let h = harness().await;
    let admin = login(&h.service, "root", "rootpw").await;
    h.service
        .create_director(&admin, "d1", "p")
        .await
        .expect("create director");
    let director = login(&h.service, "d1", "p").await;
    h.service
        .create_staff(&director, "t1", "p")
        .await
        .expect("create staff one");
    h.service
        .create_staff(&director, "t2", "p")
        .await
        .expect("create staff two");

    let staff_one = login(&h.service, "t1", "p").await;
    let staff_two = login(&h.service, "t2", "p").await;
    let student = h
        .service
        .create_student(&staff_one, "s1", "p", "physics", "2026")
        .await
        .expect("create student");

    h.service.flush_audit().await;
    let before = h.audit.len();

    let err = h
        .service
        .delete_student(&staff_two, student.id)
        .await
        .expect_err("not the owner");
    assert!(matches!(err, CampusError::Forbidden { .. }));

    // Row still there, no audit row written for the refused delete
    let students = h.service.list_students(&staff_two).await.expect("list");
    assert_eq!(students.len(), 1);
    h.service.flush_audit().await;
    assert_eq!(h.audit.len(), before);

    // The owner may delete, and that is audited
    h.service
        .delete_student(&staff_one, student.id)
        .await
        .expect("owner deletes");
    h.service.flush_audit().await;
    assert_eq!(h.audit.len(), before + 1);
}

#[tokio::test]
async fn audit_outage_does_not_affect_the_primary_operation() {
    let h = harness().await;
    let admin = login(&h.service, "root", "rootpw").await;

    h.audit.set_fail_writes(true);
    let director = h
        .service
        .create_director(&admin, "d1", "p")
        .await
        .expect("create succeeds despite audit outage");
    h.service.flush_audit().await;
    assert!(h.audit.is_empty());

    // The mutation itself landed
    let users = h.service.list_users(&admin).await.expect("list users");
    assert!(users.iter().any(|u| u.id == director.id));
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_duplicate_registrations_resolve_to_one_row() {
    let h = harness().await;
    let admin = login(&h.service, "root", "rootpw").await;
    h.service
        .create_director(&admin, "d1", "p")
        .await
        .expect("create director");
    let director = login(&h.service, "d1", "p").await;
    h.service
        .create_staff(&director, "t1", "p")
        .await
        .expect("create staff");
    let staff = login(&h.service, "t1", "p").await;
    h.service
        .create_student(&staff, "s1", "p", "physics", "2026")
        .await
        .expect("create student");
    let event = h
        .service
        .create_event(&director, "tryouts")
        .await
        .expect("create event");

    let student = login(&h.service, "s1", "p").await;
    let event_id = event.id;
    let first = {
        let service = h.service.clone();
        tokio::spawn(async move { service.register_event(&student, event_id).await })
    };
    let second = {
        let service = h.service.clone();
        tokio::spawn(async move { service.register_event(&student, event_id).await })
    };
    let outcomes = [
        first.await.expect("task one"),
        second.await.expect("task two"),
    ];

    let successes = outcomes.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    let conflict = outcomes
        .iter()
        .find_map(|r| r.as_ref().err())
        .expect("one attempt loses");
    assert!(matches!(conflict, CampusError::Conflict { .. }));
}

#[tokio::test]
async fn students_cannot_reach_privileged_surfaces() {
    let h = harness().await;
    let admin = login(&h.service, "root", "rootpw").await;
    h.service
        .create_director(&admin, "d1", "p")
        .await
        .expect("create director");
    let director = login(&h.service, "d1", "p").await;
    h.service
        .create_staff(&director, "t1", "p")
        .await
        .expect("create staff");
    let staff = login(&h.service, "t1", "p").await;
    h.service
        .create_student(&staff, "s1", "p", "physics", "2026")
        .await
        .expect("create student");

    let student = login(&h.service, "s1", "p").await;
    assert!(matches!(
        h.service.create_staff(&student, "x", "p").await,
        Err(CampusError::Forbidden { .. })
    ));
    assert!(matches!(
        h.service.list_users(&student).await,
        Err(CampusError::Forbidden { .. })
    ));
    assert!(matches!(
        h.service.audit_log(&student, AuditFilter::default()).await,
        Err(CampusError::Forbidden { .. })
    ));
}

#[tokio::test]
async fn login_rejects_unknown_users_and_wrong_passwords_identically() {
    let h = harness().await;
    let unknown = h.service.login("ghost", "p").await.expect_err("no account");
    let wrong = h
        .service
        .login("root", "wrong")
        .await
        .expect_err("bad password");
    assert_eq!(unknown, CampusError::Unauthenticated);
    assert_eq!(wrong, CampusError::Unauthenticated);
}

#[tokio::test]
async fn missing_director_update_is_not_found() {
    let h = harness().await;
    let admin = login(&h.service, "root", "rootpw").await;
    let err = h
        .service
        .update_director_password(&admin, "ghost", "p")
        .await
        .expect_err("no such director");
    assert!(matches!(err, CampusError::NotFound { .. }));

    // A refused update leaves no audit trace
    h.service.flush_audit().await;
    assert!(h.audit.is_empty());
}

#[tokio::test]
async fn audit_export_uses_the_fixed_column_order() {
    let h = harness().await;
    let admin = login(&h.service, "root", "rootpw").await;
    h.service
        .create_director(&admin, "d1", "p")
        .await
        .expect("create director");
    h.service.flush_audit().await;

    let csv = h
        .service
        .export_audit_log(&admin, AuditFilter::default())
        .await
        .expect("export");
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("actor_id,actor_role,action,target_user_id,target_role,description,created_at")
    );
    let row = lines.next().expect("one data row");
    assert!(row.contains("admin,CREATE"));
    assert!(row.contains("Admin created director d1"));
}

#[tokio::test]
async fn audit_query_filters_by_actor_role() {
    let h = harness().await;
    let admin = login(&h.service, "root", "rootpw").await;
    h.service
        .create_director(&admin, "d1", "p")
        .await
        .expect("create director");
    let director = login(&h.service, "d1", "p").await;
    h.service
        .create_staff(&director, "t1", "p")
        .await
        .expect("create staff");
    h.service.flush_audit().await;

    let directors_only = h
        .service
        .audit_log(
            &admin,
            AuditFilter {
                role: Some(Role::Director),
                ..Default::default()
            },
        )
        .await
        .expect("filtered query");
    assert_eq!(directors_only.len(), 1);
    assert_eq!(directors_only[0].description, "Director created staff t1");
}
