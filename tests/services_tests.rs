//! Service-level integration tests over in-memory SQLite

mod common;

use common::{register_request, test_backend};
use docvault::services::{AddDocumentsRequest, AddUsersRequest, CreateGroupRequest, LoginRequest};
use docvault::VaultError;

#[tokio::test]
async fn user_batch_lookup_is_all_or_nothing() {
    let backend = test_backend().await;

    let a = backend.auth.register(&register_request("a@x.com")).await.unwrap();
    let b = backend.auth.register(&register_request("b@x.com")).await.unwrap();
    let c = backend.auth.register(&register_request("c@x.com")).await.unwrap();

    // All ids exist: one record per id, any order.
    let mut ids = vec![c.user.id, a.user.id, b.user.id];
    let users = backend.users.find_by_ids(&ids).await.unwrap();
    assert_eq!(users.len(), 3);

    // Any absent id fails the whole lookup.
    ids.push(9999);
    let err = backend.users.find_by_ids(&ids).await.unwrap_err();
    assert!(matches!(err, VaultError::NotFound(_)));
    assert_eq!(err.to_string(), "trusted or not found users");

    // A duplicated id is collapsed by the IN query and detected as a
    // cardinality mismatch.
    let err = backend
        .users
        .find_by_ids(&[a.user.id, a.user.id])
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "trusted or not found users");
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let backend = test_backend().await;

    backend.auth.register(&register_request("a@x.com")).await.unwrap();

    let err = backend
        .auth
        .register(&register_request("a@x.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, VaultError::BadRequest(_)));
    assert_eq!(err.to_string(), "User already exists");
}

#[tokio::test]
async fn register_rejects_mismatched_confirmation_before_directory() {
    let backend = test_backend().await;

    let mut request = register_request("a@x.com");
    request.password_confirm = "something-else".to_string();

    let err = backend.auth.register(&request).await.unwrap_err();
    assert!(matches!(err, VaultError::Validation(_)));

    // Validation failed before any row was written.
    assert!(backend.users.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn register_stores_digest_not_plaintext() {
    let backend = test_backend().await;

    let session = backend.auth.register(&register_request("a@x.com")).await.unwrap();
    assert_ne!(session.user.password, "secret-password");
    assert!(session.user.password.starts_with("$argon2"));
}

#[tokio::test]
async fn login_failure_is_non_distinguishing() {
    let backend = test_backend().await;

    backend.auth.register(&register_request("a@x.com")).await.unwrap();

    let wrong_password = backend
        .auth
        .login(&LoginRequest {
            email: "a@x.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    let unknown_email = backend
        .auth
        .login(&LoginRequest {
            email: "nobody@x.com".to_string(),
            password: "secret-password".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(wrong_password, VaultError::Unauthorized(_)));
    assert!(matches!(unknown_email, VaultError::Unauthorized(_)));
    // Byte-identical messages: the response must not leak which was wrong.
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    assert_eq!(wrong_password.to_string(), "Email or password are wrong");
}

#[tokio::test]
async fn login_succeeds_with_correct_credentials() {
    let backend = test_backend().await;

    let registered = backend.auth.register(&register_request("a@x.com")).await.unwrap();
    let session = backend
        .auth
        .login(&LoginRequest {
            email: "a@x.com".to_string(),
            password: "secret-password".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(session.user.id, registered.user.id);
    assert!(!session.token.is_empty());
}

#[tokio::test]
async fn document_create_requires_resolvable_owner() {
    let backend = test_backend().await;

    let err = backend
        .documents
        .create(42, "x.pdf", "x.pdf", "sig")
        .await
        .unwrap_err();
    assert!(matches!(err, VaultError::NotFound(_)));
    assert_eq!(err.to_string(), "User #42 not found");
}

#[tokio::test]
async fn document_lookup_by_filename_not_found_message() {
    let backend = test_backend().await;

    let err = backend
        .documents
        .find_by_filename("missing.pdf")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Not found file missing.pdf");

    // The download path propagates the same failure before any blob access.
    let err = backend.documents.download("missing.pdf").await.unwrap_err();
    assert_eq!(err.to_string(), "Not found file missing.pdf");
}

#[tokio::test]
async fn document_upload_round_trip() {
    let backend = test_backend().await;

    let owner = backend.auth.register(&register_request("a@x.com")).await.unwrap();
    let document = backend
        .documents
        .create_upload(owner.user.id, "contract.pdf", "sig", b"%PDF-1.4 test")
        .await
        .unwrap();

    assert_eq!(document.user_id, Some(owner.user.id));
    assert_eq!(document.originalname, "contract.pdf");
    assert!(document.filename.ends_with(".pdf"));
    assert_ne!(document.filename, "contract.pdf");

    let (found, path) = backend.documents.download(&document.filename).await.unwrap();
    assert_eq!(found.id, document.id);
    assert_eq!(tokio::fs::read(path).await.unwrap(), b"%PDF-1.4 test");
}

#[tokio::test]
async fn owner_listing_filters_by_owner() {
    let backend = test_backend().await;

    let a = backend.auth.register(&register_request("a@x.com")).await.unwrap();
    let b = backend.auth.register(&register_request("b@x.com")).await.unwrap();

    backend
        .documents
        .create_upload(a.user.id, "one.pdf", "sig", b"%PDF-1.4 one")
        .await
        .unwrap();
    backend
        .documents
        .create_upload(b.user.id, "two.pdf", "sig", b"%PDF-1.4 two")
        .await
        .unwrap();

    // The shared listing is unfiltered; the per-owner listing is not.
    assert_eq!(backend.documents.list().await.unwrap().len(), 2);

    let mine = backend.documents.list_for_owner(a.user.id).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].originalname, "one.pdf");
}

#[tokio::test]
async fn group_create_resolves_all_users() {
    let backend = test_backend().await;

    let a = backend.auth.register(&register_request("a@x.com")).await.unwrap();

    let err = backend
        .groups
        .create(&CreateGroupRequest {
            name: "Eng".to_string(),
            user_ids: vec![a.user.id, 9999],
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "trusted or not found users");

    // Nothing was persisted for the failed request.
    assert!(backend.groups.list().await.unwrap().is_empty());

    let members = backend
        .groups
        .create(&CreateGroupRequest {
            name: "Eng".to_string(),
            user_ids: vec![a.user.id],
        })
        .await
        .unwrap();

    assert_eq!(members.group.name, "Eng");
    let users = members.users.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, a.user.id);
}

#[tokio::test]
async fn group_not_found_message_format() {
    let backend = test_backend().await;

    let err = backend.groups.find_with_users(7).await.unwrap_err();
    assert_eq!(err.to_string(), "Group #7 not found");

    let err = backend.groups.find_with_documents(7).await.unwrap_err();
    assert_eq!(err.to_string(), "Group #7 not found");

    let err = backend
        .groups
        .add_users(7, &AddUsersRequest { user_ids: vec![] })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Group #7 not found");
}

#[tokio::test]
async fn group_membership_grows_and_readd_is_idempotent() {
    let backend = test_backend().await;

    let a = backend.auth.register(&register_request("a@x.com")).await.unwrap();
    let b = backend.auth.register(&register_request("b@x.com")).await.unwrap();

    let group = backend
        .groups
        .create(&CreateGroupRequest {
            name: "Eng".to_string(),
            user_ids: vec![a.user.id],
        })
        .await
        .unwrap()
        .group;

    // Appending a new user grows the membership.
    let members = backend
        .groups
        .add_users(group.id, &AddUsersRequest { user_ids: vec![b.user.id] })
        .await
        .unwrap();
    assert_eq!(members.users.as_ref().unwrap().len(), 2);
    // Mutation paths return both relations populated.
    assert!(members.documents.is_some());

    // Re-adding an existing member: the composite primary key makes a
    // duplicate association row unrepresentable, so the append lands as an
    // idempotent no-op and the count stays put.
    let members = backend
        .groups
        .add_users(group.id, &AddUsersRequest { user_ids: vec![b.user.id] })
        .await
        .unwrap();
    let users = members.users.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users.iter().filter(|u| u.id == b.user.id).count(), 1);
}

#[tokio::test]
async fn group_documents_ignore_ownership() {
    let backend = test_backend().await;

    let a = backend.auth.register(&register_request("a@x.com")).await.unwrap();
    let b = backend.auth.register(&register_request("b@x.com")).await.unwrap();

    // Group whose only member is A; document owned by B.
    let group = backend
        .groups
        .create(&CreateGroupRequest {
            name: "Eng".to_string(),
            user_ids: vec![a.user.id],
        })
        .await
        .unwrap()
        .group;

    let document = backend
        .documents
        .create_upload(b.user.id, "theirs.pdf", "sig", b"%PDF-1.4 theirs")
        .await
        .unwrap();

    // No ownership check on group-document association.
    let members = backend
        .groups
        .add_documents(
            group.id,
            &AddDocumentsRequest {
                document_ids: vec![document.id],
            },
        )
        .await
        .unwrap();

    let documents = members.documents.unwrap();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].id, document.id);
    assert_eq!(documents[0].user_id, Some(b.user.id));
}

#[tokio::test]
async fn group_documents_batch_lookup_is_all_or_nothing() {
    let backend = test_backend().await;

    let a = backend.auth.register(&register_request("a@x.com")).await.unwrap();
    let group = backend
        .groups
        .create(&CreateGroupRequest {
            name: "Eng".to_string(),
            user_ids: vec![a.user.id],
        })
        .await
        .unwrap()
        .group;

    let err = backend
        .groups
        .add_documents(
            group.id,
            &AddDocumentsRequest {
                document_ids: vec![12345],
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "trusted or not found documents");

    // The failed mutation left the membership untouched.
    let members = backend.groups.find_with_documents(group.id).await.unwrap();
    assert!(members.documents.unwrap().is_empty());
}

#[tokio::test]
async fn group_listing_has_no_relations() {
    let backend = test_backend().await;

    let a = backend.auth.register(&register_request("a@x.com")).await.unwrap();
    backend
        .groups
        .create(&CreateGroupRequest {
            name: "Eng".to_string(),
            user_ids: vec![a.user.id],
        })
        .await
        .unwrap();

    let groups = backend.groups.list().await.unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "Eng");
}
