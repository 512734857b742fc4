// ABOUTME: Integration tests for account creation and lookups
// ABOUTME: Covers unique usernames, default roles, role filtering and password hashing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::collections::BTreeSet;

use common::{create_member, create_test_database, create_trainer, create_user, user_service};
use limitbeyond::dto::{CreateUserRequest, UserResponse};
use limitbeyond::errors::ErrorCode;
use limitbeyond::models::Role;

fn request(username: &str) -> CreateUserRequest {
    CreateUserRequest {
        username: username.to_owned(),
        password: "s3cret-pass".to_owned(),
        email: format!("{username}@limitbeyond.test"),
        first_name: "Alex".to_owned(),
        last_name: "Lifter".to_owned(),
        phone_number: Some("+1 555 0100".to_owned()),
        roles: BTreeSet::new(),
    }
}

#[tokio::test]
async fn test_create_defaults_to_member_and_hashes_password() {
    let database = create_test_database().await.unwrap();
    let service = user_service(&database);

    let user = service.create(&request("alex")).await.unwrap();
    assert_eq!(user.roles, BTreeSet::from([Role::Member]));
    assert!(user.active);
    assert_ne!(user.password_hash, "s3cret-pass");
    assert!(bcrypt::verify("s3cret-pass", &user.password_hash).unwrap());

    let stored = service.get_by_username("alex").await.unwrap();
    assert_eq!(stored.id, user.id);
    assert_eq!(stored.phone_number.as_deref(), Some("+1 555 0100"));
    assert_eq!(stored.password_hash, user.password_hash);
}

#[tokio::test]
async fn test_duplicate_username_is_rejected() {
    let database = create_test_database().await.unwrap();
    let service = user_service(&database);
    service.create(&request("alex")).await.unwrap();

    let err = service.create(&request("alex")).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(service.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_invalid_requests_are_rejected() {
    let database = create_test_database().await.unwrap();
    let service = user_service(&database);

    let mut blank = request("blank");
    blank.password = String::new();
    let err = service.create(&blank).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);

    let mut bad_email = request("bad");
    bad_email.email = "not-an-email".to_owned();
    let err = service.create(&bad_email).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);

    assert_eq!(service.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_list_by_role() {
    let database = create_test_database().await.unwrap();
    create_member(&database, "zoe").await.unwrap();
    create_member(&database, "amy").await.unwrap();
    create_trainer(&database, "coach").await.unwrap();
    create_user(&database, "boss", &[Role::Admin, Role::Trainer])
        .await
        .unwrap();
    let service = user_service(&database);

    let members: Vec<String> = service
        .list_by_role(Role::Member)
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.username)
        .collect();
    assert_eq!(members, vec!["amy".to_owned(), "zoe".to_owned()]);

    let trainers = service.list_by_role(Role::Trainer).await.unwrap();
    assert_eq!(trainers.len(), 2);
    assert!(trainers.iter().all(|u| u.has_role(Role::Trainer)));

    assert_eq!(service.list().await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let database = create_test_database().await.unwrap();
    let service = user_service(&database);

    let err = service.get("no-such-user").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    let err = service.get_by_username("nobody").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_response_never_contains_password_hash() {
    let database = create_test_database().await.unwrap();
    let user = create_member(&database, "sam").await.unwrap();

    let json = serde_json::to_value(UserResponse::from(&user)).unwrap();
    assert_eq!(json["username"], "sam");
    assert!(json.get("passwordHash").is_none());
    assert!(json.get("password").is_none());
}
