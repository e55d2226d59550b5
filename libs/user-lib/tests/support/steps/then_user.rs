use cucumber::then;

use user_lib::errors_service::UserServiceError;

use crate::support::world::TestWorld;

#[then("the user operation should succeed")]
pub async fn user_operation_succeeded(world: &mut TestWorld) {
    let result = world.user_result.as_ref().expect("Result should exist");
    assert!(result.is_ok(), "expected success, got {result:?}");
    world.current_user = result.as_ref().ok().cloned();
}

#[then(expr = "the user should have id {int}")]
pub async fn user_has_id(world: &mut TestWorld, expected_id: i64) {
    let user = world.current_user.as_ref().expect("User should exist");
    assert_eq!(user.id, expected_id);
}

#[then(expr = "the user should have name {string}")]
pub async fn user_has_name(world: &mut TestWorld, expected_name: String) {
    let user = world.current_user.as_ref().expect("User should exist");
    assert_eq!(user.name, expected_name);
}

#[then(expr = "the user should have email {string}")]
pub async fn user_has_email(world: &mut TestWorld, expected_email: String) {
    let user = world.current_user.as_ref().expect("User should exist");
    assert_eq!(user.email, expected_email);
}

#[then(expr = "the user should have password {string}")]
pub async fn user_has_password(world: &mut TestWorld, expected_password: String) {
    let user = world.current_user.as_ref().expect("User should exist");
    assert_eq!(user.password, expected_password);
}

#[then(expr = "I should receive {int} users")]
pub async fn receive_users_count(world: &mut TestWorld, count: usize) {
    let result = world.users_result.as_ref().expect("Result should exist");
    let users = result.as_ref().expect("listing should succeed");
    assert_eq!(users.len(), count);
}

#[then(expr = "the deletion should return id {int}")]
pub async fn deletion_returns_id(world: &mut TestWorld, expected_id: i64) {
    let result = world.delete_result.as_ref().expect("Result should exist");
    assert_eq!(*result.as_ref().expect("deletion should succeed"), expected_id);
}

#[then(expr = "I should receive a not found error for user {int}")]
pub async fn not_found_error(world: &mut TestWorld, expected_id: i64) {
    match world.last_error() {
        Some(UserServiceError::NotFound(id)) => assert_eq!(*id, expected_id),
        other => panic!("expected not found error, got {other:?}"),
    }
}
