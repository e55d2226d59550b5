use cucumber::when;

use user_lib::entities::UserInput;
use user_lib::repository::models::UserRow;
use user_lib::user_service::UserServiceTrait;

use crate::support::world::TestWorld;

#[when(expr = "I create a user with name {string}, email {string} and password {string}")]
pub async fn create_user(world: &mut TestWorld, name: String, email: String, password: String) {
    let next_id = world.stored_users.iter().map(|row| row.id).max().unwrap_or(0) + 1;

    let service = world.create_service_with_mock(move |user_repo| {
        user_repo.expect_create_user().times(1).returning(move |input| {
            Ok(UserRow {
                id: next_id,
                name: input.name.clone(),
                email: input.email.clone(),
                password: input.password.clone(),
            })
        });
    });

    world.user_result = Some(service.create_user(UserInput::new(name, email, password)).await);
}

#[when(expr = "I retrieve user {int}")]
pub async fn retrieve_user(world: &mut TestWorld, user_id: i64) {
    let stored = world.find_stored(user_id);

    let service = world.create_service_with_mock(move |user_repo| {
        user_repo
            .expect_get_user()
            .times(1)
            .returning(move |_| Ok(stored.clone()));
    });

    world.user_result = Some(service.get_user(user_id).await);
}

#[when("I list all users")]
pub async fn list_users(world: &mut TestWorld) {
    let stored = world.stored_users.clone();

    let service = world.create_service_with_mock(move |user_repo| {
        user_repo
            .expect_get_users()
            .times(1)
            .returning(move || Ok(stored.clone()));
    });

    world.users_result = Some(service.get_users().await);
}

#[when(expr = "I update user {int} with name {string}, email {string} and password {string}")]
pub async fn update_user(
    world: &mut TestWorld,
    user_id: i64,
    name: String,
    email: String,
    password: String,
) {
    let exists = world.find_stored(user_id).is_some();

    let service = world.create_service_with_mock(move |user_repo| {
        user_repo
            .expect_update_user()
            .times(1)
            .returning(move |id, input| {
                Ok(exists.then(|| UserRow {
                    id,
                    name: input.name.clone(),
                    email: input.email.clone(),
                    password: input.password.clone(),
                }))
            });
    });

    world.user_result = Some(
        service
            .update_user(user_id, UserInput::new(name, email, password))
            .await,
    );
}

#[when(expr = "I delete user {int}")]
pub async fn delete_user(world: &mut TestWorld, user_id: i64) {
    let exists = world.find_stored(user_id).is_some();

    let service = world.create_service_with_mock(move |user_repo| {
        user_repo
            .expect_delete_user()
            .times(1)
            .returning(move |_| Ok(exists));
    });

    world.delete_result = Some(service.delete_user(user_id).await);
}
