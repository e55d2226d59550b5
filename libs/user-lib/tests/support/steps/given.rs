use cucumber::given;

use user_lib::repository::models::UserRow;

use crate::support::world::TestWorld;

#[given(expr = "a stored user with id {int}, name {string} and email {string}")]
pub async fn stored_user(world: &mut TestWorld, id: i64, name: String, email: String) {
    world.stored_users.push(UserRow {
        id,
        name,
        email,
        password: "pass".to_string(),
    });
}

#[given("no stored users")]
pub async fn no_stored_users(world: &mut TestWorld) {
    world.stored_users.clear();
}
