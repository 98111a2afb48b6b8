use crate::domain::models::account::Account;
use crate::services::hasher::CredentialHasher;
use ::surrealdb::{Surreal, engine::remote::ws::Client, sql::Thing};

pub const NAME: &str = "Test Account";
pub const EMAIL: &str = "test_account@email.com";
pub const PASSWORD: &str = "stR0ngP4ssw0rd!";

/// Inserts an account straight into the store. The returned value carries the
/// plaintext password so tests can log in with it.
pub async fn seed_account(conn: &Surreal<Client>) -> Account {
    let hash = CredentialHasher::default().hash(PASSWORD);

    let thing: Option<Thing> = conn
        .query(
            r#"
            LET $account = (CREATE account CONTENT {
                name: $name,
                email: $email,
                hash: $hash
            });
            RETURN $account[0].id;
            "#,
        )
        .bind(("name", NAME))
        .bind(("email", EMAIL))
        .bind(("hash", hash.clone()))
        .await
        .unwrap()
        .take(1)
        .unwrap();

    Account {
        id: thing.unwrap().id.to_string(),
        name: NAME.to_string(),
        email: EMAIL.to_string(),
        hash,
        password: PASSWORD.to_string(),
    }
}
