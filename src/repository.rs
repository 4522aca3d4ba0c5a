use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{User, UserEmail};

// The contract any backing store must satisfy. `save` performs no
// uniqueness check of its own; callers are responsible for looking the
// email up first. A durable implementation has to bring its own isolation
// (a unique index, or a transaction around the read-then-write).
#[async_trait]
pub trait UsersRepository: Send + Sync {
    // Exact-match lookup. Absence is `Ok(None)`, not an error.
    async fn find_by_email(
        &self,
        email: &UserEmail,
    ) -> Result<Option<User>, anyhow::Error>;

    // Appends the user to the backing store.
    async fn save(&self, user: User) -> Result<(), anyhow::Error>;
}

// In-memory store over an ordered sequence of users. There is no protection
// against simultaneous writers racing the same email.
#[derive(Default)]
pub struct InMemoryUsersRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUsersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // Snapshot of every stored record, in insertion order.
    pub async fn stored_users(&self) -> Vec<User> {
        self.users.read().await.clone()
    }
}

#[async_trait]
impl UsersRepository for InMemoryUsersRepository {
    #[tracing::instrument(name = "looking up user by email", skip(self))]
    async fn find_by_email(
        &self,
        email: &UserEmail,
    ) -> Result<Option<User>, anyhow::Error> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|user| user.email.as_ref() == email.as_ref())
            .cloned())
    }

    #[tracing::instrument(
        name = "saving new user details",
        skip(self, user),
        fields(user_email = %user.email)
    )]
    async fn save(&self, user: User) -> Result<(), anyhow::Error> {
        let mut users = self.users.write().await;
        users.push(user);
        Ok(())
    }
}
