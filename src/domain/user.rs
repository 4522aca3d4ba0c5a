use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{NewUser, UserEmail, UserName};

// A registered user. Never mutated after construction; the email doubles as
// the lookup key and must stay unique within a repository.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: UserName,
    pub email: UserEmail,
    pub created_at: DateTime<Utc>,
}

impl From<NewUser> for User {
    fn from(new_user: NewUser) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            created_at: Utc::now(),
        }
    }
}
