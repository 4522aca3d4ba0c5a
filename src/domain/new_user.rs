use crate::domain::{user_email::UserEmail, user_name::UserName};

// Registration data that has passed validation but has not been persisted.
pub struct NewUser {
    pub email: UserEmail,
    pub name: UserName,
}
