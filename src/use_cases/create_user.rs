use std::sync::Arc;

use crate::domain::{NewUser, User, UserEmail};
use crate::mail::{DeliveryError, MailAddress, MailProvider, Message};
use crate::repository::UsersRepository;

const WELCOME_SUBJECT: &str = "Seja bem-vindo à plataforma";
const WELCOME_BODY: &str = "<p>Você ja pode fazer login em nossa plataforma</p>";
const SENDER_NAME: &str = "Equipe do meu app";
const SENDER_EMAIL: &str = "equipe@example.com";

// The registration workflow: uniqueness check, persist, welcome email.
// Collaborators are injected at construction.
pub struct CreateUserUseCase {
    users: Arc<dyn UsersRepository>,
    mail: Arc<dyn MailProvider>,
}

#[derive(thiserror::Error, Debug)]
pub enum CreateUserError {
    #[error("a user with email {0} is already registered")]
    UserAlreadyExists(UserEmail),

    #[error("failed to persist the new user")]
    Persistence(#[source] anyhow::Error),

    // The user has already been persisted when delivery fails; the record
    // is not rolled back.
    #[error("failed to deliver the welcome email")]
    Delivery(#[from] DeliveryError),
}

impl CreateUserUseCase {
    pub fn new(users: Arc<dyn UsersRepository>, mail: Arc<dyn MailProvider>) -> Self {
        Self { users, mail }
    }

    #[tracing::instrument(
        name = "creating a new user",
        skip(self, new_user),
        fields(user_email = %new_user.email, user_name = %new_user.name)
    )]
    pub async fn execute(&self, new_user: NewUser) -> Result<User, CreateUserError> {
        let existing = self
            .users
            .find_by_email(&new_user.email)
            .await
            .map_err(CreateUserError::Persistence)?;

        if existing.is_some() {
            return Err(CreateUserError::UserAlreadyExists(new_user.email));
        }

        let user = User::from(new_user);

        self.users
            .save(user.clone())
            .await
            .map_err(CreateUserError::Persistence)?;

        self.mail.send_mail(welcome_message(&user)).await?;

        Ok(user)
    }
}

// Fixed template; only the recipient varies.
fn welcome_message(user: &User) -> Message {
    Message {
        to: MailAddress {
            name: user.name.as_ref().to_string(),
            email: user.email.as_ref().to_string(),
        },
        from: MailAddress {
            name: SENDER_NAME.to_string(),
            email: SENDER_EMAIL.to_string(),
        },
        subject: WELCOME_SUBJECT.to_string(),
        body: WELCOME_BODY.to_string(),
    }
}
