use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use uuid::Uuid;

use crate::domain::{NewUser, UserEmail, UserName};
use crate::use_cases::{CreateUserError, CreateUserUseCase};

#[derive(serde::Deserialize)]
pub struct CreateUserRequest {
    name: String,
    email: String,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = String;

    fn try_from(request: CreateUserRequest) -> Result<Self, Self::Error> {
        let name = UserName::parse(request.name)?;
        let email = UserEmail::parse(request.email)?;
        Ok(NewUser { email, name })
    }
}

#[derive(thiserror::Error)]
pub enum RegistrationError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    CreateUser(#[from] CreateUserError),
}

impl std::fmt::Debug for RegistrationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for RegistrationError {
    fn status_code(&self) -> StatusCode {
        match self {
            RegistrationError::Validation(_) => StatusCode::BAD_REQUEST,
            RegistrationError::CreateUser(
                CreateUserError::UserAlreadyExists(_),
            ) => StatusCode::CONFLICT,
            RegistrationError::CreateUser(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(serde::Serialize)]
pub struct CreateUserResponse {
    id: Uuid,
    name: String,
    email: String,
}

#[tracing::instrument(
    name = "registering a new user",
    skip(request, use_case),
    fields(user_email = %request.email, user_name = %request.name)
)]
pub async fn create_user(
    request: web::Json<CreateUserRequest>,
    use_case: web::Data<CreateUserUseCase>,
) -> Result<HttpResponse, RegistrationError> {
    let new_user: NewUser = request
        .into_inner()
        .try_into()
        .map_err(RegistrationError::Validation)?;

    let user = use_case.execute(new_user).await?;

    Ok(HttpResponse::Created().json(CreateUserResponse {
        id: user.id,
        name: user.name.as_ref().to_string(),
        email: user.email.as_ref().to_string(),
    }))
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
