use crate::api::dto::validation::{is_email, is_name, is_password};
use crate::domain::models::account::{Account, Credentials};
use serde::Deserialize;
use serde::Serialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Account as returned to clients. The credential hash stays server side.
#[derive(Debug, Serialize, ToSchema)]
pub struct AccountDTO {
    id: String,
    name: String,
    email: String,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct CreateAccountDTO {
    #[validate(custom(function = "is_name"))]
    #[schema(examples("your_name"))]
    pub name: Option<String>,

    #[validate(custom(function = "is_email"))]
    #[schema(examples("your@email.com"))]
    pub email: String,

    #[validate(custom(function = "is_password"))]
    #[schema(examples("s3cr3t"))]
    pub password: String,
}

/// Partial update. Absent fields keep their stored value.
#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct UpdateAccountDTO {
    #[validate(custom(function = "is_name"))]
    #[schema(examples("your_new_name"))]
    pub name: Option<String>,

    #[validate(custom(function = "is_email"))]
    #[schema(examples("your_new@email.com"))]
    pub email: Option<String>,

    #[validate(custom(function = "is_password"))]
    #[schema(examples("n3w_s3cr3t"))]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CredentialsDTO {
    #[validate(custom(function = "is_email"))]
    #[schema(examples("your@email.com"))]
    pub email: String,

    #[schema(examples("s3cr3t"))]
    pub password: String,
}

/// Query of the list endpoint, which looks an account up by id.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Account id
    pub id: String,
}

impl From<Account> for AccountDTO {
    fn from(val: Account) -> Self {
        AccountDTO {
            id: val.id,
            name: val.name,
            email: val.email,
        }
    }
}

impl From<CreateAccountDTO> for Account {
    fn from(create_account: CreateAccountDTO) -> Self {
        Account {
            name: create_account.name.unwrap_or_default(),
            email: create_account.email,
            password: create_account.password,
            ..Default::default()
        }
    }
}

impl From<UpdateAccountDTO> for Account {
    fn from(update_account: UpdateAccountDTO) -> Self {
        Account {
            name: update_account.name.unwrap_or_default(),
            email: update_account.email.unwrap_or_default(),
            password: update_account.password.unwrap_or_default(),
            ..Default::default()
        }
    }
}

impl From<CredentialsDTO> for Credentials {
    fn from(credentials: CredentialsDTO) -> Self {
        Credentials {
            email: credentials.email,
            password: credentials.password,
        }
    }
}
