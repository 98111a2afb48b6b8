use std::sync::Arc;

use crate::api::dto::account::{
    AccountDTO, CreateAccountDTO, CredentialsDTO, ListQuery, UpdateAccountDTO,
};
use crate::api::error::{ApiResult, respond};
use crate::api::middlewares::validate::ValidatedJson;
use crate::domain::error::{AppError, message};
use crate::domain::services::account::AccountService;

use actix_web::{
    delete, get, post, put,
    web::{Data as State, Path, Query},
};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(create_account)
        .service(login)
        .service(read_account)
        .service(list_accounts)
        .service(update_account)
        .service(delete_account);
}

#[utoipa::path(
    responses(
        (status = 200, body = AccountDTO, description = "Account Created"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 500, body = AppError, example = json!(AppError::example_500())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    request_body = CreateAccountDTO,
    tag = "Account",
)]
#[post("/accounts")]
pub async fn create_account(
    payload: ValidatedJson<CreateAccountDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let outcome = account_service.create(payload.into_inner().into()).await?;

    respond(outcome, AppError::NotFound(message::NOT_FOUND))
}

#[utoipa::path(
    responses(
        (status = 200, body = AccountDTO),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    request_body = CredentialsDTO,
    tag = "Account"
)]
#[post("/accounts/login")]
pub async fn login(
    payload: ValidatedJson<CredentialsDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let outcome = account_service.login(payload.into_inner().into()).await?;

    respond(outcome, AppError::Unauthorized())
}

#[utoipa::path(
    params(("id" = String, Path, description = "Account id")),
    responses(
        (status = 200, body = AccountDTO),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    tag = "Account"
)]
#[get("/accounts/{id}")]
pub async fn read_account(
    id: Path<String>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let outcome = account_service.read(&id).await?;

    respond(outcome, AppError::NotFound(message::NOT_FOUND))
}

#[utoipa::path(
    params(ListQuery),
    responses(
        (status = 200, body = AccountDTO),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    tag = "Account"
)]
#[get("/accounts")]
pub async fn list_accounts(
    query: Query<ListQuery>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let outcome = account_service.list(&query.id).await?;

    respond(outcome, AppError::NotFound(message::NOT_FOUND))
}

#[utoipa::path(
    params(("id" = String, Path, description = "Account id")),
    responses(
        (status = 200, body = AccountDTO, description = "Account Updated"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    request_body = UpdateAccountDTO,
    tag = "Account"
)]
#[put("/accounts/{id}")]
pub async fn update_account(
    id: Path<String>,
    payload: ValidatedJson<UpdateAccountDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let outcome = account_service
        .update(&id, payload.into_inner().into())
        .await?;

    respond(outcome, AppError::NotFound(message::NOT_FOUND))
}

#[utoipa::path(
    params(("id" = String, Path, description = "Account id")),
    responses(
        (status = 200, body = AccountDTO, description = "Account Deleted"),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    tag = "Account"
)]
#[delete("/accounts/{id}")]
pub async fn delete_account(
    id: Path<String>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let outcome = account_service.delete(&id).await?;

    respond(outcome, AppError::NotFound(message::NOT_FOUND))
}
