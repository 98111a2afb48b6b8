use actix_web::HttpResponse;

use crate::api::dto::account::AccountDTO;
use crate::domain::error::{AppError, AppResult};
use crate::domain::models::account::Account;
use crate::domain::models::outcome::Outcome;

pub type ApiResult = AppResult<HttpResponse>;

/// Maps a service outcome onto a response. `missing` is the error used for
/// [`Outcome::NotFound`]; a degraded call answers 503.
pub fn respond(outcome: Outcome<Account>, missing: AppError) -> ApiResult {
    if outcome.is_degraded() {
        return Err(AppError::ServiceUnavailable());
    }

    match outcome.found() {
        Some(account) => Ok(HttpResponse::Ok().json(AccountDTO::from(account))),
        None => Err(missing),
    }
}
