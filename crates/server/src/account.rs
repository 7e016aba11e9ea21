//! Account balance endpoint.

use api_types::{ApiResponse, account::AccountBalanceView};
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

pub async fn balance(
    State(state): State<ServerState>,
) -> Result<Json<ApiResponse<AccountBalanceView>>, ServerError> {
    let balance = state.engine.account_balance(&state.account_name).await?;
    Ok(Json(ApiResponse::success(
        "Balance retrieved",
        AccountBalanceView {
            account_name: balance.name,
            balance: balance.balance.to_string(),
        },
    )))
}
