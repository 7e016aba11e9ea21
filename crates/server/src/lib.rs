use api_types::ApiResponse;
use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

pub use server::{ServerState, router, run, run_with_listener, spawn_with_listener};

mod account;
mod campaigns;
mod keywords;
mod server;
mod towns;

pub mod types {
    pub mod campaign {
        pub use api_types::campaign::{CampaignUpsert, CampaignView};
    }

    pub mod town {
        pub use api_types::town::TownView;
    }

    pub mod keyword {
        pub use api_types::keyword::KeywordView;
    }

    pub mod account {
        pub use api_types::account::AccountBalanceView;
    }
}

pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::AccountNotFound(_)
        | EngineError::CampaignNotFound(_)
        | EngineError::TownNotFound(_)
        | EngineError::KeywordNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::InsufficientFunds(_) | EngineError::Validation(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ServerError::Engine(err) => {
                (status_for_engine_error(&err), message_for_engine_error(err))
            }
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_missing_campaign_maps_to_404() {
        let res = ServerError::from(EngineError::CampaignNotFound(7)).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn engine_missing_account_maps_to_404() {
        let res =
            ServerError::from(EngineError::AccountNotFound("Emerald Account".to_string()))
                .into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn engine_insufficient_funds_maps_to_422() {
        let res =
            ServerError::from(EngineError::InsufficientFunds("Emerald Account".to_string()))
                .into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn engine_validation_maps_to_422() {
        let res = ServerError::from(EngineError::Validation("radius".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn generic_maps_to_400() {
        let res = ServerError::Generic("bad".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
