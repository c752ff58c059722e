use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_commission_rule::{CommissionRuleCreated, CommissionRuleDraft};

use crate::shared::app_state::AppState;
use crate::shared::error::ApiError;

const CREATED_MESSAGE: &str = "Commission rule created successfully";
const FAILED_MESSAGE: &str = "Failed to create commission rule";

/// Создание правила комиссии.
///
/// Черновик проверяется повторно на сервере, затем собирается payload и
/// отправляется во внешний API. Повторов нет: ошибку видит пользователь.
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<CommissionRuleDraft>,
) -> Result<(StatusCode, Json<CommissionRuleCreated>), ApiError> {
    draft.validate()?;

    let payload = draft.to_payload();
    tracing::info!(
        "Creating commission rule '{}' ({} {})",
        payload.name,
        payload.reference.code(),
        payload.reference_id
    );

    let response = state
        .commerce
        .create_commission_rule(&payload)
        .await
        .map_err(creation_failure)?;

    let id = response
        .pointer("/commission_rule/id")
        .and_then(|v| v.as_str())
        .map(str::to_string);

    Ok((
        StatusCode::CREATED,
        Json(CommissionRuleCreated {
            id,
            message: CREATED_MESSAGE.to_string(),
        }),
    ))
}

/// Ошибка создания для пользователя: сообщение внешнего API или общий текст
fn creation_failure(error: ApiError) -> ApiError {
    match error {
        error @ ApiError::Upstream {
            message: Some(_), ..
        } => error,
        ApiError::Upstream { .. } | ApiError::NotFound(_) | ApiError::Transport(_) => {
            ApiError::Upstream {
                status: StatusCode::BAD_GATEWAY.as_u16(),
                message: Some(FAILED_MESSAGE.to_string()),
            }
        }
        other => other,
    }
}
