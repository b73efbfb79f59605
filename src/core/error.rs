//! 核心错误处理模块

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email already exists";
pub const NOT_FOUND_MESSAGE: &str = "User not found";

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// 请求体格式错误、字段缺失、类型不符或校验失败
    #[error("Validation failed: {}", format_fields(.0))]
    Validation(Vec<FieldError>),
    /// 创建用户时邮箱已被占用
    #[error("Email already exists")]
    DuplicateEmail,
    /// 引用了不存在的用户 ID
    #[error("User not found")]
    NotFound,
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

fn format_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

/// 单个字段的校验错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
    pub code: u16,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldError>>,
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CoreError::DuplicateEmail => StatusCode::BAD_REQUEST,
            CoreError::NotFound => StatusCode::NOT_FOUND,
            CoreError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_code, detail, fields) = match self {
            CoreError::Validation(fields) => (
                "VALIDATION_ERROR",
                "Request validation failed".to_string(),
                Some(fields),
            ),
            CoreError::DuplicateEmail => ("DUPLICATE_EMAIL", DUPLICATE_EMAIL_MESSAGE.to_string(), None),
            CoreError::NotFound => ("NOT_FOUND", NOT_FOUND_MESSAGE.to_string(), None),
            CoreError::InternalServerError(msg) => {
                error!("Internal error: {}", msg);
                (
                    "INTERNAL_SERVER_ERROR",
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let error_response = ErrorResponse {
            error: error_code.to_string(),
            detail,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            fields,
        };

        (status, axum::Json(error_response)).into_response()
    }
}

impl From<JsonRejection> for CoreError {
    fn from(rejection: JsonRejection) -> Self {
        CoreError::Validation(vec![FieldError::new("body", rejection.body_text())])
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = err
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("invalid value ({})", error.code));
                    FieldError::new(field.to_string(), message)
                })
            })
            .collect();

        // HashMap 迭代顺序不稳定
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        CoreError::Validation(fields)
    }
}
