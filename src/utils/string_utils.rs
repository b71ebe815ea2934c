//! # 문자열 유틸리티
//!
//! 폼 입력값의 존재 여부를 검사하는 함수들입니다.
//! 공백만 있는 값은 비어 있는 것으로 봅니다. 형식 검증은 하지 않습니다.

use crate::core::errors::AppError;

/// 값이 공백이 아닌 문자를 하나 이상 포함하는지 확인합니다.
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 선택 값이 존재하고 공백이 아닌지 확인합니다.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(is_valid_string)
}

/// 모든 필드가 존재하는지 검사합니다.
///
/// 하나라도 없거나 비어 있으면 `message`로 `ValidationError`를 반환합니다.
///
/// ```rust,ignore
/// require_all(
///     &[request.full_name.as_deref(), request.email.as_deref()],
///     "All fields are required",
/// )?;
/// ```
pub fn require_all(values: &[Option<&str>], message: &str) -> Result<(), AppError> {
    if values.iter().all(|value| is_present(*value)) {
        Ok(())
    } else {
        Err(AppError::ValidationError(message.to_string()))
    }
}
