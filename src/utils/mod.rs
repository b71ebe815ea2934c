//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 입력값 존재 여부 검사
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::require_all;
//!
//! require_all(&[Some("John"), None], "All fields are required")?; // Err
//! ```

pub mod string_utils;
