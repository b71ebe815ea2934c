//! # Domain Layer
//!
//! 영속 엔티티(`entities`)와 입출력 DTO(`dto`)를 정의합니다.
//!
//! ```text
//! RegisterUserForm ──▶ RegistrationRequest ──▶ User ──(projection)──▶ UserProfile ──▶ UserResponse
//!    (multipart)          (service input)     (insert)                 (read-back)        (envelope)
//! ```

pub mod entities;
pub mod dto;
