//! Domain layer
//! API 엔티티, 입력 검증, 계정 매칭 규칙을 외부 의존성(I/O) 없이 표현한다.

pub mod entities;
pub mod lookup;
pub mod options;
pub mod validators;
