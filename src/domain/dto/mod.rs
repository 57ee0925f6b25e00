//! # Data Transfer Objects (DTO) Module
//!
//! 게이트에 바인딩되는 요청 스키마를 정의합니다.
//! 모든 요청 DTO는 `Deserialize + Serialize + Validate`를 구현하며,
//! 역직렬화 → 검증 → 재직렬화 결과가 핸들러로 전달되는 정규화된 페이로드입니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody` | body 게이트 + `ValidBody<T>` | HTTP 요청 본문 매핑 |
//! | `@RequestParam` | query 게이트 + `ValidQuery<T>` | 쿼리 파라미터 매핑 |
//! | `@PathVariable` | param 게이트 + `ValidParams<T>` | 경로 파라미터 매핑 |
//! | `@Valid` | `validator` crate | 입력값 유효성 검증 |
//! | `@JsonProperty` | `serde` annotations | JSON 필드 매핑 |
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── common.rs       # 페이지 기본값, slug/코드/전화번호 검증, 공통 응답
//! ├── storefront.rs   # 고객용 화면 요청
//! └── admin.rs        # 관리자 백오피스 요청
//! ```
//!
//! ## Spring Validation vs Rust Validator
//!
//! | Spring | Rust | 설명 |
//! |--------|------|------|
//! | `@NotNull` | 기본 동작 | Option<T>가 아닌 필드는 필수 |
//! | `@NotBlank` | `#[validate(length(min = 1))]` | 빈 문자열 방지 |
//! | `@Email` | `#[validate(email)]` | 이메일 형식 검증 |
//! | `@Size(min, max)` | `#[validate(length(min, max))]` | 문자열/목록 길이 검증 |
//! | `@Min` / `@Max` | `#[validate(range(min, max))]` | 숫자 범위 검증 |
//! | `@Valid` (중첩) | `#[validate(nested)]` | 중첩 객체 검증 |

pub mod admin;
pub mod common;
pub mod storefront;

pub use admin::*;
pub use common::GatewayResponse;
pub use storefront::*;
