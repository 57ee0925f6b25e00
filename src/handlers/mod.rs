//! # HTTP Request Handlers Module
//!
//! 검증 게이트를 통과한 요청을 받는 핸들러 함수들입니다.
//! Spring Framework의 Controller 레이어와 같은 자리에 있지만,
//! 비즈니스 로직은 하위 REST 백엔드가 담당하므로 정규화된 페이로드를 그대로 응답합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Storefront, Admin Back-office)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request
//! ┌─────────────────────▼───────────────────────┐
//!   ValidationMiddleware - 스키마 검증            ← 실패 시 400, 핸들러 미호출
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - 정규화된 페이로드 수신     ← Web Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! ```java
//! @PostMapping("/api/v1/admin/articles")
//! public ResponseEntity<?> createArticle(@Valid @RequestBody ArticleRequest request) { ... }
//! ```
//!
//! ```rust,ignore
//! pub async fn create_article(
//!     ValidBody(article): ValidBody<ArticleRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     Ok(HttpResponse::Created().json(GatewayResponse::new(ADMIN_ARTICLE_CREATE, article)))
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - **`storefront`**: 고객용 엔드포인트 (프로필, 주문, 배송지, 발행물, 문의)
//! - **`admin`**: 관리자 엔드포인트 (미디어, 게시글, 블로그, 뉴스레터, 발행물, 문의 내역, 설정)
//! - **`schemas`**: 등록된 스키마 바인딩 목록

pub mod admin;
pub mod schemas;
pub mod storefront;
