//! # Storefront HTTP Handlers
//!
//! | 메서드 | 경로 | 게이트 | 상태 코드 |
//! |--------|------|--------|-----------|
//! | `PUT` | `/api/v1/store/profile` | body `ProfileUpdateRequest` | 200 OK |
//! | `GET` | `/api/v1/store/orders` | query `OrderListQuery` | 200 OK |
//! | `POST` | `/api/v1/store/addresses` | body `AddressRequest` | 201 Created |
//! | `GET` | `/api/v1/store/publications` | query `PublicationListQuery` | 200 OK |
//! | `POST` | `/api/v1/contact` | body `ContactSubmissionRequest` | 201 Created |

use actix_web::HttpResponse;

use crate::core::errors::AppError;
use crate::domain::dto::{
    AddressRequest, ContactSubmissionRequest, GatewayResponse, OrderListQuery,
    ProfileUpdateRequest, PublicationListQuery,
};
use crate::middlewares::{ValidBody, ValidQuery};
use crate::routes::route_ids;

/// 프로필 수정
pub async fn update_profile(
    ValidBody(profile): ValidBody<ProfileUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(GatewayResponse::new(route_ids::STORE_PROFILE_UPDATE, profile)))
}

/// 주문 목록 조회
///
/// `page`, `limit`은 쿼리 스트링에서 숫자로 변환되고 기본값이 채워진 상태로 들어옵니다.
pub async fn list_orders(
    ValidQuery(query): ValidQuery<OrderListQuery>,
) -> Result<HttpResponse, AppError> {
    log::debug!("주문 목록 조회: page={} limit={}", query.page, query.limit);
    Ok(HttpResponse::Ok().json(GatewayResponse::new(route_ids::STORE_ORDERS_LIST, query)))
}

/// 배송지 등록
pub async fn create_address(
    ValidBody(address): ValidBody<AddressRequest>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Created().json(GatewayResponse::new(route_ids::STORE_ADDRESS_CREATE, address)))
}

/// 발행물 목록 조회
pub async fn list_publications(
    ValidQuery(query): ValidQuery<PublicationListQuery>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(GatewayResponse::new(route_ids::STORE_PUBLICATIONS_LIST, query)))
}

/// 문의 접수 (공개 엔드포인트)
pub async fn submit_contact(
    ValidBody(submission): ValidBody<ContactSubmissionRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("📨 문의 접수: {}", submission.email);
    Ok(HttpResponse::Created().json(GatewayResponse::new(route_ids::CONTACT_SUBMIT, submission)))
}
