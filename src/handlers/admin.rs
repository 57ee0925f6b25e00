//! # Admin Back-office HTTP Handlers
//!
//! | 메서드 | 경로 | 게이트 | 상태 코드 |
//! |--------|------|--------|-----------|
//! | `GET` | `/api/v1/admin/media` | query `MediaListQuery` | 200 OK |
//! | `POST` | `/api/v1/admin/articles` | body `ArticleRequest` | 201 Created |
//! | `PUT` | `/api/v1/admin/articles/{article_id}` | param `ArticleParams` + body `ArticleRequest` | 200 OK |
//! | `POST` | `/api/v1/admin/blogs` | body `BlogRequest` | 201 Created |
//! | `POST` | `/api/v1/admin/newsletters` | body `NewsletterRequest` | 201 Created |
//! | `POST` | `/api/v1/admin/publications` | body `PublicationRequest` | 201 Created |
//! | `GET` | `/api/v1/admin/contact-submissions` | query `ContactSubmissionQuery` | 200 OK |
//! | `PATCH` | `/api/v1/admin/settings` | body `SettingsUpdateRequest` | 200 OK |

use actix_web::HttpResponse;
use serde_json::json;

use crate::core::errors::AppError;
use crate::domain::dto::{
    ArticleParams, ArticleRequest, BlogRequest, ContactSubmissionQuery, GatewayResponse,
    MediaListQuery, NewsletterRequest, PublicationRequest, SettingsUpdateRequest,
};
use crate::middlewares::{ValidBody, ValidParams, ValidQuery};
use crate::routes::route_ids;

/// 미디어 라이브러리 조회
pub async fn list_media(
    ValidQuery(query): ValidQuery<MediaListQuery>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(GatewayResponse::new(route_ids::ADMIN_MEDIA_LIST, query)))
}

/// 게시글 작성
pub async fn create_article(
    ValidBody(article): ValidBody<ArticleRequest>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Created().json(GatewayResponse::new(route_ids::ADMIN_ARTICLE_CREATE, article)))
}

/// 게시글 수정
///
/// 경로 파라미터와 본문이 각각의 게이트를 통과해야 호출됩니다.
pub async fn update_article(
    ValidParams(params): ValidParams<ArticleParams>,
    ValidBody(article): ValidBody<ArticleRequest>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(GatewayResponse::new(
        route_ids::ADMIN_ARTICLE_UPDATE,
        json!({
            "article_id": params.article_id,
            "article": article,
        }),
    )))
}

/// 블로그 생성
pub async fn create_blog(
    ValidBody(blog): ValidBody<BlogRequest>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Created().json(GatewayResponse::new(route_ids::ADMIN_BLOG_CREATE, blog)))
}

/// 뉴스레터 발송 예약
pub async fn create_newsletter(
    ValidBody(newsletter): ValidBody<NewsletterRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!(
        "📰 뉴스레터 요청: 수신자 {}명, 예약={}",
        newsletter.audience.len(),
        newsletter.send_at.as_deref().unwrap_or("즉시")
    );
    Ok(HttpResponse::Created().json(GatewayResponse::new(
        route_ids::ADMIN_NEWSLETTER_CREATE,
        newsletter,
    )))
}

/// 발행물 생성
pub async fn create_publication(
    ValidBody(publication): ValidBody<PublicationRequest>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Created().json(GatewayResponse::new(
        route_ids::ADMIN_PUBLICATION_CREATE,
        publication,
    )))
}

/// 문의 내역 조회
pub async fn list_contact_submissions(
    ValidQuery(query): ValidQuery<ContactSubmissionQuery>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(GatewayResponse::new(
        route_ids::ADMIN_CONTACT_SUBMISSIONS_LIST,
        query,
    )))
}

/// 사이트 설정 부분 수정
pub async fn update_settings(
    ValidBody(settings): ValidBody<SettingsUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(GatewayResponse::new(route_ids::ADMIN_SETTINGS_UPDATE, settings)))
}
