//! # Configuration Module
//!
//! 게이트웨이의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`app_config`] - 실행 환경, 서버, Rate Limiting, CORS, 검증 게이트 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, ValidationConfig};
//!
//! let env = Environment::current();
//! let server = ServerConfig::from_env();
//! let validation = ValidationConfig::from_env()?; // 본문 크기 제한 0이면 ConfigurationError
//! println!("{:?} → {}", env, server.bind_address());
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # CORS (쉼표 구분)
//! export CORS_ALLOWED_ORIGINS="https://shop.example.com,https://admin.example.com"
//!
//! # 검증 게이트
//! export VALIDATION_MAX_BODY_BYTES="262144"
//! export VALIDATION_LOG_TARGET="validation"
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Configuration` | `pub struct ...Config` |
//! | `@Value("${property}")` | `env::var("PROPERTY")` |
//! | `@Profile("dev")` | `Environment::Development` |
//! | `application.yml` | `.env` 파일 |

pub mod app_config;

pub use app_config::*;
