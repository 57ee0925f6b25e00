//! 스키마 검증 능력(capability)
//!
//! 게이트는 스키마의 구체 타입을 알지 못하고 `Schema` trait 객체 하나만 가집니다.
//! 라우트 등록 시점에 어떤 스키마를 쓸지 결정되며, 요청 처리 중 타입 검사는 없습니다.

use std::any::type_name;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use serde_path_to_error::Segment;
use validator::Validate;

use crate::validation::field_errors::{
    locate_deserialize_error, quoted_field, DeserializeError, FieldErrors,
};

/// 형태 에러 하나를 메우고 다시 시도하는 최대 횟수
const MAX_SHAPE_REPAIRS: usize = 64;

/// 원시 입력을 정규화된 출력 또는 구조화된 에러로 바꾸는 검증기
///
/// 구현체는 예외를 던지지 않는 "safe parse"만 제공해야 합니다.
/// 성공 시 반환값은 강제 변환(coercion)과 기본값이 적용된 페이로드입니다.
pub trait Schema: Send + Sync {
    /// 진단 메시지와 스키마 목록에 표시할 이름
    fn name(&self) -> &str;

    /// 입력을 검증하고 정규화합니다.
    fn safe_parse(&self, raw: &Value) -> Result<Value, FieldErrors>;
}

/// serde + `validator` 타입 기반 스키마
///
/// 검증은 세 단계로 진행됩니다.
///
/// 1. **역직렬화**: 필드 타입, 필수 여부, 열거형 값 검사 (serde)
/// 2. **규칙 검증**: 길이, 범위, 이메일 등 `#[validate(...)]` 규칙
/// 3. **정규화**: 검증된 값을 다시 JSON으로 직렬화
///
/// serde는 첫 번째 형태 에러에서 멈추므로, 실패한 위치를 자리표시 값으로 메우며
/// 다시 시도해 형태 에러를 모두 모읍니다. 메울 수 있으면 나머지 필드의 규칙 위반도
/// 함께 보고합니다. 자리표시 값 자체에서 나온 규칙 위반과 구조체 단위(`_root`) 규칙
/// 위반은 보고하지 않습니다.
///
/// # Examples
///
/// ```rust,ignore
/// use serde::{Deserialize, Serialize};
/// use validator::Validate;
///
/// #[derive(Deserialize, Serialize, Validate)]
/// struct NewsletterSignup {
///     #[validate(email)]
///     email: String,
/// }
///
/// let schema = TypedSchema::<NewsletterSignup>::new();
/// let normalized = schema.safe_parse(&json!({"email": "a@b.co"}))?;
/// ```
pub struct TypedSchema<T> {
    name: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> TypedSchema<T> {
    /// 타입 이름을 스키마 이름으로 사용합니다.
    pub fn new() -> Self {
        let full = type_name::<T>();
        let short = full.rsplit("::").next().unwrap_or(full);
        Self::named(short)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            _marker: PhantomData,
        }
    }
}

impl<T> Default for TypedSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Schema for TypedSchema<T>
where
    T: DeserializeOwned + Serialize + Validate,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn safe_parse(&self, raw: &Value) -> Result<Value, FieldErrors> {
        let parsed: T = match serde_path_to_error::deserialize(raw) {
            Ok(parsed) => parsed,
            Err(err) => return Err(collect_shape_errors::<T>(raw, err)),
        };

        parsed.validate().map_err(FieldErrors::from)?;

        serde_json::to_value(&parsed)
            .map_err(|err| FieldErrors::root(format!("payload could not be normalized: {}", err)))
    }
}

/// 값 안의 위치 한 단계
#[derive(Debug, Clone, PartialEq, Eq)]
enum PathStep {
    Key(String),
    Index(usize),
}

/// 실패한 위치에 차례로 넣어보는 값. `None`은 키 제거입니다.
///
/// 필수 필드를 지우면 `missing field` 에러가 뒤로 밀릴 뿐이므로 키 제거는 마지막입니다.
fn placeholders() -> [Option<Value>; 7] {
    [
        Some(Value::Null),
        Some(Value::String(String::new())),
        Some(Value::from(0)),
        Some(Value::Bool(false)),
        Some(Value::Array(Vec::new())),
        Some(Value::Object(Map::new())),
        None,
    ]
}

fn collect_shape_errors<T>(raw: &Value, first: DeserializeError) -> FieldErrors
where
    T: DeserializeOwned + Validate,
{
    let mut errors = FieldErrors::from_deserialize_error(&first);
    let mut repaired: Vec<String> = Vec::new();
    let mut working = raw.clone();
    let mut pending = first;

    while repaired.len() < MAX_SHAPE_REPAIRS {
        let Some(steps) = repair_steps(&pending) else {
            return errors;
        };
        let (location, _) = locate_deserialize_error(&pending);
        repaired.push(location.clone());

        let mut next = None;
        for placeholder in placeholders() {
            if !patch(&mut working, &steps, placeholder) {
                continue;
            }
            match serde_path_to_error::deserialize::<_, T>(&working) {
                Ok(parsed) => {
                    if let Err(rule_errors) = parsed.validate() {
                        for (path, messages) in FieldErrors::from(rule_errors).into_inner() {
                            if path == FieldErrors::ROOT || is_covered(&repaired, &path) {
                                continue;
                            }
                            for message in messages {
                                errors.add(path.clone(), message);
                            }
                        }
                    }
                    return errors;
                }
                Err(err) if locate_deserialize_error(&err).0 == location => continue,
                Err(err) => {
                    next = Some(err);
                    break;
                }
            }
        }

        let Some(err) = next else {
            return errors;
        };
        let (path, message) = locate_deserialize_error(&err);
        if repaired.contains(&path) {
            return errors;
        }
        // 자리표시 값 안쪽 에러는 보고하지 않음
        if !is_covered(&repaired, &path) {
            errors.add(path, message);
        }
        pending = err;
    }
    errors
}

/// 에러 위치까지의 경로. 최상위 값 자체의 에러는 메울 수 없으므로 `None`입니다.
fn repair_steps(error: &DeserializeError) -> Option<Vec<PathStep>> {
    let mut steps = Vec::new();
    for segment in error.path().iter() {
        match segment {
            Segment::Map { key } => steps.push(PathStep::Key(key.clone())),
            Segment::Seq { index } => steps.push(PathStep::Index(*index)),
            Segment::Enum { .. } | Segment::Unknown => return None,
        }
    }

    let message = error.inner().to_string();
    let field = quoted_field(&message, "missing field `")
        .or_else(|| quoted_field(&message, "unknown field `"));
    if let Some(field) = field {
        if steps.last() != Some(&PathStep::Key(field.to_string())) {
            steps.push(PathStep::Key(field.to_string()));
        }
    }

    if steps.is_empty() { None } else { Some(steps) }
}

fn patch(target: &mut Value, steps: &[PathStep], placeholder: Option<Value>) -> bool {
    let Some((last, parents)) = steps.split_last() else {
        return false;
    };

    let mut node = target;
    for step in parents {
        node = match (step, node) {
            (PathStep::Key(key), Value::Object(map)) => match map.get_mut(key) {
                Some(child) => child,
                None => return false,
            },
            (PathStep::Index(index), Value::Array(items)) => match items.get_mut(*index) {
                Some(child) => child,
                None => return false,
            },
            _ => return false,
        };
    }

    match (last, node, placeholder) {
        (PathStep::Key(key), Value::Object(map), None) => {
            map.remove(key);
            true
        }
        (PathStep::Key(key), Value::Object(map), Some(value)) => {
            map.insert(key.clone(), value);
            true
        }
        (PathStep::Index(index), Value::Array(items), Some(value)) if *index < items.len() => {
            items[*index] = value;
            true
        }
        _ => false,
    }
}

/// `path`가 이미 메운 위치이거나 그 안쪽인지 확인합니다.
fn is_covered(repaired: &[String], path: &str) -> bool {
    repaired.iter().any(|location| {
        path == location
            || path
                .strip_prefix(location.as_str())
                .is_some_and(|rest| rest.starts_with('.') || rest.starts_with('['))
    })
}

/// `TypedSchema<T>`를 trait 객체로 감싸 반환합니다.
pub fn typed<T>() -> Arc<dyn Schema>
where
    T: DeserializeOwned + Serialize + Validate + 'static,
{
    Arc::new(TypedSchema::<T>::new())
}
