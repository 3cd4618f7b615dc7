//! BSON 값 변환 유틸리티
//!
//! 응답 경계에서 MongoDB 고유 타입(ObjectId, DateTime)이 노출되지 않도록
//! 문서를 문자열 식별자와 일반 JSON으로 변환합니다.

use mongodb::bson::{Bson, Document};
use serde_json::{Map, Value};

/// 값의 참/거짓 여부를 판정합니다
///
/// null, false, 숫자 0, 빈 문자열, 빈 배열, 빈 문서는 거짓이고 나머지는 참입니다.
pub fn is_truthy(value: &Bson) -> bool {
    match value {
        Bson::Null | Bson::Undefined => false,
        Bson::Boolean(b) => *b,
        Bson::Int32(n) => *n != 0,
        Bson::Int64(n) => *n != 0,
        Bson::Double(n) => *n != 0.0,
        Bson::String(s) => !s.is_empty(),
        Bson::Array(items) => !items.is_empty(),
        Bson::Document(doc) => !doc.is_empty(),
        _ => true,
    }
}

/// 값을 평문 문자열로 변환합니다
///
/// ObjectId는 16진수 문자열, 문자열은 그대로, 날짜는 RFC 3339로 변환됩니다.
pub fn to_plain_string(value: &Bson) -> String {
    match value {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        Bson::Int32(n) => n.to_string(),
        Bson::Int64(n) => n.to_string(),
        Bson::Double(n) => n.to_string(),
        Bson::Boolean(b) => b.to_string(),
        Bson::DateTime(dt) => dt
            .try_to_rfc3339_string()
            .unwrap_or_else(|_| dt.timestamp_millis().to_string()),
        other => other.clone().into_relaxed_extjson().to_string(),
    }
}

/// 문서의 필드를 제자리에서 문자열로 바꿉니다
///
/// 필드가 없으면 아무것도 추가하지 않습니다. 필드 순서는 유지됩니다.
pub fn stringify_field(doc: &mut Document, key: &str) {
    if let Some(value) = doc.get(key) {
        let plain = to_plain_string(value);
        doc.insert(key, plain);
    }
}

/// 필드가 존재하고 참일 때만 문자열로 바꿉니다
pub fn stringify_field_if_truthy(doc: &mut Document, key: &str) {
    if doc.get(key).is_some_and(is_truthy) {
        stringify_field(doc, key);
    }
}

/// 문서를 JSON 객체로 변환합니다
///
/// 중첩된 ObjectId도 모두 16진수 문자열이 됩니다.
pub fn document_to_json(doc: Document) -> Value {
    let map: Map<String, Value> = doc
        .into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect();

    Value::Object(map)
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Bson::DateTime(dt).into_relaxed_extjson(),
        },
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}
