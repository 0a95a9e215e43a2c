//! Convert serde_json::Value to types that sqlx can bind.

use crate::error::AppError;
use serde_json::Value;
use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::Database;

/// A value that can be bound to a PostgreSQL query. Converts from serde_json::Value.
#[derive(Clone, Debug)]
pub enum PgBindValue {
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    String(String),
}

impl PgBindValue {
    pub fn from_json(v: &Value) -> Result<Self, AppError> {
        Ok(match v {
            Value::Null => PgBindValue::Null,
            Value::Bool(b) => PgBindValue::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    PgBindValue::I64(i)
                } else if let Some(f) = n.as_f64() {
                    PgBindValue::F64(f)
                } else {
                    PgBindValue::I64(0)
                }
            }
            Value::String(s) => PgBindValue::String(s.clone()),
            Value::Array(_) | Value::Object(_) => {
                return Err(AppError::BadRequest(
                    "composite values cannot be bound".into(),
                ))
            }
        })
    }
}

impl<'q> Encode<'q, Postgres> for PgBindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        Ok(match self {
            PgBindValue::Null => <Option<i32> as Encode<Postgres>>::encode_by_ref(&None, buf)?,
            PgBindValue::Bool(b) => <bool as Encode<Postgres>>::encode_by_ref(b, buf)?,
            PgBindValue::I64(n) => <i64 as Encode<Postgres>>::encode_by_ref(n, buf)?,
            PgBindValue::F64(n) => <f64 as Encode<Postgres>>::encode_by_ref(n, buf)?,
            PgBindValue::String(s) => {
                let s_ref: &str = s.as_str();
                <&str as Encode<Postgres>>::encode_by_ref(&s_ref, buf)?
            }
        })
    }

    /// Declared parameter type per variant, so e.g. an `I64` id compares as
    /// bigint against a BIGSERIAL primary key instead of as text.
    fn produces(&self) -> Option<PgTypeInfo> {
        Some(match self {
            PgBindValue::Null => PgTypeInfo::with_name("TEXT"),
            PgBindValue::Bool(_) => PgTypeInfo::with_name("BOOL"),
            PgBindValue::I64(_) => PgTypeInfo::with_name("INT8"),
            PgBindValue::F64(_) => PgTypeInfo::with_name("FLOAT8"),
            PgBindValue::String(_) => PgTypeInfo::with_name("TEXT"),
        })
    }
}

impl sqlx::Type<Postgres> for PgBindValue {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("TEXT")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_convert() {
        assert!(matches!(
            PgBindValue::from_json(&json!("alice")).unwrap(),
            PgBindValue::String(_)
        ));
        assert!(matches!(
            PgBindValue::from_json(&json!(7)).unwrap(),
            PgBindValue::I64(7)
        ));
        assert!(matches!(
            PgBindValue::from_json(&Value::Null).unwrap(),
            PgBindValue::Null
        ));
    }

    #[test]
    fn declared_types_match_variants() {
        // Ids must be declared as bigint so `"id" = $1` type-checks against
        // a BIGSERIAL primary key; a TEXT declaration makes every by-id
        // operation fail in Postgres with "operator does not exist".
        let cases: [(PgBindValue, &str); 4] = [
            (PgBindValue::I64(7), "INT8"),
            (PgBindValue::Bool(true), "BOOL"),
            (PgBindValue::F64(1.5), "FLOAT8"),
            (PgBindValue::String("alice".into()), "TEXT"),
        ];
        for (value, expected) in cases {
            let produced = Encode::<Postgres>::produces(&value).unwrap();
            assert_eq!(
                produced.to_string(),
                PgTypeInfo::with_name(expected).to_string()
            );
        }
    }

    #[test]
    fn composites_are_rejected() {
        assert!(PgBindValue::from_json(&json!({"nested": true})).is_err());
        assert!(PgBindValue::from_json(&json!([1, 2])).is_err());
    }
}
