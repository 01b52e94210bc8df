//! 字段名与字段值
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::FieldError;
use crate::types::{Arg, Icon, ItemType, ModKey, Modifier, TextVariant};

/// schema 的固定字段集合
///
/// 变体按线上键名的字典序声明：派生的 `Ord` 即为导出键序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Arg,
    Autocomplete,
    Icon,
    Match,
    Mods,
    QuicklookUrl,
    Subtitle,
    Text,
    Title,
    Type,
    Uid,
    Valid,
}

impl FieldName {
    pub const ALL: [FieldName; 12] = [
        FieldName::Arg,
        FieldName::Autocomplete,
        FieldName::Icon,
        FieldName::Match,
        FieldName::Mods,
        FieldName::QuicklookUrl,
        FieldName::Subtitle,
        FieldName::Text,
        FieldName::Title,
        FieldName::Type,
        FieldName::Uid,
        FieldName::Valid,
    ];

    const NAMES: &'static [&'static str] = &[
        "arg", "autocomplete", "icon", "match", "mods", "quicklookurl",
        "subtitle", "text", "title", "type", "uid", "valid",
    ];

    /// 线上键名（外部契约，不可改名）
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Arg => "arg",
            FieldName::Autocomplete => "autocomplete",
            FieldName::Icon => "icon",
            FieldName::Match => "match",
            FieldName::Mods => "mods",
            FieldName::QuicklookUrl => "quicklookurl",
            FieldName::Subtitle => "subtitle",
            FieldName::Text => "text",
            FieldName::Title => "title",
            FieldName::Type => "type",
            FieldName::Uid => "uid",
            FieldName::Valid => "valid",
        }
    }
}

impl FromStr for FieldName {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| FieldError::invalid("field", s, FieldName::NAMES))
    }
}

/// 已存储的字段值（按字段形态区分）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Bool(bool),
    Str(String),
    Arg(Arg),
    Type(ItemType),
    Icon(Icon),
    Text(BTreeMap<TextVariant, String>),
    Mods(BTreeMap<ModKey, Modifier>),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// 转为 JSON 值；子映射按键的字典序插入
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Bool(b) => Value::Bool(*b),
            FieldValue::Str(s) => Value::String(s.clone()),
            FieldValue::Arg(a) => a.to_json(),
            FieldValue::Type(t) => Value::String(t.as_str().to_string()),
            FieldValue::Icon(i) => i.to_json(),
            FieldValue::Text(m) => Value::Object(
                m.iter()
                    .map(|(k, v)| (k.as_str().to_string(), Value::String(v.clone())))
                    .collect::<Map<String, Value>>(),
            ),
            FieldValue::Mods(m) => Value::Object(
                m.iter()
                    .map(|(k, v)| (k.as_str().to_string(), v.to_json()))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_order_is_lexical() {
        let names: Vec<&str> = FieldName::ALL.iter().map(|f| f.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names, FieldName::NAMES.to_vec());
    }

    #[test]
    fn parse_field_name() {
        assert_eq!("quicklookurl".parse::<FieldName>(), Ok(FieldName::QuicklookUrl));
        assert!("quickLookUrl".parse::<FieldName>().is_err());
        assert!("extra".parse::<FieldName>().is_err());
    }
}
