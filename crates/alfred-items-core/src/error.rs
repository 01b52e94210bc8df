//! 字段校验错误
use thiserror::Error;

/// 字段取值不合法（枚举型参数不在可接受集合内）
///
/// 由校验器同步返回，setter 原样向上传播，不做默认值替换。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("invalid value {value:?} for field `{field}`, expected one of: {}", .accepted.join(", "))]
    InvalidFieldValue {
        /// 出错的字段名（schema 中的键名）
        field: &'static str,
        /// 调用方传入的原始值
        value: String,
        /// 可接受的取值
        accepted: &'static [&'static str],
    },
}

impl FieldError {
    pub(crate) fn invalid(field: &'static str, value: &str, accepted: &'static [&'static str]) -> Self {
        FieldError::InvalidFieldValue { field, value: value.to_string(), accepted }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_accepted_values() {
        let err = FieldError::invalid("mods", "hyper", &["alt", "cmd"]);
        assert_eq!(
            err.to_string(),
            "invalid value \"hyper\" for field `mods`, expected one of: alt, cmd"
        );
    }

    #[test]
    fn carries_offending_value() {
        let err = FieldError::invalid("type", "bogus", &["default", "file"]);
        match err {
            FieldError::InvalidFieldValue { field, value, accepted } => {
                assert_eq!(field, "type");
                assert_eq!(value, "bogus");
                assert_eq!(accepted.len(), 2);
            }
        }
    }
}
