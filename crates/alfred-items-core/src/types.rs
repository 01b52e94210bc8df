//! 公共类型（对外暴露）：字段片段与枚举参数
use serde::Deserialize;
use serde_json::{json, Value};
use std::str::FromStr;

use crate::error::FieldError;
use crate::validators;

/// `arg` 字段：单个字符串或字符串列表
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Arg {
    Single(String),
    Multiple(Vec<String>),
}

impl Arg {
    pub(crate) fn to_json(&self) -> Value {
        match self {
            Arg::Single(s) => Value::String(s.clone()),
            Arg::Multiple(v) => Value::Array(v.iter().cloned().map(Value::String).collect()),
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self { Arg::Single(s.to_string()) }
}

impl From<String> for Arg {
    fn from(s: String) -> Self { Arg::Single(s) }
}

impl From<Vec<String>> for Arg {
    fn from(v: Vec<String>) -> Self { Arg::Multiple(v) }
}

impl From<Vec<&str>> for Arg {
    fn from(v: Vec<&str>) -> Self { Arg::Multiple(v.into_iter().map(str::to_string).collect()) }
}

impl<const N: usize> From<[&str; N]> for Arg {
    fn from(v: [&str; N]) -> Self { Arg::Multiple(v.iter().map(|s| s.to_string()).collect()) }
}

/// `type` 字段
/// - Default：普通结果
/// - File：Alfred 视为文件，并检查文件是否存在
/// - FileSkipCheck：视为文件，但跳过存在性检查
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    Default,
    File,
    FileSkipCheck,
}

impl ItemType {
    pub const NAMES: &'static [&'static str] = &["default", "file", "file:skipcheck"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Default => "default",
            ItemType::File => "file",
            ItemType::FileSkipCheck => "file:skipcheck",
        }
    }
}

impl FromStr for ItemType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validators::type_kind::handle(s, true)
    }
}

/// 图标子类型
/// - FileIcon：取 path 指向文件的图标
/// - FileType：path 为 UTI（如 `com.apple.rtfd`），取该文件类型的图标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    FileIcon,
    FileType,
}

impl IconKind {
    pub const NAMES: &'static [&'static str] = &["fileicon", "filetype"];

    pub fn as_str(&self) -> &'static str {
        match self {
            IconKind::FileIcon => "fileicon",
            IconKind::FileType => "filetype",
        }
    }
}

impl FromStr for IconKind {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validators::icon::parse_kind(s)
    }
}

/// `icon` 片段：`{path, type?}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub path: String,
    pub kind: Option<IconKind>,
}

impl Icon {
    pub(crate) fn to_json(&self) -> Value {
        match self.kind {
            Some(kind) => json!({ "path": self.path, "type": kind.as_str() }),
            None => json!({ "path": self.path }),
        }
    }
}

/// `text` 子键
/// 声明顺序即字典序，保证 BTreeMap 迭代顺序与导出键序一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextVariant {
    Copy,
    LargeType,
}

impl TextVariant {
    pub const NAMES: &'static [&'static str] = &["copy", "largetype"];

    pub fn as_str(&self) -> &'static str {
        match self {
            TextVariant::Copy => "copy",
            TextVariant::LargeType => "largetype",
        }
    }
}

impl FromStr for TextVariant {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validators::text::parse_variant(s)
    }
}

/// 修饰键（按字典序声明）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModKey {
    Alt,
    Cmd,
    Ctrl,
    Fn,
    Shift,
}

impl ModKey {
    pub const NAMES: &'static [&'static str] = &["alt", "cmd", "ctrl", "fn", "shift"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModKey::Alt => "alt",
            ModKey::Cmd => "cmd",
            ModKey::Ctrl => "ctrl",
            ModKey::Fn => "fn",
            ModKey::Shift => "shift",
        }
    }
}

impl FromStr for ModKey {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validators::modifier::parse_key(s)
    }
}

/// 单个修饰键的覆盖项：`{subtitle, arg, valid}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modifier {
    pub subtitle: String,
    pub arg: Arg,
    pub valid: bool,
}

impl Modifier {
    pub(crate) fn to_json(&self) -> Value {
        json!({ "subtitle": self.subtitle, "arg": self.arg.to_json(), "valid": self.valid })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arg_json_shapes() {
        assert_eq!(Arg::from("x").to_json(), json!("x"));
        assert_eq!(Arg::from(["a", "b"]).to_json(), json!(["a", "b"]));
    }

    #[test]
    fn icon_omits_missing_type() {
        let icon = Icon { path: "icon.png".into(), kind: None };
        assert_eq!(icon.to_json(), json!({ "path": "icon.png" }));

        let icon = Icon { path: "~/Desktop".into(), kind: Some(IconKind::FileIcon) };
        assert_eq!(icon.to_json(), json!({ "path": "~/Desktop", "type": "fileicon" }));
    }

    #[test]
    fn enum_names_round_through_from_str() {
        for name in ModKey::NAMES {
            assert_eq!(name.parse::<ModKey>().map(|k| k.as_str()), Ok(*name));
        }
        for name in TextVariant::NAMES {
            assert_eq!(name.parse::<TextVariant>().map(|k| k.as_str()), Ok(*name));
        }
        for name in ItemType::NAMES {
            assert_eq!(name.parse::<ItemType>().map(|k| k.as_str()), Ok(*name));
        }
    }

    #[test]
    fn declared_order_matches_lexical_order() {
        let mut names = ModKey::NAMES.to_vec();
        names.sort();
        assert_eq!(names, ModKey::NAMES.to_vec());
        assert!(ModKey::Alt < ModKey::Shift);
        assert!(TextVariant::Copy < TextVariant::LargeType);
    }
}
