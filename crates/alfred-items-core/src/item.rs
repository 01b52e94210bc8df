//! 结果行（ResultItem）：字段累积、合并与规范化导出
//!
//! 要点：
//! - 字段集合固定（见 `FieldName`），只能覆盖或合并，不能删除。
//! - `text` 与 `mods` 为可追加字段：每次调用向子映射写入一个键，同键覆盖、异键累积。
//! - `export()` 输出按键字典序排列，与调用顺序无关，保证序列化结果逐字节一致。
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::error::FieldError;
use crate::fields::{FieldName, FieldValue};
use crate::types::{Arg, Icon, IconKind, ItemType, ModKey, Modifier, TextVariant};
use crate::validators;

/// 单个结果行
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultItem {
    fields: BTreeMap<FieldName, FieldValue>,
}

impl ResultItem {
    pub fn new() -> Self {
        Self::default()
    }

    fn put(&mut self, name: FieldName, value: FieldValue) -> &mut Self {
        self.fields.insert(name, value);
        self
    }

    pub fn set_valid(&mut self, valid: bool) -> &mut Self {
        self.put(FieldName::Valid, FieldValue::Bool(valid))
    }

    pub fn set_type(&mut self, kind: ItemType) -> &mut Self {
        self.put(FieldName::Type, FieldValue::Type(kind))
    }

    /// 字符串形式的 `type`，经校验器解析；失败时不修改状态
    pub fn set_type_named(&mut self, kind: &str, verify_existence: bool) -> Result<&mut Self, FieldError> {
        let kind = validators::type_kind::handle(kind, verify_existence)?;
        Ok(self.set_type(kind))
    }

    pub fn set_icon(&mut self, path: impl Into<String>, kind: Option<IconKind>) -> &mut Self {
        self.put(FieldName::Icon, FieldValue::Icon(Icon { path: path.into(), kind }))
    }

    pub fn set_icon_named(&mut self, path: &str, kind: Option<&str>) -> Result<&mut Self, FieldError> {
        let icon = validators::icon::handle(path, kind)?;
        Ok(self.put(FieldName::Icon, FieldValue::Icon(icon)))
    }

    /// 使用 path 指向文件本身的图标
    pub fn set_icon_from_file(&mut self, path: impl Into<String>) -> &mut Self {
        self.set_icon(path, Some(IconKind::FileIcon))
    }

    /// 使用某个文件类型（UTI）的图标
    pub fn set_icon_from_file_type(&mut self, file_type: impl Into<String>) -> &mut Self {
        self.set_icon(file_type, Some(IconKind::FileType))
    }

    pub fn set_subtitle(&mut self, subtitle: impl Into<String>) -> &mut Self {
        self.put(FieldName::Subtitle, FieldValue::Str(subtitle.into()))
    }

    /// 合并写入 `text.<variant>`
    pub fn set_text(&mut self, variant: TextVariant, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.fields.get_mut(&FieldName::Text) {
            Some(FieldValue::Text(map)) => {
                map.insert(variant, value);
            }
            _ => {
                self.fields.insert(FieldName::Text, FieldValue::Text(BTreeMap::from([(variant, value)])));
            }
        }
        self
    }

    pub fn set_text_named(&mut self, variant: &str, value: &str) -> Result<&mut Self, FieldError> {
        let (variant, value) = validators::text::handle(variant, value)?;
        Ok(self.set_text(variant, value))
    }

    pub fn set_copy_text(&mut self, value: impl Into<String>) -> &mut Self {
        self.set_text(TextVariant::Copy, value)
    }

    pub fn set_large_type_text(&mut self, value: impl Into<String>) -> &mut Self {
        self.set_text(TextVariant::LargeType, value)
    }

    /// 合并写入 `mods.<key>`；同键覆盖，其它键保持不变
    pub fn set_mod(&mut self, key: ModKey, subtitle: impl Into<String>, arg: impl Into<Arg>, valid: bool) -> &mut Self {
        let modifier = Modifier { subtitle: subtitle.into(), arg: arg.into(), valid };
        self.merge_mod(key, modifier)
    }

    pub fn set_mod_named(&mut self, key: &str, subtitle: &str, arg: impl Into<Arg>, valid: bool) -> Result<&mut Self, FieldError> {
        let (key, modifier) = validators::modifier::handle(key, subtitle, arg.into(), valid)?;
        Ok(self.merge_mod(key, modifier))
    }

    fn merge_mod(&mut self, key: ModKey, modifier: Modifier) -> &mut Self {
        match self.fields.get_mut(&FieldName::Mods) {
            Some(FieldValue::Mods(map)) => {
                map.insert(key, modifier);
            }
            _ => {
                self.fields.insert(FieldName::Mods, FieldValue::Mods(BTreeMap::from([(key, modifier)])));
            }
        }
        self
    }

    pub fn set_mod_cmd(&mut self, subtitle: impl Into<String>, arg: impl Into<Arg>, valid: bool) -> &mut Self {
        self.set_mod(ModKey::Cmd, subtitle, arg, valid)
    }

    pub fn set_mod_shift(&mut self, subtitle: impl Into<String>, arg: impl Into<Arg>, valid: bool) -> &mut Self {
        self.set_mod(ModKey::Shift, subtitle, arg, valid)
    }

    pub fn set_mod_fn(&mut self, subtitle: impl Into<String>, arg: impl Into<Arg>, valid: bool) -> &mut Self {
        self.set_mod(ModKey::Fn, subtitle, arg, valid)
    }

    pub fn set_mod_ctrl(&mut self, subtitle: impl Into<String>, arg: impl Into<Arg>, valid: bool) -> &mut Self {
        self.set_mod(ModKey::Ctrl, subtitle, arg, valid)
    }

    pub fn set_mod_alt(&mut self, subtitle: impl Into<String>, arg: impl Into<Arg>, valid: bool) -> &mut Self {
        self.set_mod(ModKey::Alt, subtitle, arg, valid)
    }

    pub fn set_match(&mut self, text: impl Into<String>) -> &mut Self {
        self.put(FieldName::Match, FieldValue::Str(text.into()))
    }

    pub fn set_uid(&mut self, uid: impl Into<String>) -> &mut Self {
        self.put(FieldName::Uid, FieldValue::Str(uid.into()))
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.put(FieldName::Title, FieldValue::Str(title.into()))
    }

    /// 绝对路径、`~/` 开头的路径或 URL 均可，此处不校验
    pub fn set_quicklook_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.put(FieldName::QuicklookUrl, FieldValue::Str(url.into()))
    }

    pub fn set_arg(&mut self, arg: impl Into<Arg>) -> &mut Self {
        self.put(FieldName::Arg, FieldValue::Arg(arg.into()))
    }

    pub fn set_autocomplete(&mut self, text: impl Into<String>) -> &mut Self {
        self.put(FieldName::Autocomplete, FieldValue::Str(text.into()))
    }

    /// 读取字段当前值；未设置时为 None
    pub fn get(&self, name: FieldName) -> Option<&FieldValue> {
        self.fields.get(&name)
    }

    pub fn title(&self) -> Option<&str> {
        self.get(FieldName::Title).and_then(FieldValue::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// 规范化导出：全部已设置字段的快照，键按字典序升序
    pub fn export(&self) -> Map<String, Value> {
        // BTreeMap 按 FieldName 顺序迭代，即线上键名的字典序
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str().to_string(), value.to_json()))
            .collect()
    }
}

impl Serialize for ResultItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.export().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fresh_item_is_empty() {
        let item = ResultItem::new();
        assert!(item.get(FieldName::Subtitle).is_none());
        assert!(item.export().is_empty());
        assert!(item.is_empty());
    }

    #[test]
    fn text_merges_instead_of_replacing() {
        let mut item = ResultItem::new();
        item.set_copy_text("x").set_large_type_text("y");
        assert_eq!(Value::Object(item.export())["text"], json!({ "copy": "x", "largetype": "y" }));
    }

    #[test]
    fn scalar_setters_overwrite() {
        let mut item = ResultItem::new();
        item.set_title("first").set_title("second");
        assert_eq!(item.title(), Some("second"));
        assert_eq!(item.len(), 1);
    }

    #[test]
    fn failed_named_setter_leaves_state_unchanged() {
        let mut item = ResultItem::new();
        item.set_title("t");
        let before = item.clone();
        assert!(item.set_type_named("bogus", true).is_err());
        assert!(item.set_icon_named("x.png", Some("bogus")).is_err());
        assert!(item.set_text_named("bogus", "v").is_err());
        assert!(item.set_mod_named("bogus", "s", "a", true).is_err());
        assert_eq!(item, before);
        assert!(!item.export().contains_key("type"));
    }

    #[test]
    fn mods_keep_declared_valid_flag() {
        let mut item = ResultItem::new();
        item.set_mod_alt("no", "x", false);
        assert_eq!(
            Value::Object(item.export())["mods"]["alt"],
            json!({ "subtitle": "no", "arg": "x", "valid": false })
        );
    }

    #[test]
    fn serialize_uses_export() {
        let mut item = ResultItem::new();
        item.set_valid(false).set_arg(["a", "b"]).set_icon_from_file_type("public.folder");
        let s = serde_json::to_string(&item).unwrap();
        assert_eq!(s, r#"{"arg":["a","b"],"icon":{"path":"public.folder","type":"filetype"},"valid":false}"#);
    }
}
