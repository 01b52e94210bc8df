//! 结果行定义文件加载（TOML）
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::item::ResultItem;
use crate::types::Arg;

/// 图标配置：`icon = { path = "...", type = "fileicon" }`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct IconEntry {
    path: String,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

/// 修饰键配置：`[items.mods.cmd]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModEntry {
    #[serde(default)]
    subtitle: String,
    arg: Arg,
    #[serde(default = "default_true")]
    valid: bool,
}

fn default_true() -> bool { true }

/// 单个结果行的配置（字段名与 JSON schema 保持一致）
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ItemEntry {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    subtitle: Option<String>,
    #[serde(default)]
    arg: Option<Arg>,
    #[serde(default)]
    uid: Option<String>,
    #[serde(default)]
    valid: Option<bool>,
    #[serde(default, rename = "match")]
    match_text: Option<String>,
    #[serde(default)]
    autocomplete: Option<String>,
    #[serde(default)]
    quicklookurl: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default = "default_true")]
    verify_existence: bool,
    #[serde(default)]
    icon: Option<IconEntry>,
    /// 键为 copy / largetype
    #[serde(default)]
    text: BTreeMap<String, String>,
    /// 键为 cmd / shift / fn / ctrl / alt
    #[serde(default)]
    mods: BTreeMap<String, ModEntry>,
}

/// 顶层文件结构
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ItemFile {
    #[serde(default)]
    items: Vec<ItemEntry>,
}

impl ItemEntry {
    /// 通过 setter 构建，枚举型取值全部经过校验器
    fn into_item(self) -> Result<ResultItem> {
        let mut item = ResultItem::new();
        if let Some(v) = self.title { item.set_title(v); }
        if let Some(v) = self.subtitle { item.set_subtitle(v); }
        if let Some(v) = self.arg { item.set_arg(v); }
        if let Some(v) = self.uid { item.set_uid(v); }
        if let Some(v) = self.valid { item.set_valid(v); }
        if let Some(v) = self.match_text { item.set_match(v); }
        if let Some(v) = self.autocomplete { item.set_autocomplete(v); }
        if let Some(v) = self.quicklookurl { item.set_quicklook_url(v); }
        if let Some(kind) = self.kind {
            item.set_type_named(&kind, self.verify_existence)?;
        }
        if let Some(icon) = self.icon {
            item.set_icon_named(&icon.path, icon.kind.as_deref())?;
        }
        for (variant, value) in &self.text {
            item.set_text_named(variant, value)?;
        }
        for (key, m) in self.mods {
            item.set_mod_named(&key, &m.subtitle, m.arg, m.valid)?;
        }
        Ok(item)
    }
}

/// 从 TOML 文本解析结果行列表（保持文件内顺序）
pub fn parse_item_file(txt: &str) -> Result<Vec<ResultItem>> {
    let parsed: ItemFile = toml::from_str(txt)?;
    let mut out = Vec::with_capacity(parsed.items.len());
    for (idx, e) in parsed.items.into_iter().enumerate() {
        out.push(e.into_item().with_context(|| format!("items[{idx}]"))?);
    }
    Ok(out)
}

/// 从 TOML 文件加载结果行列表
pub fn load_item_file(path: &Path) -> Result<Vec<ResultItem>> {
    let txt = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_item_file(&txt)
}
