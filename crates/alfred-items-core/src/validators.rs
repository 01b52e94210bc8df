//! 字段校验器集合（Type / Icon / Text / Mod）
//!
//! 每个校验器都是纯函数：输入调用方的原始参数，返回可直接存储的片段，
//! 或返回 `FieldError::InvalidFieldValue`（附带可接受的取值）。
//! ResultItem 只负责委托与传播错误，不关心校验细节。

/// `type` 校验
pub mod type_kind {
    use crate::error::FieldError;
    use crate::types::ItemType;

    /// `kind` 取 default / file / file:skipcheck；
    /// `verify_existence = false` 时 file 降级为 file:skipcheck
    pub fn handle(kind: &str, verify_existence: bool) -> Result<ItemType, FieldError> {
        match kind {
            "default" => Ok(ItemType::Default),
            "file" if verify_existence => Ok(ItemType::File),
            "file" | "file:skipcheck" => Ok(ItemType::FileSkipCheck),
            other => Err(FieldError::invalid("type", other, ItemType::NAMES)),
        }
    }
}

/// `icon` 校验
pub mod icon {
    use crate::error::FieldError;
    use crate::types::{Icon, IconKind};

    pub(crate) fn parse_kind(kind: &str) -> Result<IconKind, FieldError> {
        match kind {
            "fileicon" => Ok(IconKind::FileIcon),
            "filetype" => Ok(IconKind::FileType),
            other => Err(FieldError::invalid("icon", other, IconKind::NAMES)),
        }
    }

    /// path 不能为空；kind 为 None 时不输出 type
    pub fn handle(path: &str, kind: Option<&str>) -> Result<Icon, FieldError> {
        if path.is_empty() {
            return Err(FieldError::invalid("icon", path, &["<non-empty path>"]));
        }
        let kind = kind.map(parse_kind).transpose()?;
        Ok(Icon { path: path.to_string(), kind })
    }
}

/// `text` 校验
pub mod text {
    use crate::error::FieldError;
    use crate::types::TextVariant;

    pub(crate) fn parse_variant(variant: &str) -> Result<TextVariant, FieldError> {
        match variant {
            "copy" => Ok(TextVariant::Copy),
            "largetype" => Ok(TextVariant::LargeType),
            other => Err(FieldError::invalid("text", other, TextVariant::NAMES)),
        }
    }

    /// 返回单键片段 `(variant, value)`，由调用方并入已有的 text 映射
    pub fn handle(variant: &str, value: &str) -> Result<(TextVariant, String), FieldError> {
        Ok((parse_variant(variant)?, value.to_string()))
    }
}

/// `mods` 校验
pub mod modifier {
    use crate::error::FieldError;
    use crate::types::{Arg, ModKey, Modifier};

    pub(crate) fn parse_key(key: &str) -> Result<ModKey, FieldError> {
        match key {
            "alt" => Ok(ModKey::Alt),
            "cmd" => Ok(ModKey::Cmd),
            "ctrl" => Ok(ModKey::Ctrl),
            "fn" => Ok(ModKey::Fn),
            "shift" => Ok(ModKey::Shift),
            other => Err(FieldError::invalid("mods", other, ModKey::NAMES)),
        }
    }

    /// 返回单键片段 `(key, {subtitle, arg, valid})`
    pub fn handle(key: &str, subtitle: &str, arg: Arg, valid: bool) -> Result<(ModKey, Modifier), FieldError> {
        let key = parse_key(key)?;
        Ok((key, Modifier { subtitle: subtitle.to_string(), arg, valid }))
    }
}
