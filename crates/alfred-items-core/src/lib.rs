//! Alfred Script Filter 结果行构建库
//!
//! 设计要点：
//! - 每个结果行（`ResultItem`）持有固定字段集合到字段值的映射，通过链式 setter 累积。
//! - 枚举型参数（type / icon 子类型 / text 变体 / 修饰键）使用 Rust 枚举；
//!   字符串输入在边界处经校验器解析，非法值返回 `FieldError::InvalidFieldValue`。
//! - `text` 与 `mods` 为可追加字段：同键覆盖、异键累积。
//! - 导出结果按键字典序排列，序列化结果与 setter 调用顺序无关。

mod error;
mod fields;
mod item;
mod item_file;
mod options;
mod output;
mod types;
pub mod validators;

pub use error::FieldError;
pub use fields::{FieldName, FieldValue};
pub use item::ResultItem;
pub use item_file::{load_item_file, parse_item_file};
pub use options::{RenderOptions, RenderStats};
pub use output::{render_items, write_items};
pub use types::{Arg, Icon, IconKind, ItemType, ModKey, Modifier, TextVariant};
