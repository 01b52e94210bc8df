//! Script Filter 输出文档：`{"items":[...]}`
use anyhow::Result;
use std::io::Write;

use crate::item::ResultItem;
use crate::options::{RenderOptions, RenderStats};

/// 将结果行写为 Alfred Script Filter JSON 文档
/// - 紧凑模式：逐项流式写出，不在内存中拼接整个文档
/// - 美化模式：整体序列化后缩进输出
/// 各项按传入顺序输出；单项内部键序由 `ResultItem::export` 保证
pub fn write_items(out: &mut dyn Write, items: &[ResultItem], opts: &RenderOptions) -> Result<RenderStats> {
    let mut stats = RenderStats::default();

    if opts.pretty {
        let doc = serde_json::json!({ "items": items });
        serde_json::to_writer_pretty(&mut *out, &doc)?;
        writeln!(out)?;
        stats.items_written = items.len();
        return Ok(stats);
    }

    write!(out, "{{\"items\":[")?;
    let mut first = true;
    for item in items {
        if !first { write!(out, ",")?; } else { first = false; }
        serde_json::to_writer(&mut *out, item)?;
        stats.items_written += 1;
    }
    write!(out, "]}}")?;
    Ok(stats)
}

/// 便捷函数：渲染为字符串
pub fn render_items(items: &[ResultItem], opts: &RenderOptions) -> Result<String> {
    let mut buf = Vec::new();
    write_items(&mut buf, items, opts)?;
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document() {
        let s = render_items(&[], &RenderOptions::default()).unwrap();
        assert_eq!(s, r#"{"items":[]}"#);
    }

    #[test]
    fn compact_items_in_order() {
        let mut a = ResultItem::new();
        a.set_uid("a").set_title("A");
        let mut b = ResultItem::new();
        b.set_title("B");
        let mut buf = Vec::new();
        let stats = write_items(&mut buf, &[a, b], &RenderOptions::default()).unwrap();
        assert_eq!(stats.items_written, 2);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            r#"{"items":[{"title":"A","uid":"a"},{"title":"B"}]}"#
        );
    }

    #[test]
    fn pretty_parses_back_to_same_document() {
        let mut a = ResultItem::new();
        a.set_title("A").set_valid(true);
        let items = vec![a];
        let compact = render_items(&items, &RenderOptions::default()).unwrap();
        let pretty = render_items(&items, &RenderOptions { pretty: true }).unwrap();
        assert!(pretty.contains('\n'));
        let x: serde_json::Value = serde_json::from_str(&compact).unwrap();
        let y: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(x, y);
    }
}
