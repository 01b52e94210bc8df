//! 输出选项与统计信息（模块）

/// 输出选项
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// 是否缩进美化输出；默认紧凑单行，便于 Alfred 直接读取
    pub pretty: bool,
}

/// 输出统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone)]
pub struct RenderStats {
    pub items_written: usize,
}
