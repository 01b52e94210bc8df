use alfred_items_core::{load_item_file, write_items, Arg, RenderOptions, ResultItem};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "alfred-items", version, about = "生成 Alfred Script Filter JSON")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 读取 TOML 定义文件并输出 {"items":[...]}
    Render {
        /// 结果行定义文件（TOML，[[items]] 数组）
        #[arg(long)]
        input: PathBuf,

        /// 输出文件；"-" 表示标准输出
        #[arg(long, default_value = "-")]
        output: String,

        /// 缩进美化输出
        #[arg(long)]
        pretty: bool,
    },
    /// 由命令行参数构建单个结果行并输出到标准输出
    Item {
        #[arg(long)]
        title: String,

        #[arg(long)]
        subtitle: Option<String>,

        /// 可重复；多次给出时输出为数组
        #[arg(long)]
        arg: Vec<String>,

        #[arg(long)]
        uid: Option<String>,

        /// default / file / file:skipcheck
        #[arg(long = "type")]
        kind: Option<String>,

        /// type=file 时跳过文件存在性检查
        #[arg(long)]
        skip_check: bool,

        /// 图标路径
        #[arg(long)]
        icon: Option<String>,

        /// 图标子类型：fileicon / filetype
        #[arg(long, requires = "icon")]
        icon_type: Option<String>,

        /// 复制文本（Cmd+C）
        #[arg(long)]
        copy: Option<String>,

        /// 大字显示文本（Cmd+L）
        #[arg(long)]
        largetype: Option<String>,

        /// 修饰键覆盖，格式 key:subtitle:arg，可重复
        #[arg(long = "mod")]
        mods: Vec<String>,

        /// 标记为不可执行（valid=false）
        #[arg(long)]
        invalid: bool,

        #[arg(long = "match")]
        match_text: Option<String>,

        #[arg(long)]
        autocomplete: Option<String>,

        #[arg(long)]
        quicklookurl: Option<String>,

        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { input, output, pretty } => {
            info!(?input, %output, "rendering items");
            let items = load_item_file(&input).context("load item file failed")?;
            let opts = RenderOptions { pretty };
            let stats = write_to(&output, &items, &opts)?;
            info!(items_written = stats, "render finished");
        }
        Commands::Item {
            title, subtitle, arg, uid, kind, skip_check, icon, icon_type, copy, largetype,
            mods, invalid, match_text, autocomplete, quicklookurl, pretty,
        } => {
            let mut item = ResultItem::new();
            item.set_title(title).set_valid(!invalid);
            if let Some(v) = subtitle { item.set_subtitle(v); }
            if let Some(v) = to_arg(arg) { item.set_arg(v); }
            if let Some(v) = uid { item.set_uid(v); }
            if let Some(v) = kind { item.set_type_named(&v, !skip_check)?; }
            if let Some(v) = icon { item.set_icon_named(&v, icon_type.as_deref())?; }
            if let Some(v) = copy { item.set_copy_text(v); }
            if let Some(v) = largetype { item.set_large_type_text(v); }
            for spec in &mods {
                let (key, subtitle, arg) = parse_mod(spec)?;
                item.set_mod_named(key, subtitle, arg, true)?;
            }
            if let Some(v) = match_text { item.set_match(v); }
            if let Some(v) = autocomplete { item.set_autocomplete(v); }
            if let Some(v) = quicklookurl { item.set_quicklook_url(v); }
            debug!(fields = item.len(), "item built");

            write_to("-", &[item], &RenderOptions { pretty })?;
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写到 stderr，stdout 只留给 JSON 文档
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 写出文档，返回写出的条目数
fn write_to(output: &str, items: &[ResultItem], opts: &RenderOptions) -> Result<usize> {
    let stats = if output == "-" {
        let stdout = std::io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        let stats = write_items(&mut out, items, opts)?;
        out.flush().context("flush stdout")?;
        stats
    } else {
        let mut out = BufWriter::new(File::create(output).context("create output file")?);
        let stats = write_items(&mut out, items, opts)?;
        out.flush().context("flush output file")?;
        stats
    };
    Ok(stats.items_written)
}

/// 单个 --arg 输出字符串，多个输出数组
fn to_arg(mut args: Vec<String>) -> Option<Arg> {
    match args.len() {
        0 => None,
        1 => args.pop().map(Arg::Single),
        _ => Some(Arg::Multiple(args)),
    }
}

/// 解析 `key:subtitle:arg`；arg 部分可以包含冒号
fn parse_mod(spec: &str) -> Result<(&str, &str, &str)> {
    let mut parts = spec.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(subtitle), Some(arg)) => Ok((key, subtitle, arg)),
        _ => bail!("invalid --mod {spec:?}, expected key:subtitle:arg"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mod_keeps_colons_in_arg() {
        let (key, subtitle, arg) = parse_mod("cmd:Open:https://example.com").unwrap();
        assert_eq!((key, subtitle, arg), ("cmd", "Open", "https://example.com"));
        assert!(parse_mod("cmd:only").is_err());
    }

    #[test]
    fn arg_shape_follows_count() {
        assert_eq!(to_arg(vec![]), None);
        assert_eq!(to_arg(vec!["a".into()]), Some(Arg::Single("a".into())));
        assert_eq!(to_arg(vec!["a".into(), "b".into()]), Some(Arg::Multiple(vec!["a".into(), "b".into()])));
    }

    #[test]
    fn cli_parses_item_flags() {
        let cli = Cli::try_parse_from([
            "alfred-items", "item", "--title", "T", "--arg", "a", "--arg", "b", "--mod", "cmd:s:x",
        ])
        .unwrap();
        match cli.command {
            Commands::Item { title, arg, mods, .. } => {
                assert_eq!(title, "T");
                assert_eq!(arg.len(), 2);
                assert_eq!(mods, vec!["cmd:s:x".to_string()]);
            }
            _ => panic!("expected item"),
        }
    }
}
