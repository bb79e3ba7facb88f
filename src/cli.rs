use crate::config::Config;
use crate::markup::ClickTarget;
use crate::tracker::{TaskTracker, UiEvent, ENTER_KEY};
use crate::view::{Document, DocumentView, Region};
use anyhow::{bail, Result};
use std::env;

/// 处理 CLI 命令
/// 返回 true 表示应该继续进入 TUI，false 表示已处理完毕应该退出
pub fn handle_cli(config: &Config) -> Result<bool> {
    let args: Vec<String> = env::args().collect();

    // 如果没有参数，进入 TUI 模式
    if args.len() < 2 {
        return Ok(true);
    }

    match args[1].as_str() {
        "render" => {
            let render_args = parse_render_args(&args[2..])?;
            print!("{}", render_page(&render_args, config)?);
            Ok(false)
        }
        "config" => {
            handle_config_command(&args[2..])?;
            Ok(false)
        }
        "--help" | "-h" => {
            print_help();
            Ok(false)
        }
        "--version" | "-V" | "-v" => {
            print_version();
            Ok(false)
        }
        _ => {
            eprintln!("未知命令: {}", args[1]);
            eprintln!("使用 'tasktrack --help' 查看帮助");
            std::process::exit(1);
        }
    }
}

// ============================================================================
// Render Command
// ============================================================================

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RenderArgs {
    pub filter: Option<String>,
    /// 要置顶的任务序号（从 1 开始）
    pub pins: Vec<usize>,
    pub json: bool,
    pub tasks: Vec<String>,
}

pub fn parse_render_args(args: &[String]) -> Result<RenderArgs> {
    let mut parsed = RenderArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--filter" | "-f" => {
                let Some(value) = iter.next() else {
                    bail!("--filter 需要一个参数");
                };
                parsed.filter = Some(value.clone());
            }
            "--pin" | "-p" => {
                let Some(value) = iter.next() else {
                    bail!("--pin 需要一个序号");
                };
                let n: usize = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("无效的序号: {}", value))?;
                if n == 0 {
                    bail!("序号从 1 开始");
                }
                parsed.pins.push(n);
            }
            "--json" => parsed.json = true,
            "--" => {
                parsed.tasks.extend(iter.by_ref().cloned());
            }
            _ => parsed.tasks.push(arg.clone()),
        }
    }

    Ok(parsed)
}

/// 在内存文档上模拟一次操作过程，输出页面或任务 JSON
pub fn render_page(args: &RenderArgs, config: &Config) -> Result<String> {
    let document = Document::new(&config.regions);
    let view = DocumentView::bind(document, &config.regions)?;
    let mut tracker = TaskTracker::new(view, config.tracker_options());

    // 逐个输入并回车，空白内容和界面上一样触发错误提示
    for text in &args.tasks {
        tracker.set_input(text);
        tracker.dispatch(UiEvent::KeyPress {
            region: Region::Search,
            key: ENTER_KEY.to_string(),
        });
        if tracker.error_visible() {
            eprintln!("跳过空任务: {:?}", text);
        }
    }

    let ids: Vec<_> = tracker.tasks().iter().map(|t| t.id).collect();
    for n in &args.pins {
        let Some(task) = ids.get(n - 1).and_then(|id| tracker.find_task(*id)) else {
            bail!("--pin {} 超出范围（共 {} 个任务）", n, ids.len());
        };
        let region = if task.pinned {
            Region::PinnedTasks
        } else {
            Region::AllTasks
        };
        let target = ClickTarget::pin_button(task);
        tracker.dispatch(UiEvent::Click { region, target });
    }

    if let Some(filter) = &args.filter {
        tracker.set_input(filter);
    }

    if args.json {
        Ok(format!("{}\n", serde_json::to_string_pretty(tracker.tasks())?))
    } else {
        Ok(tracker.view().document().to_html())
    }
}

// ============================================================================
// Config Command
// ============================================================================

fn handle_config_command(args: &[String]) -> Result<()> {
    match args.first().map(|s| s.as_str()) {
        None | Some("show") => crate::config::show_config(),
        Some("timeout") => {
            let Some(value) = args.get(1) else {
                bail!("用法: tasktrack config timeout <毫秒>");
            };
            let ms: u64 = value
                .parse()
                .map_err(|_| anyhow::anyhow!("无效的毫秒数: {}", value))?;
            crate::config::set_error_timeout(ms)
        }
        Some("escape") => match args.get(1).map(|s| s.as_str()) {
            Some("on") => crate::config::set_escape_html(true),
            Some("off") => crate::config::set_escape_html(false),
            _ => bail!("用法: tasktrack config escape <on|off>"),
        },
        Some(other) => {
            bail!("未知的配置选项: {}（可用选项: show, timeout, escape）", other)
        }
    }
}

fn print_help() {
    println!("tasktrack - 终端任务列表");
    println!();
    println!("用法:");
    println!("  tasktrack                              启动终端界面");
    println!("  tasktrack render [选项] <任务>...       输出页面 HTML");
    println!("      -f, --filter <文本>                过滤未置顶任务");
    println!("      -p, --pin <序号>                   置顶第 N 个任务（可重复）");
    println!("          --json                         输出任务 JSON");
    println!("  tasktrack config [show]                查看配置");
    println!("  tasktrack config timeout <毫秒>        设置错误提示时长");
    println!("  tasktrack config escape <on|off>       是否转义任务文本");
    println!("  tasktrack --help | --version");
}

fn print_version() {
    println!("tasktrack {}", env!("CARGO_PKG_VERSION"));
}
