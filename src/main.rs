use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::time::Duration;

mod app;
mod cli;
mod clock;
mod config;
mod input;
mod logging;
mod markup;
mod models;
mod tracker;
mod ui;
mod view;

use app::App;

/// 事件轮询间隔，同时决定错误提示隐藏的精度
const TICK_RATE: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let config = config::load_config()?;

    if let Err(e) = logging::init_logging(&config.log_file) {
        eprintln!("警告: {:#}", e);
    }

    // 处理 CLI 命令
    let should_run_tui = cli::handle_cli(&config)?;

    // 如果 CLI 命令已处理，直接退出
    if !should_run_tui {
        return Ok(());
    }

    // 创建应用（绑定界面区域失败时不进入终端界面）
    let mut app = App::new(config)?;

    // panic 时先恢复终端
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!("启动终端界面");

    // 运行应用
    let res = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("{:?}", err);
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if !app.handle_key(key) {
                    tracing::info!(tasks = app.tracker.tasks().len(), "退出");
                    return Ok(()); // 退出应用
                }
            }
        }
    }
}
