mod config;
mod error;
mod logging;
mod models;
mod theme;
mod ui;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::{info, warn};

use crate::config::{APP_DIR, Config, config_path, load_config};
use crate::error::{Error, Result};
use crate::ui::{App, handle_event, render};

/// 没有挂起定时器时的输入等待上限
const IDLE_POLL: Duration = Duration::from_millis(250);

/// 获取数据目录路径 (~/.local/share/testgrounds/)
fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or(Error::NoDataDir)?.join(APP_DIR);

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

fn main() -> Result<()> {
    // 加载配置
    let config = match config_path() {
        Some(path) => load_config(&path)?,
        None => Config::default(),
    };

    let _log_guard = logging::init(&get_data_dir()?, &config.log_level)?;
    info!(?config, "starting");
    if config.debounce_was_clamped() {
        warn!(
            requested_ms = config.debounce_ms,
            "debounce window out of range, clamped to {:?}",
            config.debounce_window()
        );
    }

    // 创建应用状态
    let mut app = App::new(&config);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);
    app.shutdown();

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    info!(final_state = ?app.ui_state(), "exiting");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);

        if app.needs_redraw {
            terminal.draw(|f| render(f, app))?;
            app.needs_redraw = false;
        }

        // 等待输入，但不越过防抖截止时间
        let timeout = app.next_wakeup(now).unwrap_or(IDLE_POLL);
        if event::poll(timeout)? && handle_event(app, event::read()?, Instant::now()) {
            break;
        }
    }
    Ok(())
}
