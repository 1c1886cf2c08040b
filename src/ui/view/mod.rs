//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;
pub mod model;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
};

use super::state::{App, HitAreas};
use components::{
    render_button, render_grid, render_input_widget, render_paper, render_slider, render_tooltip,
};
use layouts::{below, fixed_width, padding, percent_width};
use model::{TITLE, TOOLTIP, ViewModel};

const TOGGLE_WIDTH: u16 = 12;
const RESET_WIDTH: u16 = 24;
const MAX_TEXT_ROWS: u16 = 4;

/// 渲染 UI，同时记录各控件区域
pub fn render(frame: &mut Frame, app: &mut App) {
    let model = ViewModel::build(app);
    let palette = model.palette;

    frame.render_widget(
        Block::default().style(
            Style::default()
                .bg(Color::from(palette.background))
                .fg(Color::from(palette.text)),
        ),
        frame.area(),
    );

    let content = padding(frame.area(), 2, 1);
    let text_lines = model.text.lines().count() + usize::from(model.text.ends_with('\n'));
    let text_rows = visible_rows(text_lines);
    let echo_rows = visible_rows(model.echo.lines().count());

    let [
        toggle_row,
        title_row,
        reset_row,
        heading_row,
        slider_row,
        text_row,
        echo_row,
        grid_label_row,
        grid_row,
        help_row,
    ] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(text_rows + 2),
        Constraint::Length(echo_rows + 2),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(content);

    // 主题按钮
    let toggle = fixed_width(toggle_row, TOGGLE_WIDTH);
    let icon = if model.dark_mode { "☾ Dark" } else { "☀ Light" };
    render_button(
        frame,
        toggle,
        icon,
        Style::default().fg(Color::from(palette.primary)),
        model.dark_mode,
    );

    // 标题
    let title = fixed_width(title_row, TITLE.chars().count() as u16);
    frame.render_widget(
        Paragraph::new(TITLE).style(Style::default().add_modifier(Modifier::BOLD)),
        title,
    );

    // 重置按钮
    let reset = fixed_width(reset_row, RESET_WIDTH);
    render_button(
        frame,
        reset,
        "Reset All Values ↺",
        Style::default()
            .fg(Color::from(palette.paper))
            .bg(Color::from(palette.primary)),
        false,
    );

    frame.render_widget(
        Paragraph::new(model.heading()).style(Style::default().add_modifier(Modifier::BOLD)),
        heading_row,
    );

    let track = render_slider(frame, slider_row, &model.slider, &palette);

    let text_field = percent_width(text_row, model.percent());
    render_input_widget(
        frame,
        text_field,
        "Write something...",
        &model.text,
        model.editing,
        &palette,
    );

    render_paper(
        frame,
        percent_width(echo_row, model.percent()),
        &model.echo,
        model.echo_is_placeholder,
        &palette,
    );

    frame.render_widget(
        Paragraph::new("Grid:").style(Style::default().add_modifier(Modifier::BOLD)),
        grid_label_row,
    );
    let grid = percent_width(grid_row, model.percent());
    render_grid(frame, grid, &model.cells, &palette);

    render_help(frame, &model, help_row);

    if model.show_tooltip {
        let popup = below(title, TOOLTIP.len() as u16 + 2, 3, frame.area());
        render_tooltip(frame, popup, TOOLTIP, &palette);
    }

    app.hit_areas = HitAreas {
        toggle,
        title,
        reset,
        slider: slider_row,
        slider_track: track,
        text_field,
        grid,
    };
}

/// 文本框高度按行数增长，钳制在 [1, MAX_TEXT_ROWS]
fn visible_rows(lines: usize) -> u16 {
    lines.clamp(1, usize::from(MAX_TEXT_ROWS)) as u16
}

fn render_help(frame: &mut Frame, model: &ViewModel, area: Rect) {
    let help_text = if model.editing {
        "[Esc] 完成输入  [Enter] 换行  [Backspace] 删除"
    } else {
        "[t] 主题  [r] 重置  [←/→] 调节  [Home/End] 最小/最大  [i] 输入  [q] 退出"
    };
    let text = if model.theme_pending {
        format!("{}  |  主题切换中…", help_text)
    } else {
        help_text.to_string()
    };

    let help = Paragraph::new(text).style(Style::default().fg(Color::from(model.palette.text_muted)));
    frame.render_widget(help, area);
}
