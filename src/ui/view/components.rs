//! 通用 UI 组件
//!
//! 按钮、滑块、输入框、网格等组件

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::layouts::grid_columns;
use crate::models::{BoundedSlider, GridCell};
use crate::theme::Palette;

/// 网格单元高度（含边框）
const CELL_HEIGHT: u16 = 3;

/// [组件] 带边框的按钮
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, style: Style, selected: bool) {
    let style = if selected {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    };
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    frame.render_widget(button, area);
}

/// [组件] 滑块，返回轨道区域供命中测试使用
pub fn render_slider(frame: &mut Frame, area: Rect, slider: &BoundedSlider, palette: &Palette) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::from(palette.primary)));
    let track = block.inner(area);
    frame.render_widget(block, area);

    if track.width == 0 || track.height == 0 {
        return track;
    }

    let thumb = usize::from(slider.thumb_offset(track.width));
    let rest = usize::from(track.width) - thumb - 1;
    let primary = Style::default().fg(Color::from(palette.primary));
    let line = Line::from(vec![
        Span::styled("━".repeat(thumb), primary),
        Span::styled("■", primary.add_modifier(Modifier::BOLD)),
        Span::styled("─".repeat(rest), Style::default().fg(Color::from(palette.text_muted))),
    ]);
    let track_row = Rect { height: 1, ..track };
    frame.render_widget(Paragraph::new(line), track_row);
    track_row
}

/// [组件] 带有标题和样式的输入框
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    is_focused: bool,
    palette: &Palette,
) {
    let (style, border) = if is_focused {
        (
            Style::default()
                .fg(Color::from(palette.text))
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::from(palette.primary)),
        )
    } else {
        (
            Style::default().fg(Color::from(palette.text)),
            Style::default().fg(Color::from(palette.text_muted)),
        )
    };

    let mut content = value.to_string();
    if is_focused {
        content.push('▏');
    }

    let input = Paragraph::new(content)
        .style(style.bg(Color::from(palette.input_background)))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        );
    frame.render_widget(input, area);
}

/// [组件] 纸面面板，用于文本回显
pub fn render_paper(frame: &mut Frame, area: Rect, text: &str, muted: bool, palette: &Palette) {
    let fg: Color = if muted {
        Color::from(palette.text_muted)
    } else {
        Color::from(palette.text)
    };
    let paper = Paragraph::new(text)
        .style(Style::default().fg(fg).bg(Color::from(palette.paper)))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Thick));
    frame.render_widget(paper, area);
}

/// [组件] 响应式单词网格，放不下的行被截断
pub fn render_grid(frame: &mut Frame, area: Rect, cells: &[GridCell], palette: &Palette) {
    let columns = grid_columns(area.width);
    let max_rows = usize::from(area.height / CELL_HEIGHT);

    for (row_index, row) in cells.chunks(columns).take(max_rows).enumerate() {
        let row_area = Rect {
            y: area.y + row_index as u16 * CELL_HEIGHT,
            height: CELL_HEIGHT,
            ..area
        };
        let slots = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]).split(row_area);
        for (cell, slot) in row.iter().zip(slots.iter()) {
            render_cell(frame, *slot, cell, palette);
        }
    }
}

fn render_cell(frame: &mut Frame, area: Rect, cell: &GridCell, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::from(palette.secondary)))
        .title(Line::from(format!("{}", cell.position)).alignment(Alignment::Right));
    let label = Paragraph::new(cell.label.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::from(palette.text)).bg(Color::from(palette.paper)))
        .block(block);
    frame.render_widget(label, area);
}

/// [组件] 悬浮提示
pub fn render_tooltip(frame: &mut Frame, area: Rect, text: &str, palette: &Palette) {
    frame.render_widget(Clear, area);
    let tooltip = Paragraph::new(text)
        .style(Style::default().fg(Color::from(palette.paper)).bg(Color::from(palette.text)))
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    frame.render_widget(tooltip, area);
}
