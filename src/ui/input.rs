//! 输入事件映射 (Input -> Action)
//!
//! 将按键与鼠标事件转换为 Action

use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::actions::Action;
use super::state::{App, AppMode, Control};
use crate::models::{BoundedSlider, SLIDER_MAX, SLIDER_MIN, WheelDirection};

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: AppMode, key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }
    match mode {
        AppMode::Normal => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Char('r') => Some(Action::ResetAll),
            KeyCode::Char('h') | KeyCode::Left => {
                Some(Action::SliderWheel(WheelDirection::Decrease))
            }
            KeyCode::Char('l') | KeyCode::Right => {
                Some(Action::SliderWheel(WheelDirection::Increase))
            }
            KeyCode::Home => Some(Action::SliderPointer(i32::from(SLIDER_MIN))),
            KeyCode::End => Some(Action::SliderPointer(i32::from(SLIDER_MAX))),
            KeyCode::Char('i') | KeyCode::Enter => Some(Action::FocusText),
            _ => None,
        },
        AppMode::EditingText => match key.code {
            KeyCode::Esc => Some(Action::Blur),
            KeyCode::Enter => Some(Action::Newline),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Action::Input(c))
            }
            _ => None,
        },
    }
}

/// 根据上一帧的控件区域解析鼠标事件
pub fn get_mouse_action(app: &App, mouse: MouseEvent) -> Option<Action> {
    let hit = app.hit_areas.control_at(mouse.column, mouse.row);
    let track = app.hit_areas.slider_track;
    let raw = || BoundedSlider::value_at_column(track.x, track.width, mouse.column);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match hit? {
            Control::Toggle => Some(Action::ToggleTheme),
            Control::Reset => Some(Action::ResetAll),
            Control::Slider => Some(Action::SliderPress(raw())),
            Control::TextField => Some(Action::FocusText),
            Control::Title => None,
        },
        MouseEventKind::Drag(MouseButton::Left) if app.dragging => Some(Action::SliderPointer(raw())),
        MouseEventKind::Up(MouseButton::Left) if app.dragging => Some(Action::EndDrag),
        // 滚轮只在指针悬停于滑块时生效
        MouseEventKind::ScrollDown if hit == Some(Control::Slider) => {
            Some(Action::SliderWheel(WheelDirection::from_delta(1)))
        }
        MouseEventKind::ScrollUp if hit == Some(Control::Slider) => {
            Some(Action::SliderWheel(WheelDirection::from_delta(-1)))
        }
        MouseEventKind::Moved => {
            let over_title = hit == Some(Control::Title);
            (over_title != app.title_hovered).then_some(Action::HoverTitle(over_title))
        }
        _ => None,
    }
}

/// 处理终端事件，返回 true 表示退出
pub fn handle_event(app: &mut App, event: Event, now: Instant) -> bool {
    let action = match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => get_action(app.mode, key),
        Event::Mouse(mouse) => get_mouse_action(app, mouse),
        Event::Paste(text) if app.mode == AppMode::EditingText => Some(Action::Paste(text)),
        Event::Resize(_, _) => Some(Action::Redraw),
        _ => None,
    };
    match action {
        Some(action) => app.dispatch(action, now),
        None => false,
    }
}
