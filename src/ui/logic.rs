//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种业务处理方法

use std::time::Instant;

use tracing::{debug, info};

use super::actions::Action;
use super::state::{App, AppMode};
use crate::models::{TextCapture, UiState};

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action, now: Instant) -> bool {
        match action {
            Action::Quit => return true,
            Action::ToggleTheme => self.theme.toggle(now),
            Action::ResetAll => self.reset_all(),

            Action::SliderPress(raw) => {
                self.dragging = true;
                self.set_slider(raw);
            }
            Action::SliderPointer(raw) => self.set_slider(raw),
            Action::SliderWheel(direction) => {
                self.slider.set_from_wheel(direction);
                debug!(value = self.slider.value(), ?direction, "slider wheel");
            }
            Action::EndDrag => self.dragging = false,

            Action::FocusText => self.mode = AppMode::EditingText,
            Action::Blur => self.mode = AppMode::Normal,
            Action::Input(c) => self.edit_text(|text| text.push(c)),
            Action::Paste(pasted) => self.edit_text(|text| {
                let joined = format!("{}{}", text.text(), pasted);
                text.set_text(joined);
            }),
            Action::Newline => self.edit_text(|text| text.push('\n')),
            Action::DeleteChar => self.edit_text(|text| text.pop()),

            Action::HoverTitle(hovered) => self.title_hovered = hovered,
            Action::Redraw => {}
        }
        self.needs_redraw = true;
        false
    }

    /// 推进挂起的主题切换，由事件循环每轮调用
    pub fn tick(&mut self, now: Instant) {
        if self.theme.poll(now) {
            self.needs_redraw = true;
        }
    }

    /// 一次性恢复全部初始值，下一帧只会看到完整的重置结果
    pub fn reset_all(&mut self) {
        self.slider.reset();
        self.theme.set_light();
        self.text.reset();
        self.dragging = false;
        debug_assert_eq!(self.ui_state(), UiState::initial());
        info!("all values reset");
    }

    /// 退出前撤销挂起的定时器
    pub fn shutdown(&mut self) {
        self.theme.cancel();
    }

    fn set_slider(&mut self, raw: i32) {
        self.slider.set_from_pointer(raw);
        debug!(raw, value = self.slider.value(), "slider pointer");
    }

    fn edit_text(&mut self, edit: impl FnOnce(&mut TextCapture)) {
        if self.mode == AppMode::EditingText {
            edit(&mut self.text);
        }
    }
}
