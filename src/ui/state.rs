//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use std::time::Instant;

use ratatui::layout::{Position, Rect};

use crate::config::Config;
use crate::models::{BoundedSlider, TextCapture, UiState};
use crate::theme::ThemeSelector;

/// 应用状态
pub struct App {
    pub theme: ThemeSelector,
    pub slider: BoundedSlider,
    pub text: TextCapture,
    pub mode: AppMode,
    pub hit_areas: HitAreas,
    pub title_hovered: bool,
    /// 左键在滑块上按下后持续拖拽
    pub dragging: bool,
    /// 状态变化后等待重绘
    pub needs_redraw: bool,
}

/// 应用模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    EditingText,
}

/// 上一帧各控件的屏幕区域，用于鼠标命中测试
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitAreas {
    pub toggle: Rect,
    pub title: Rect,
    pub reset: Rect,
    pub slider: Rect,
    /// 滑块轨道（边框内部）
    pub slider_track: Rect,
    pub text_field: Rect,
    /// 网格容器，宽度随滑块变化，不参与命中测试
    pub grid: Rect,
}

/// 命中的控件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Toggle,
    Title,
    Reset,
    Slider,
    TextField,
}

impl HitAreas {
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        let pos = Position::new(column, row);
        [
            (self.toggle, Control::Toggle),
            (self.title, Control::Title),
            (self.reset, Control::Reset),
            (self.slider, Control::Slider),
            (self.text_field, Control::TextField),
        ]
        .into_iter()
        .find(|(area, _)| area.contains(pos))
        .map(|(_, control)| control)
    }
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: &Config) -> Self {
        Self {
            theme: ThemeSelector::new(config.debounce_window()),
            slider: BoundedSlider::new(),
            text: TextCapture::new(config.empty_tokens),
            mode: AppMode::Normal,
            hit_areas: HitAreas::default(),
            title_hovered: false,
            dragging: false,
            needs_redraw: true,
        }
    }

    /// 当前界面状态快照
    pub fn ui_state(&self) -> UiState {
        UiState {
            dark_mode: self.theme.current(),
            slider_value: self.slider.value(),
            text: self.text.text().to_string(),
        }
    }

    /// 事件循环最多等待到下一个防抖截止时间
    pub fn next_wakeup(&self, now: Instant) -> Option<std::time::Duration> {
        self.theme
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_app_starts_from_initial_state() {
        let app = App::new(&Config::default());
        assert_eq!(app.ui_state(), UiState::initial());
        assert_eq!(app.mode, AppMode::Normal);
        assert!(app.needs_redraw);
        assert_eq!(app.next_wakeup(Instant::now()), None);
    }

    #[test]
    fn hit_areas_resolve_controls() {
        let areas = HitAreas {
            toggle: Rect::new(0, 0, 10, 3),
            slider: Rect::new(0, 5, 40, 3),
            ..HitAreas::default()
        };
        assert_eq!(areas.control_at(2, 1), Some(Control::Toggle));
        assert_eq!(areas.control_at(39, 7), Some(Control::Slider));
        assert_eq!(areas.control_at(40, 7), None);
        assert_eq!(areas.control_at(2, 4), None);
    }
}
