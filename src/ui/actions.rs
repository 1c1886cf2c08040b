//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

use crate::models::WheelDirection;

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    ToggleTheme,
    ResetAll,

    // 滑块
    SliderPress(i32), // 按下开始拖拽
    SliderPointer(i32),
    SliderWheel(WheelDirection),
    EndDrag,

    // 文本框
    FocusText,
    Blur,
    Input(char), // 输入字符
    Paste(String),
    Newline,
    DeleteChar, // Backspace

    HoverTitle(bool),
    Redraw,
}
