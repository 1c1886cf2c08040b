//! 主题选择：亮/暗模式标志、尾沿防抖切换与两套调色板

use std::time::{Duration, Instant};

use ratatui::style::Color;
use tracing::debug;

/// 防抖窗口下限
pub const MIN_DEBOUNCE: Duration = Duration::from_millis(125);
/// 防抖窗口上限，也是默认值
pub const MAX_DEBOUNCE: Duration = Duration::from_millis(150);

/// 尾沿防抖：每次触发都重新计时，静默满一个窗口后才生效
#[derive(Debug, Clone)]
pub struct Debounce {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// 到期时返回 true 并清除挂起状态，只触发一次
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

/// 主题选择器
#[derive(Debug, Clone)]
pub struct ThemeSelector {
    dark: bool,
    pending: Debounce,
}

impl ThemeSelector {
    pub fn new(window: Duration) -> Self {
        Self {
            dark: false,
            pending: Debounce::new(window.clamp(MIN_DEBOUNCE, MAX_DEBOUNCE)),
        }
    }

    /// 当前是否为暗色模式
    pub fn current(&self) -> bool {
        self.dark
    }

    /// 请求切换，窗口内的连续请求合并为一次
    pub fn toggle(&mut self, now: Instant) {
        self.pending.trigger(now);
        debug!("theme toggle scheduled");
    }

    /// 应用到期的切换，返回是否发生了切换
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.pending.fire(now) {
            self.dark = !self.dark;
            debug!(dark = self.dark, "theme flipped");
            true
        } else {
            false
        }
    }

    /// 立即切回亮色，同时取消挂起的切换
    pub fn set_light(&mut self) {
        self.pending.cancel();
        self.dark = false;
    }

    pub fn cancel(&mut self) {
        if self.pending.is_pending() {
            debug!("pending theme toggle cancelled");
        }
        self.pending.cancel();
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_pending()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.deadline()
    }

    pub fn palette(&self) -> Palette {
        if self.dark {
            Palette::dark()
        } else {
            Palette::light()
        }
    }
}

/// RGB 三元组
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c.0, c.1, c.2)
    }
}

/// 一套调色板
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub background: Rgb,
    pub paper: Rgb,
    pub text: Rgb,
    pub text_muted: Rgb,
    /// 文本框背景
    pub input_background: Rgb,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            primary: Rgb(0x19, 0x76, 0xd2),
            secondary: Rgb(0xdc, 0x00, 0x4e),
            background: Rgb(0xf5, 0xf5, 0xf5),
            paper: Rgb(0xff, 0xff, 0xff),
            text: Rgb(0x28, 0x28, 0x28),
            text_muted: Rgb(0x75, 0x75, 0x75),
            input_background: Rgb(0xff, 0xff, 0xff),
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: Rgb(0xef, 0x9e, 0xf9),
            secondary: Rgb(0xf4, 0x8f, 0xb1),
            background: Rgb(0x12, 0x12, 0x12),
            paper: Rgb(0x1e, 0x1e, 0x1e),
            text: Rgb(0xff, 0xff, 0xff),
            text_muted: Rgb(0xb0, 0xb0, 0xb0),
            input_background: Rgb(0x18, 0x18, 0x18),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const WINDOW: Duration = Duration::from_millis(150);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn single_toggle_flips_after_window() {
        let t0 = Instant::now();
        let mut theme = ThemeSelector::new(WINDOW);
        theme.toggle(t0);
        assert!(!theme.poll(t0 + ms(149)));
        assert!(!theme.current());
        assert!(theme.poll(t0 + ms(150)));
        assert!(theme.current());
        assert!(!theme.poll(t0 + ms(400)));
        assert!(theme.current());
    }

    #[test]
    fn burst_collapses_into_one_flip() {
        let t0 = Instant::now();
        let mut theme = ThemeSelector::new(WINDOW);
        for i in 0..5 {
            theme.toggle(t0 + ms(i * 40));
            assert!(!theme.poll(t0 + ms(i * 40 + 1)));
        }
        // 最后一次请求在 160ms，生效于 310ms
        assert!(!theme.poll(t0 + ms(309)));
        assert!(theme.poll(t0 + ms(310)));
        assert!(theme.current());
        assert!(!theme.is_pending());
    }

    #[test]
    fn separate_toggles_flip_twice() {
        let t0 = Instant::now();
        let mut theme = ThemeSelector::new(WINDOW);
        theme.toggle(t0);
        assert!(theme.poll(t0 + ms(200)));
        theme.toggle(t0 + ms(300));
        assert!(theme.poll(t0 + ms(500)));
        assert!(!theme.current());
    }

    #[test]
    fn set_light_cancels_pending_flip() {
        let t0 = Instant::now();
        let mut theme = ThemeSelector::new(WINDOW);
        theme.toggle(t0);
        theme.set_light();
        assert!(!theme.is_pending());
        assert!(!theme.poll(t0 + ms(1_000)));
        assert!(!theme.current());
    }

    #[test]
    fn cancel_tears_down_timer() {
        let t0 = Instant::now();
        let mut theme = ThemeSelector::new(WINDOW);
        theme.toggle(t0);
        assert_eq!(theme.next_deadline(), Some(t0 + WINDOW));
        theme.cancel();
        assert_eq!(theme.next_deadline(), None);
        assert!(!theme.poll(t0 + ms(1_000)));
    }

    #[test]
    fn window_is_clamped() {
        let t0 = Instant::now();
        let mut fast = ThemeSelector::new(ms(10));
        fast.toggle(t0);
        assert_eq!(fast.next_deadline(), Some(t0 + MIN_DEBOUNCE));

        let mut slow = ThemeSelector::new(ms(5_000));
        slow.toggle(t0);
        assert_eq!(slow.next_deadline(), Some(t0 + MAX_DEBOUNCE));
    }

    #[test]
    fn palette_follows_mode() {
        let t0 = Instant::now();
        let mut theme = ThemeSelector::new(WINDOW);
        assert_eq!(theme.palette(), Palette::light());
        theme.toggle(t0);
        theme.poll(t0 + WINDOW);
        assert_eq!(theme.palette(), Palette::dark());
        assert_eq!(Color::from(Rgb(1, 2, 3)), Color::Rgb(1, 2, 3));
    }
}
