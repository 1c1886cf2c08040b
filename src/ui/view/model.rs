//! 视图模型：状态到界面的纯投影

use crate::models::{BoundedSlider, GridCell, cells};
use crate::theme::Palette;
use crate::ui::state::{App, AppMode};

pub const TITLE: &str = "//Terminal UI Test Grounds";
pub const TOOLTIP: &str = "This h1 is actually an h4 in disguise!";

/// 单帧渲染所需的全部数据
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub dark_mode: bool,
    pub theme_pending: bool,
    pub palette: Palette,
    pub slider: BoundedSlider,
    pub text: String,
    pub echo: String,
    pub echo_is_placeholder: bool,
    pub cells: Vec<GridCell>,
    pub editing: bool,
    pub show_tooltip: bool,
}

impl ViewModel {
    pub fn build(app: &App) -> Self {
        let echo = app.text.display_text().to_string();
        Self {
            dark_mode: app.theme.current(),
            theme_pending: app.theme.is_pending(),
            palette: app.theme.palette(),
            slider: app.slider.clone(),
            text: app.text.text().to_string(),
            echo_is_placeholder: app.text.text().is_empty(),
            echo,
            cells: cells(&app.text.tokens()),
            editing: app.mode == AppMode::EditingText,
            show_tooltip: app.title_hovered,
        }
    }

    /// 滑块标题，如 "60%"
    pub fn heading(&self) -> String {
        format!("{}%", self.slider.value())
    }

    pub fn percent(&self) -> u8 {
        self.slider.value()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::config::Config;
    use crate::models::PLACEHOLDER;
    use pretty_assertions::assert_eq;

    #[test]
    fn initial_view() {
        let app = App::new(&Config::default());
        let model = ViewModel::build(&app);
        assert!(!model.dark_mode);
        assert_eq!(model.palette, Palette::light());
        assert_eq!(model.heading(), "100%");
        assert_eq!(model.echo, PLACEHOLDER);
        assert!(model.echo_is_placeholder);
        assert_eq!(model.cells.len(), 1);
        assert_eq!(model.cells[0].position, 1);
        assert!(!model.show_tooltip);
    }

    #[test]
    fn view_tracks_state() {
        let t0 = Instant::now();
        let mut app = App::new(&Config::default());
        app.text.set_text("hello world");
        app.slider.set_from_pointer(60);
        app.theme.toggle(t0);

        let pending = ViewModel::build(&app);
        assert!(pending.theme_pending);
        assert!(!pending.dark_mode);

        app.tick(t0 + Duration::from_millis(150));
        let model = ViewModel::build(&app);
        assert!(model.dark_mode);
        assert_eq!(model.palette, Palette::dark());
        assert_eq!(model.heading(), "60%");
        assert_eq!(model.percent(), 60);
        assert_eq!(model.echo, "hello world");
        assert!(!model.echo_is_placeholder);
        let labels: Vec<&str> = model.cells.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["hello", "world"]);
    }
}
