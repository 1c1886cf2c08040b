//! 布局辅助函数

use ratatui::layout::Rect;

/// 网格单元最小宽度（列）
pub const MIN_CELL_WIDTH: u16 = 14;

/// 四周留白
pub fn padding(area: Rect, horizontal: u16, vertical: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(horizontal),
        y: area.y.saturating_add(vertical),
        width: area.width.saturating_sub(horizontal.saturating_mul(2)),
        height: area.height.saturating_sub(vertical.saturating_mul(2)),
    }
}

/// 左对齐，宽度为父区域的 `percent`%
pub fn percent_width(area: Rect, percent: u8) -> Rect {
    let width = u32::from(area.width) * u32::from(percent.min(100)) / 100;
    Rect {
        width: width as u16,
        ..area
    }
}

/// 左对齐的固定宽度区域，不超过父区域
pub fn fixed_width(area: Rect, width: u16) -> Rect {
    Rect {
        width: width.min(area.width),
        ..area
    }
}

/// 响应式网格列数
pub fn grid_columns(width: u16) -> usize {
    usize::from((width / MIN_CELL_WIDTH).max(1))
}

/// 紧贴 `anchor` 下方的弹出区域，裁剪到 `bounds` 内
pub fn below(anchor: Rect, width: u16, height: u16, bounds: Rect) -> Rect {
    Rect {
        x: anchor.x,
        y: anchor.y.saturating_add(anchor.height),
        width,
        height,
    }
    .intersection(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn percent_width_scales_from_left() {
        let parent = Rect::new(2, 5, 100, 10);
        assert_eq!(percent_width(parent, 60), Rect::new(2, 5, 60, 10));
        assert_eq!(percent_width(parent, 100), parent);
        assert_eq!(percent_width(Rect::new(0, 0, 76, 3), 25).width, 19);
    }

    #[test]
    fn columns_follow_width() {
        assert_eq!(grid_columns(0), 1);
        assert_eq!(grid_columns(13), 1);
        assert_eq!(grid_columns(28), 2);
        assert_eq!(grid_columns(76), 5);
    }

    #[test]
    fn popup_is_clipped() {
        let bounds = Rect::new(0, 0, 40, 10);
        let anchor = Rect::new(30, 8, 5, 1);
        assert_eq!(below(anchor, 20, 3, bounds), Rect::new(30, 9, 10, 1));
    }

    #[test]
    fn padding_shrinks_both_sides() {
        assert_eq!(padding(Rect::new(0, 0, 80, 24), 2, 1), Rect::new(2, 1, 76, 22));
        assert_eq!(padding(Rect::new(0, 0, 3, 1), 2, 1).width, 0);
    }
}
