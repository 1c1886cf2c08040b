use serde::Deserialize;

/// 空文本时网格与回显面板显示的占位符
pub const PLACEHOLDER: &str = "<-- Text will appear here -->";

/// 滑块下界
pub const SLIDER_MIN: u8 = 25;
/// 滑块上界，也是初始值
pub const SLIDER_MAX: u8 = 100;

/// 滚轮方向，只保留增量的符号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    Increase,
    Decrease,
}

impl WheelDirection {
    /// 纵向增量为正（向下滚）时增加，否则减少
    pub fn from_delta(delta: i32) -> Self {
        if delta > 0 {
            WheelDirection::Increase
        } else {
            WheelDirection::Decrease
        }
    }

    fn step(self) -> i32 {
        match self {
            WheelDirection::Increase => 1,
            WheelDirection::Decrease => -1,
        }
    }
}

/// 有界滑块，取值始终在 [25, 100]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedSlider {
    value: u8,
}

impl Default for BoundedSlider {
    fn default() -> Self {
        Self { value: SLIDER_MAX }
    }
}

impl BoundedSlider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// 指针拖拽/点击输入，越界值被钳制而不是拒绝
    pub fn set_from_pointer(&mut self, raw: i32) {
        self.value = clamp_raw(raw);
    }

    /// 每个滚轮刻度恰好移动一个单位
    pub fn set_from_wheel(&mut self, direction: WheelDirection) {
        self.value = clamp_raw(i32::from(self.value) + direction.step());
    }

    pub fn reset(&mut self) {
        self.value = SLIDER_MAX;
    }

    /// 将轨道上的列坐标线性映射为原始值（未钳制）
    ///
    /// `track_x` 与 `track_width` 描述渲染出的轨道，轨道外的列会得到越界值，
    /// 由 [`BoundedSlider::set_from_pointer`] 负责钳制。
    pub fn value_at_column(track_x: u16, track_width: u16, column: u16) -> i32 {
        let span = i32::from(SLIDER_MAX - SLIDER_MIN);
        if track_width <= 1 {
            return i32::from(SLIDER_MAX);
        }
        let last = i32::from(track_width) - 1;
        let offset = i32::from(column) - i32::from(track_x);
        if offset < 0 {
            return i32::from(SLIDER_MIN) + offset;
        }
        // 四舍五入到最近的刻度
        i32::from(SLIDER_MIN) + (offset * span * 2 + last) / (last * 2)
    }

    /// 当前值在轨道上对应的列偏移
    pub fn thumb_offset(&self, track_width: u16) -> u16 {
        if track_width <= 1 {
            return 0;
        }
        let last = u32::from(track_width) - 1;
        let span = u32::from(SLIDER_MAX - SLIDER_MIN);
        let above_min = u32::from(self.value - SLIDER_MIN);
        ((above_min * last * 2 + span) / (span * 2)) as u16
    }
}

fn clamp_raw(raw: i32) -> u8 {
    raw.clamp(i32::from(SLIDER_MIN), i32::from(SLIDER_MAX)) as u8
}

/// 连续空格产生的空片段如何处理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptySegments {
    /// 丢弃空片段，只保留非空单词
    #[default]
    Skip,
    /// 保留朴素按空格切分得到的空片段
    Keep,
}

/// 自由文本输入
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextCapture {
    text: String,
    policy: EmptySegments,
}

impl TextCapture {
    pub fn new(policy: EmptySegments) -> Self {
        Self {
            text: String::new(),
            policy,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 原样保存，不裁剪也不校验
    pub fn set_text(&mut self, s: impl Into<String>) {
        self.text = s.into();
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn pop(&mut self) {
        self.text.pop();
    }

    pub fn reset(&mut self) {
        self.text.clear();
    }

    pub fn tokens(&self) -> Vec<String> {
        tokenize(&self.text, self.policy)
    }

    /// 回显面板内容：原文，空时为占位符
    pub fn display_text(&self) -> &str {
        if self.text.is_empty() {
            PLACEHOLDER
        } else {
            &self.text
        }
    }
}

/// 按空格字符切分；结果为空时返回单个占位符
pub fn tokenize(text: &str, policy: EmptySegments) -> Vec<String> {
    if text.is_empty() {
        return vec![PLACEHOLDER.to_string()];
    }
    let tokens: Vec<String> = text
        .split(' ')
        .filter(|segment| policy == EmptySegments::Keep || !segment.is_empty())
        .map(str::to_string)
        .collect();
    if tokens.is_empty() {
        vec![PLACEHOLDER.to_string()]
    } else {
        tokens
    }
}

/// 网格单元：单词在序列中的投影，没有独立身份
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub label: String,
    /// 从 1 开始的位置
    pub position: usize,
}

/// 纯函数：每个单词一格，位置即其下标 + 1
pub fn cells(tokens: &[String]) -> Vec<GridCell> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| GridCell {
            label: token.clone(),
            position: i + 1,
        })
        .collect()
}

/// 整个界面状态的快照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub slider_value: u8,
    pub text: String,
}

impl UiState {
    pub fn initial() -> Self {
        Self {
            dark_mode: false,
            slider_value: SLIDER_MAX,
            text: String::new(),
        }
    }
}
