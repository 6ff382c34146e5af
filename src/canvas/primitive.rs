use super::Color;
use super::font;

/// 文字水平对齐方式（对应matplotlib的`ha`）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// 文字垂直对齐方式（对应matplotlib的`va`）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// 文字旋转（只支持示意图用到的两种角度）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Horizontal,
    /// 逆时针旋转90度（竖排文字，自下而上阅读）
    Ccw90,
}

/// 画布图元
///
/// 坐标为数据坐标（y轴向上），`zorder`越大越靠上层绘制。
#[derive(Debug, Clone)]
pub enum Primitive {
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        fill: Color,
        edge: Color,
        zorder: i32,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        width: f64,
        zorder: i32,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        font_size: f64,
        color: Color,
        ha: HAlign,
        va: VAlign,
        rotation: Rotation,
        zorder: i32,
    },
    /// 右向箭头头部标记（对应matplotlib的`marker='>'`）
    Marker {
        x: f64,
        y: f64,
        size: f64,
        color: Color,
        zorder: i32,
    },
}

impl Primitive {
    pub const fn zorder(&self) -> i32 {
        match self {
            Self::Circle { zorder, .. }
            | Self::Line { zorder, .. }
            | Self::Text { zorder, .. }
            | Self::Marker { zorder, .. } => *zorder,
        }
    }
}

/// 估算文字块尺寸（数据坐标单位，未旋转）
///
/// 按5x7点阵字体的格子度量：每字符5列加1列间距，高7行，
/// 整块高度即字号。
pub(crate) fn text_block_size(text: &str, font_size: f64) -> (f64, f64) {
    let n = text.chars().count();
    if n == 0 {
        return (0.0, 0.0);
    }
    let cell = font_size / font::GLYPH_HEIGHT as f64;
    let cols = (font::GLYPH_WIDTH + 1) * n - 1;
    (cols as f64 * cell, font_size)
}

/// 按对齐方式求文字块左下角（数据坐标，y轴向上）
///
/// 旋转文字遵循matplotlib默认的旋转模式：先旋转、再按旋转后的
/// 包围盒对齐锚点。调用方需传入旋转后的包围盒尺寸。
pub(crate) fn anchor_block(
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    ha: HAlign,
    va: VAlign,
) -> (f64, f64) {
    let left = match ha {
        HAlign::Left => x,
        HAlign::Center => x - w / 2.0,
        HAlign::Right => x - w,
    };
    let bottom = match va {
        VAlign::Bottom => y,
        VAlign::Center => y - h / 2.0,
        VAlign::Top => y - h,
    };
    (left, bottom)
}
