/*
 * @Author       : 老董
 * @Date         : 2026-02-10
 * @Description  : Canvas 模块：保留式2D画布与图像导出
 *
 * 公开 API：
 * - `Canvas`: 图元收集与导出（.jpg + .pdf）
 * - `Color`: 命名颜色
 * - `Primitive` 及对齐/旋转类型
 */

pub mod color;
pub mod font;
mod pdf;
pub mod primitive;
mod raster;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use crate::errors::PlotError;

pub use color::Color;
pub use primitive::{HAlign, Primitive, Rotation, VAlign};
pub use raster::DEFAULT_SCALE;

/// 场景紧致包围盒（数据坐标，y轴向上）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    fn include(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// 导出结果
#[derive(Debug)]
pub struct PlotOutput {
    pub jpg_path: PathBuf,
    pub pdf_path: PathBuf,
}

/// 保留式2D画布
///
/// 先把圆圈、线段、文字、箭头标记收集为图元（带zorder），
/// 导出时按zorder从低到高绘制，包围盒由全部图元决定（紧致出图）。
pub struct Canvas {
    primitives: Vec<Primitive>,
    /// 包围盒外的留白（数据坐标单位）
    margin: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            primitives: Vec::new(),
            margin: 10.0,
        }
    }

    pub fn with_margin(margin: f64) -> Self {
        Self {
            primitives: Vec::new(),
            margin,
        }
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    // ========== 图元添加 ==========

    /// 带黑色描边的实心圆
    pub fn circle(&mut self, x: f64, y: f64, radius: f64, fill: Color, edge: Color, zorder: i32) {
        self.primitives.push(Primitive::Circle {
            x,
            y,
            radius,
            fill,
            edge,
            zorder,
        });
    }

    pub fn line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        color: Color,
        width: f64,
        zorder: i32,
    ) {
        self.primitives.push(Primitive::Line {
            x1: from.0,
            y1: from.1,
            x2: to.0,
            y2: to.1,
            color,
            width,
            zorder,
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        font_size: f64,
        color: Color,
        ha: HAlign,
        va: VAlign,
        rotation: Rotation,
        zorder: i32,
    ) {
        self.primitives.push(Primitive::Text {
            x,
            y,
            text: text.to_string(),
            font_size,
            color,
            ha,
            va,
            rotation,
            zorder,
        });
    }

    /// 右向箭头头部（以(x, y)为中心）
    pub fn marker(&mut self, x: f64, y: f64, size: f64, color: Color, zorder: i32) {
        self.primitives.push(Primitive::Marker {
            x,
            y,
            size,
            color,
            zorder,
        });
    }

    // ========== 查询 ==========

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// 全部图元的紧致包围盒；画布为空时返回None
    pub fn bounds(&self) -> Option<Bounds> {
        if self.primitives.is_empty() {
            return None;
        }
        let mut b = Bounds::empty();
        for p in &self.primitives {
            match p {
                Primitive::Circle { x, y, radius, .. } => {
                    b.include(x - radius, y - radius);
                    b.include(x + radius, y + radius);
                }
                Primitive::Line { x1, y1, x2, y2, .. } => {
                    b.include(*x1, *y1);
                    b.include(*x2, *y2);
                }
                Primitive::Text {
                    x,
                    y,
                    text,
                    font_size,
                    ha,
                    va,
                    rotation,
                    ..
                } => {
                    let (tw, th) = primitive::text_block_size(text, *font_size);
                    let (w, h) = match rotation {
                        Rotation::Horizontal => (tw, th),
                        Rotation::Ccw90 => (th, tw),
                    };
                    let (left, bottom) = primitive::anchor_block(*x, *y, w, h, *ha, *va);
                    b.include(left, bottom);
                    b.include(left + w, bottom + h);
                }
                Primitive::Marker { x, y, size, .. } => {
                    let half = size / 2.0;
                    b.include(x - half, y - half);
                    b.include(x + half, y + half);
                }
            }
        }
        Some(b)
    }

    /// 图元按zorder升序的绘制顺序（同zorder保持加入顺序）
    pub(in crate::canvas) fn draw_order(&self) -> Vec<&Primitive> {
        let mut order: Vec<&Primitive> = self.primitives.iter().collect();
        order.sort_by_key(|p| p.zorder());
        order
    }

    // ========== 导出 ==========

    /// 导出`{base_path}.jpg`与`{base_path}.pdf`
    ///
    /// # 错误
    /// - 路径含后缀（如`.jpg`）时返回错误并提示正确用法
    /// - 画布为空时返回 [`PlotError::EmptyScene`]
    pub fn save<P: AsRef<Path>>(&self, base_path: P) -> Result<PlotOutput, PlotError> {
        let path = base_path.as_ref();
        if path.extension().is_some() {
            return Err(PlotError::BasePathHasExtension(
                path.display().to_string(),
            ));
        }

        let jpg_path = path.with_extension("jpg");
        let pdf_path = path.with_extension("pdf");
        self.save_jpg(&jpg_path, DEFAULT_SCALE)?;
        self.save_pdf(&pdf_path)?;
        Ok(PlotOutput { jpg_path, pdf_path })
    }
}
