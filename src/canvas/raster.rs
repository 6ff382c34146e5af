/*
 * @Author       : 老董
 * @Date         : 2026-02-10
 * @Description  : 画布的栅格化后端（.jpg导出）
 */

use std::path::Path;

use image::{Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::point::Point;

use super::font;
use super::primitive::{self, HAlign, Primitive, Rotation, VAlign};
use super::{Canvas, Color};
use crate::errors::PlotError;

/// 默认栅格化密度：每个数据坐标单位对应的像素数
pub const DEFAULT_SCALE: f64 = 4.0;

impl Canvas {
    /// 栅格化为RGB图像：白底，y轴翻转（图像坐标向下），图元按zorder绘制
    pub fn to_rgb_image(&self, scale: f64) -> Result<RgbImage, PlotError> {
        let b = self.bounds().ok_or(PlotError::EmptyScene)?;
        let m = self.margin();
        let img_w = ((b.width() + 2.0 * m) * scale).ceil().max(1.0) as u32;
        let img_h = ((b.height() + 2.0 * m) * scale).ceil().max(1.0) as u32;
        let mut img = RgbImage::from_pixel(img_w, img_h, Rgb(Color::White.rgb()));

        // 数据坐标 -> 像素坐标
        let px = |x: f64| ((x - b.min_x + m) * scale) as f32;
        let py = |y: f64| ((b.max_y - y + m) * scale) as f32;

        for p in self.draw_order() {
            match p {
                Primitive::Circle {
                    x,
                    y,
                    radius,
                    fill,
                    edge,
                    ..
                } => {
                    let center = (px(*x) as i32, py(*y) as i32);
                    let r = (radius * scale).round().max(1.0) as i32;
                    draw_filled_circle_mut(&mut img, center, r, Rgb(fill.rgb()));
                    draw_hollow_circle_mut(&mut img, center, r, Rgb(edge.rgb()));
                }
                Primitive::Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    color,
                    width,
                    ..
                } => {
                    draw_thick_line(
                        &mut img,
                        (px(*x1), py(*y1)),
                        (px(*x2), py(*y2)),
                        *width * scale * 0.5,
                        Rgb(color.rgb()),
                    );
                }
                Primitive::Text {
                    x,
                    y,
                    text,
                    font_size,
                    color,
                    ha,
                    va,
                    rotation,
                    ..
                } => {
                    draw_text(
                        &mut img,
                        text,
                        px(*x),
                        py(*y),
                        *font_size * scale,
                        Rgb(color.rgb()),
                        *ha,
                        *va,
                        *rotation,
                    );
                }
                Primitive::Marker {
                    x, y, size, color, ..
                } => {
                    let half = (size * scale / 2.0).round().max(1.0) as i32;
                    let cx = px(*x) as i32;
                    let cy = py(*y) as i32;
                    // 右向三角形：尖端在右
                    let points = [
                        Point::new(cx + half, cy),
                        Point::new(cx - half, cy - half),
                        Point::new(cx - half, cy + half),
                    ];
                    draw_polygon_mut(&mut img, &points, Rgb(color.rgb()));
                }
            }
        }
        Ok(img)
    }

    /// 栅格化并写入JPEG文件
    pub fn save_jpg<P: AsRef<Path>>(&self, path: P, scale: f64) -> Result<(), PlotError> {
        let img = self.to_rgb_image(scale)?;
        img.save(path.as_ref())?;
        Ok(())
    }
}

/// 以平行偏移线近似画粗线（half_width为像素半宽）
fn draw_thick_line(
    img: &mut RgbImage,
    from: (f32, f32),
    to: (f32, f32),
    half_width: f64,
    color: Rgb<u8>,
) {
    let n = half_width.round().max(0.0) as i32;
    let dx = (to.0 - from.0).abs();
    let dy = (to.1 - from.1).abs();
    for off in -n..=n {
        let o = off as f32;
        // 沿较短的轴向偏移，避免斜线出现缺口
        let (f, t) = if dx >= dy {
            ((from.0, from.1 + o), (to.0, to.1 + o))
        } else {
            ((from.0 + o, from.1), (to.0 + o, to.1))
        };
        draw_line_segment_mut(img, f, t, color);
    }
}

/// 用内置5x7点阵字体画文字
///
/// `font_size_px`为文字块像素高度；旋转时先旋转再按包围盒对齐，
/// 与matplotlib默认行为一致。
#[allow(clippy::too_many_arguments)]
fn draw_text(
    img: &mut RgbImage,
    text: &str,
    anchor_x: f32,
    anchor_y: f32,
    font_size_px: f64,
    color: Rgb<u8>,
    ha: HAlign,
    va: VAlign,
    rotation: Rotation,
) {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return;
    }
    let cell = (font_size_px / font::GLYPH_HEIGHT as f64).max(1.0);
    let text_w = ((font::GLYPH_WIDTH + 1) * chars.len() - 1) as f64 * cell;
    let text_h = font::GLYPH_HEIGHT as f64 * cell;

    // 旋转后的包围盒尺寸（像素坐标，y向下）
    let (bw, bh) = match rotation {
        Rotation::Horizontal => (text_w, text_h),
        Rotation::Ccw90 => (text_h, text_w),
    };
    let left = match ha {
        HAlign::Left => f64::from(anchor_x),
        HAlign::Center => f64::from(anchor_x) - bw / 2.0,
        HAlign::Right => f64::from(anchor_x) - bw,
    };
    // 数据坐标的Bottom在图像坐标中是包围盒下沿
    let top = match va {
        VAlign::Bottom => f64::from(anchor_y) - bh,
        VAlign::Center => f64::from(anchor_y) - bh / 2.0,
        VAlign::Top => f64::from(anchor_y),
    };

    for (i, &c) in chars.iter().enumerate() {
        let g = font::glyph(c);
        for col in 0..font::GLYPH_WIDTH {
            for row in 0..font::GLYPH_HEIGHT {
                if !font::is_set(&g, col, row) {
                    continue;
                }
                // 字内偏移：u沿文字走向，v沿字形自上而下
                let u = ((font::GLYPH_WIDTH + 1) * i + col) as f64 * cell;
                let v = row as f64 * cell;
                let (x0, y0) = match rotation {
                    Rotation::Horizontal => (left + u, top + v),
                    // 逆时针90度：文字自下而上，字形下沿朝+x
                    Rotation::Ccw90 => (left + v, top + text_w - cell - u),
                };
                fill_cell(img, x0, y0, cell, color);
            }
        }
    }
}

fn fill_cell(img: &mut RgbImage, x0: f64, y0: f64, cell: f64, color: Rgb<u8>) {
    let size = cell.round().max(1.0) as i64;
    let x0 = x0.round() as i64;
    let y0 = y0.round() as i64;
    for yy in y0..y0 + size {
        for xx in x0..x0 + size {
            if xx >= 0 && yy >= 0 && (xx as u32) < img.width() && (yy as u32) < img.height() {
                img.put_pixel(xx as u32, yy as u32, color);
            }
        }
    }
}
