/*
 * @Author       : 老董
 * @Date         : 2026-02-10
 * @Description  : 画布的矢量后端（.pdf导出）
 *
 * 手写单页PDF：MediaBox取场景紧致包围盒加留白，圆用4段三次贝塞尔曲线
 * 逼近，文字用PDF标准字体Helvetica（无需内嵌字形）。
 */

use std::fmt::Write as _;
use std::path::Path;

use super::primitive::{HAlign, Primitive, Rotation, VAlign};
use super::Canvas;
use crate::errors::PlotError;

/// 四分之一圆的贝塞尔控制点系数
const BEZIER_K: f64 = 0.552_284_749_831;

/// Helvetica平均字符宽（相对字号的比例，对齐估算用）
const HELVETICA_CHAR_WIDTH: f64 = 0.5;

impl Canvas {
    /// 生成完整PDF文件字节
    pub fn to_pdf_bytes(&self) -> Result<Vec<u8>, PlotError> {
        let b = self.bounds().ok_or(PlotError::EmptyScene)?;
        let m = self.margin();
        let page_w = b.width() + 2.0 * m;
        let page_h = b.height() + 2.0 * m;

        // 数据坐标 -> 页面坐标（PDF的y轴本就向上）
        let tx = |x: f64| x - b.min_x + m;
        let ty = |y: f64| y - b.min_y + m;

        let mut content = String::new();
        for p in self.draw_order() {
            match p {
                Primitive::Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    color,
                    width,
                    ..
                } => {
                    let [r, g, bl] = color.rgb_f64();
                    let _ = writeln!(content, "{r:.3} {g:.3} {bl:.3} RG {width:.2} w");
                    let _ = writeln!(
                        content,
                        "{:.2} {:.2} m {:.2} {:.2} l S",
                        tx(*x1),
                        ty(*y1),
                        tx(*x2),
                        ty(*y2)
                    );
                }
                Primitive::Circle {
                    x,
                    y,
                    radius,
                    fill,
                    edge,
                    ..
                } => {
                    let [fr, fg, fb] = fill.rgb_f64();
                    let [er, eg, eb] = edge.rgb_f64();
                    let _ = writeln!(
                        content,
                        "{fr:.3} {fg:.3} {fb:.3} rg {er:.3} {eg:.3} {eb:.3} RG 1 w"
                    );
                    circle_path(&mut content, tx(*x), ty(*y), *radius);
                    let _ = writeln!(content, "B");
                }
                Primitive::Marker {
                    x, y, size, color, ..
                } => {
                    let [r, g, bl] = color.rgb_f64();
                    let half = size / 2.0;
                    let (cx, cy) = (tx(*x), ty(*y));
                    let _ = writeln!(content, "{r:.3} {g:.3} {bl:.3} rg");
                    let _ = writeln!(
                        content,
                        "{:.2} {:.2} m {:.2} {:.2} l {:.2} {:.2} l h f",
                        cx + half,
                        cy,
                        cx - half,
                        cy + half,
                        cx - half,
                        cy - half
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
                    text_op(
                        &mut content,
                        text,
                        tx(*x),
                        ty(*y),
                        *font_size,
                        color.rgb_f64(),
                        *ha,
                        *va,
                        *rotation,
                    );
                }
            }
        }

        Ok(assemble_pdf(page_w, page_h, &content))
    }

    /// 写入PDF文件
    pub fn save_pdf<P: AsRef<Path>>(&self, path: P) -> Result<(), PlotError> {
        let bytes = self.to_pdf_bytes()?;
        std::fs::write(path.as_ref(), bytes)?;
        Ok(())
    }
}

/// 4段贝塞尔曲线逼近的圆路径（不含绘制算子）
fn circle_path(content: &mut String, cx: f64, cy: f64, r: f64) {
    let k = BEZIER_K * r;
    let _ = writeln!(content, "{:.2} {:.2} m", cx + r, cy);
    let _ = writeln!(
        content,
        "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c",
        cx + r,
        cy + k,
        cx + k,
        cy + r,
        cx,
        cy + r
    );
    let _ = writeln!(
        content,
        "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c",
        cx - k,
        cy + r,
        cx - r,
        cy + k,
        cx - r,
        cy
    );
    let _ = writeln!(
        content,
        "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c",
        cx - r,
        cy - k,
        cx - k,
        cy - r,
        cx,
        cy - r
    );
    let _ = writeln!(
        content,
        "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c h",
        cx + k,
        cy - r,
        cx + r,
        cy - k,
        cx + r,
        cy
    );
}

/// 文字绘制算子（含对齐与旋转）
#[allow(clippy::too_many_arguments)]
fn text_op(
    content: &mut String,
    text: &str,
    anchor_x: f64,
    anchor_y: f64,
    font_size: f64,
    rgb: [f64; 3],
    ha: HAlign,
    va: VAlign,
    rotation: Rotation,
) {
    let n = text.chars().count();
    if n == 0 {
        return;
    }
    let text_w = HELVETICA_CHAR_WIDTH * font_size * n as f64;
    let text_h = 0.7 * font_size;

    // 旋转后的包围盒，对齐求左下角
    let (bw, bh) = match rotation {
        Rotation::Horizontal => (text_w, text_h),
        Rotation::Ccw90 => (text_h, text_w),
    };
    let left = match ha {
        HAlign::Left => anchor_x,
        HAlign::Center => anchor_x - bw / 2.0,
        HAlign::Right => anchor_x - bw,
    };
    let bottom = match va {
        VAlign::Bottom => anchor_y,
        VAlign::Center => anchor_y - bh / 2.0,
        VAlign::Top => anchor_y - bh,
    };

    let [r, g, b] = rgb;
    let _ = writeln!(content, "BT /F1 {font_size:.1} Tf {r:.3} {g:.3} {b:.3} rg");
    match rotation {
        Rotation::Horizontal => {
            let _ = writeln!(content, "1 0 0 1 {left:.2} {bottom:.2} Tm");
        }
        Rotation::Ccw90 => {
            // 基线沿+y方向，字形主体落在包围盒内
            let _ = writeln!(content, "0 1 -1 0 {:.2} {bottom:.2} Tm", left + text_h);
        }
    }
    let _ = writeln!(content, "({}) Tj ET", escape_pdf_string(text));
}

/// PDF字符串转义；非ASCII字符退化为'?'
fn escape_pdf_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            c if c.is_ascii() && !c.is_ascii_control() => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

/// 组装最小PDF文档（单页、单字体、单内容流）
fn assemble_pdf(page_w: f64, page_h: f64, content: &str) -> Vec<u8> {
    let mut out: Vec<u8> = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n");

    let bodies = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {page_w:.2} {page_h:.2}] \
             /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        format!(
            "<< /Length {} >>\nstream\n{}endstream",
            content.len(),
            content
        ),
    ];

    let mut offsets = Vec::with_capacity(bodies.len());
    for (i, body) in bodies.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref_offset = out.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", bodies.len() + 1);
    for off in &offsets {
        let _ = writeln!(xref, "{off:010} 00000 n ");
    }
    out.extend_from_slice(xref.as_bytes());
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            bodies.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );
    out
}
