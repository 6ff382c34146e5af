use approx::assert_abs_diff_eq;

use crate::assert_err;
use crate::canvas::{Canvas, Color, HAlign, Primitive, Rotation, VAlign};
use crate::errors::PlotError;

/// 空画布没有包围盒
#[test]
fn test_empty_canvas_has_no_bounds() {
    let canvas = Canvas::new();
    assert!(canvas.is_empty());
    assert!(canvas.bounds().is_none());
}

/// 圆的包围盒按半径外扩
#[test]
fn test_bounds_of_circle() {
    let mut canvas = Canvas::new();
    canvas.circle(10.0, -2.0, 5.0, Color::Salmon, Color::Black, 3);

    let b = canvas.bounds().unwrap();
    assert_abs_diff_eq!(b.min_x, 5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(b.max_x, 15.0, epsilon = 1e-12);
    assert_abs_diff_eq!(b.min_y, -7.0, epsilon = 1e-12);
    assert_abs_diff_eq!(b.max_y, 3.0, epsilon = 1e-12);
}

/// 包围盒随图元增多而扩大
#[test]
fn test_bounds_grow_with_primitives() {
    let mut canvas = Canvas::new();
    canvas.circle(0.0, 0.0, 1.0, Color::Gray, Color::Black, 3);
    let before = canvas.bounds().unwrap();

    canvas.line((-20.0, 0.0), (30.0, 0.0), Color::Black, 1.0, 1);
    let after = canvas.bounds().unwrap();

    assert!(after.min_x < before.min_x);
    assert!(after.max_x > before.max_x);
    assert_abs_diff_eq!(after.min_x, -20.0, epsilon = 1e-12);
    assert_abs_diff_eq!(after.max_x, 30.0, epsilon = 1e-12);
}

/// 文字包围盒考虑对齐：居中锚点时左右各半
#[test]
fn test_text_bounds_respect_alignment() {
    let mut canvas = Canvas::new();
    canvas.text(
        0.0,
        0.0,
        "ab",
        7.0,
        Color::Black,
        HAlign::Center,
        VAlign::Bottom,
        Rotation::Horizontal,
        3,
    );
    // 字号7、每格1单位：两字符共11列宽，高7
    let b = canvas.bounds().unwrap();
    assert_abs_diff_eq!(b.min_x, -5.5, epsilon = 1e-9);
    assert_abs_diff_eq!(b.max_x, 5.5, epsilon = 1e-9);
    assert_abs_diff_eq!(b.min_y, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(b.max_y, 7.0, epsilon = 1e-9);
}

/// 竖排文字的包围盒宽高互换
#[test]
fn test_rotated_text_bounds_swap_extent() {
    let mut canvas = Canvas::new();
    canvas.text(
        0.0,
        0.0,
        "ab",
        7.0,
        Color::Black,
        HAlign::Center,
        VAlign::Bottom,
        Rotation::Ccw90,
        3,
    );
    let b = canvas.bounds().unwrap();
    assert_abs_diff_eq!(b.width(), 7.0, epsilon = 1e-9);
    assert_abs_diff_eq!(b.height(), 11.0, epsilon = 1e-9);
}

/// 绘制顺序按zorder升序，稳定保持加入顺序
#[test]
fn test_draw_order_sorts_by_zorder() {
    let mut canvas = Canvas::new();
    canvas.circle(0.0, 0.0, 1.0, Color::Red, Color::Black, 3);
    canvas.line((0.0, 0.0), (1.0, 1.0), Color::Gray, 1.0, 1);
    canvas.marker(0.0, 0.0, 2.0, Color::Black, 2);

    let order = canvas.draw_order();
    assert!(matches!(order[0], Primitive::Line { .. }));
    assert!(matches!(order[1], Primitive::Marker { .. }));
    assert!(matches!(order[2], Primitive::Circle { .. }));
}

/// 带后缀的基础路径被拒绝
#[test]
fn test_save_rejects_path_with_extension() {
    let mut canvas = Canvas::new();
    canvas.circle(0.0, 0.0, 1.0, Color::Red, Color::Black, 3);
    let result = canvas.save("drawing.jpg");
    assert_err!(result, PlotError::BasePathHasExtension(..));
}

/// 空画布导出报错
#[test]
fn test_save_empty_canvas_fails() {
    let canvas = Canvas::new();
    let result = canvas.save(std::env::temp_dir().join("only_plot_empty"));
    assert_err!(result, PlotError::EmptyScene);
}
