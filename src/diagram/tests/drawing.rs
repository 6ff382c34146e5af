use approx::assert_abs_diff_eq;

use crate::canvas::{Canvas, Color, Primitive};
use crate::diagram::{Arrow, Dimensions, NetworkDiagram};

/// 节点圆圈数
fn circle_count(canvas: &Canvas) -> usize {
    canvas
        .primitives()
        .iter()
        .filter(|p| matches!(p, Primitive::Circle { .. }))
        .count()
}

/// 层间连线数（灰色细线；箭头线是黑色粗线，不会计入）
fn edge_count(canvas: &Canvas) -> usize {
    canvas
        .primitives()
        .iter()
        .filter(|p| matches!(p, Primitive::Line { color: Color::Gray, .. }))
        .count()
}

fn marker_count(canvas: &Canvas) -> usize {
    canvas
        .primitives()
        .iter()
        .filter(|p| matches!(p, Primitive::Marker { .. }))
        .count()
}

/// [2,3,2]全真实节点：7个圆，2*3+3*2=12条连线
#[test]
fn test_node_and_edge_counts() {
    let diagram = NetworkDiagram::new(vec![2, 3, 2], vec![2, 3, 2]);
    let mut canvas = Canvas::new();
    diagram.draw(&mut canvas);

    assert_eq!(circle_count(&canvas), 7);
    assert_eq!(edge_count(&canvas), 12);
}

/// 默认配色：首层浅蓝、隐藏层浅灰、末层鲑红
#[test]
fn test_default_node_colors() {
    let diagram = NetworkDiagram::new(vec![2, 3, 2], vec![2, 3, 2]);
    let dims = Dimensions::default();
    let mut canvas = Canvas::new();
    diagram.draw(&mut canvas);

    for p in canvas.primitives() {
        if let Primitive::Circle { x, fill, .. } = p {
            if *x == 0.0 {
                assert_eq!(*fill, Color::LightBlue);
            } else if *x == dims.h_spacing {
                assert_eq!(*fill, Color::LightGray);
            } else {
                assert_eq!(*fill, Color::Salmon);
            }
        }
    }
}

/// 提供的色表按节点号循环取用
#[test]
fn test_supplied_colors_cycle_by_index() {
    let mut diagram = NetworkDiagram::new(vec![3, 2], vec![3, 2]);
    diagram.set_input_colors(vec![Color::Red, Color::Blue]);
    let mut canvas = Canvas::new();
    diagram.draw(&mut canvas);

    let mut first_layer: Vec<(f64, Color)> = canvas
        .primitives()
        .iter()
        .filter_map(|p| match p {
            Primitive::Circle { x, y, fill, .. } if *x == 0.0 => Some((*y, *fill)),
            _ => None,
        })
        .collect();
    // 按y从上到下即节点0、1、2
    first_layer.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap());
    let colors: Vec<Color> = first_layer.into_iter().map(|(_, c)| c).collect();
    assert_eq!(colors, vec![Color::Red, Color::Blue, Color::Red]);
}

/// 省略号槽位：少画一个圆、画一个省略号文字，且相关连线全部跳过
#[test]
fn test_ellipsis_skips_edges() {
    let mut diagram = NetworkDiagram::new(vec![2, 3, 2], vec![2, 3, 2]);
    diagram.add_ellipsis(1, 1);
    let mut canvas = Canvas::new();
    diagram.draw(&mut canvas);

    assert_eq!(circle_count(&canvas), 6);
    // 槽位(1,1)左右各2条连线被跳过
    assert_eq!(edge_count(&canvas), 8);

    let ellipsis_texts = canvas
        .primitives()
        .iter()
        .filter(|p| matches!(p, Primitive::Text { text, .. } if text == "..."))
        .count();
    assert_eq!(ellipsis_texts, 1);
}

/// 同一目标节点号重复添加箭头时覆盖而非重复
#[test]
fn test_input_arrow_overwrites_same_node_index() {
    let mut diagram = NetworkDiagram::new(vec![2, 2], vec![2, 2]);
    diagram.add_input_arrow(0, Arrow::new(0, "old"));
    diagram.add_input_arrow(0, Arrow::new(0, "new"));

    assert_eq!(diagram.input_arrows().len(), 1);
    assert_eq!(diagram.input_arrows()[&0].label, "new");

    let mut canvas = Canvas::new();
    diagram.draw(&mut canvas);
    assert_eq!(marker_count(&canvas), 1);

    let has_new = canvas
        .primitives()
        .iter()
        .any(|p| matches!(p, Primitive::Text { text, .. } if text == "new"));
    let has_old = canvas
        .primitives()
        .iter()
        .any(|p| matches!(p, Primitive::Text { text, .. } if text == "old"));
    assert!(has_new);
    assert!(!has_old);
}

/// 输入箭头的几何：起止x来自布局参数，y对准目标节点
#[test]
fn test_input_arrow_geometry() {
    let dims = Dimensions::default();
    let mut diagram = NetworkDiagram::new(vec![2, 2], vec![2, 2]);
    diagram.add_input_arrow(1, Arrow::new(0, "x_1"));
    let mut canvas = Canvas::new();
    diagram.draw(&mut canvas);

    let arrow_line = canvas
        .primitives()
        .iter()
        .find_map(|p| match p {
            Primitive::Line {
                x1,
                y1,
                x2,
                y2,
                color: Color::Black,
                ..
            } => Some((*x1, *y1, *x2, *y2)),
            _ => None,
        })
        .expect("应有输入箭头线");

    // 节点1在top_y - v_spacing = -v/2
    let expected_y = -dims.v_spacing / 2.0;
    assert_abs_diff_eq!(arrow_line.0, dims.arrow_start_x, epsilon = 1e-12);
    assert_abs_diff_eq!(arrow_line.2, dims.arrowhead_offset_x, epsilon = 1e-12);
    assert_abs_diff_eq!(arrow_line.1, expected_y, epsilon = 1e-12);
    assert_abs_diff_eq!(arrow_line.3, expected_y, epsilon = 1e-12);
}

/// 输出箭头从最后一层x起，向右延伸|arrow_start_x|
#[test]
fn test_output_arrow_geometry() {
    let dims = Dimensions::default();
    let mut diagram = NetworkDiagram::new(vec![2, 2], vec![2, 2]);
    diagram.add_output_arrow(0, Arrow::new(1, "y_0"));
    let mut canvas = Canvas::new();
    diagram.draw(&mut canvas);

    let arrow_line = canvas
        .primitives()
        .iter()
        .find_map(|p| match p {
            Primitive::Line {
                x1,
                y1,
                x2,
                color: Color::Black,
                ..
            } => Some((*x1, *y1, *x2)),
            _ => None,
        })
        .expect("应有输出箭头线");

    assert_abs_diff_eq!(arrow_line.0, dims.h_spacing, epsilon = 1e-12);
    assert_abs_diff_eq!(arrow_line.2, dims.h_spacing + 30.0, epsilon = 1e-12);
    assert_abs_diff_eq!(arrow_line.1, dims.v_spacing / 2.0, epsilon = 1e-12);
}

/// 空网络不画任何东西
#[test]
fn test_empty_network_draws_nothing() {
    let diagram = NetworkDiagram::new(vec![], vec![]);
    let mut canvas = Canvas::new();
    diagram.draw(&mut canvas);
    assert!(canvas.is_empty());
}

/// 每层有一条竖排的真实规模标注
#[test]
fn test_layer_size_labels() {
    let diagram = NetworkDiagram::new(vec![2, 3], vec![20, 3000]);
    let mut canvas = Canvas::new();
    diagram.draw(&mut canvas);

    let labels: Vec<&str> = canvas
        .primitives()
        .iter()
        .filter_map(|p| match p {
            Primitive::Text { text, .. } if text.starts_with("n_nodes=") => {
                Some(text.as_str())
            }
            _ => None,
        })
        .collect();
    assert_eq!(labels.len(), 2);
    assert!(labels.contains(&"n_nodes=20"));
    assert!(labels.contains(&"n_nodes=3000"));
}
