/*
 * @Author       : 老董
 * @Date         : 2026-02-12
 * @Description  : 完整出图流程测试 - 宽隐藏层压缩示意图，双格式导出
 *                 网络结构：12 -> 1500x5（画成15个槽位） -> 6
 */
use only_plot::{Canvas, Dimensions, NetworkDiagram, PlotError, select_annotation_parameters};

/// 示例网络：真实层与画出的槽位数
fn build_example_diagram() -> NetworkDiagram {
    let real_layers: Vec<usize> = vec![12, 1500, 1500, 1500, 1500, 1500, 6];
    let layer_sizes: Vec<usize> = vec![12, 15, 15, 15, 15, 15, 6];
    let mut diagram = NetworkDiagram::new(layer_sizes.clone(), real_layers);
    diagram.set_dimensions(Dimensions::default());

    // 隐藏层只保留0、1、2、14号槽位，其余画成省略号
    let keep = [0usize, 1, 2, 14];
    for layer_idx in 1..layer_sizes.len() - 1 {
        for node_idx in 0..layer_sizes[layer_idx] {
            if !keep.contains(&node_idx) {
                diagram.add_ellipsis(layer_idx, node_idx);
            }
        }
    }
    diagram.apply_annotations(select_annotation_parameters(None));
    diagram
}

#[test]
fn test_full_drawing_pipeline() -> Result<(), PlotError> {
    let diagram = build_example_diagram();

    let mut canvas = Canvas::new();
    diagram.draw(&mut canvas);
    assert!(!canvas.is_empty());

    // 包围盒覆盖输入箭头（最左）到输出箭头（最右）
    let bounds = canvas.bounds().ok_or(PlotError::EmptyScene)?;
    assert!(bounds.min_x <= -30.0);
    assert!(bounds.max_x >= 6.0 * 19.0 + 30.0);

    let base = std::env::temp_dir().join("only_plot_neural_net_drawing");
    let output = canvas.save(&base)?;

    // JPEG以SOI标记开头，PDF以版本头开头
    let jpg = std::fs::read(&output.jpg_path)?;
    assert!(jpg.starts_with(&[0xFF, 0xD8]));
    let pdf = std::fs::read(&output.pdf_path)?;
    assert!(pdf.starts_with(b"%PDF-"));

    std::fs::remove_file(&output.jpg_path).ok();
    std::fs::remove_file(&output.pdf_path).ok();
    Ok(())
}

/// 默认标注集合落在示例网络的首末两层
#[test]
fn test_annotations_match_example_layers() {
    let diagram = build_example_diagram();

    // 10个输入箭头指向12节点的首层，6个输出箭头对应6节点的末层
    assert_eq!(diagram.input_arrows().len(), 10);
    assert!(diagram.input_arrows().keys().all(|&idx| idx < 12));
    assert_eq!(diagram.output_arrows().len(), 6);
    assert!(diagram.output_arrows().keys().all(|&idx| idx < 6));
}
