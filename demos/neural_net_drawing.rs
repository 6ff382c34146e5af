//! # 前馈网络结构示意图示例
//!
//! 展示 only_plot 的完整绘图流程：
//! - 宽隐藏层压缩为15个槽位并用省略号示意
//! - 输入/输出箭头标注由 `select_annotation_parameters` 给出
//! - 同时导出 `.jpg` 与 `.pdf`
//!
//! ## 运行
//! ```bash
//! cargo run --example neural_net_drawing
//! ```

use only_plot::{Canvas, Dimensions, NetworkDiagram, PlotError, select_annotation_parameters};

fn main() -> Result<(), PlotError> {
    println!("=== 前馈网络结构示意图示例 ===\n");

    // 1. 层结构：真实节点数 vs 实际画出的槽位数
    let real_layers: Vec<usize> = vec![12, 1500, 1500, 1500, 1500, 1500, 6];
    let mut layer_sizes = vec![15; real_layers.len()];
    layer_sizes[0] = real_layers[0];
    *layer_sizes.last_mut().unwrap() = *real_layers.last().unwrap();

    let mut diagram = NetworkDiagram::new(layer_sizes.clone(), real_layers);
    diagram.set_dimensions(Dimensions::default());

    // 2. 隐藏层只保留首尾少数槽位，其余画成省略号
    let keep = [0usize, 1, 2, 14];
    for layer_idx in 1..layer_sizes.len() - 1 {
        for node_idx in 0..layer_sizes[layer_idx] {
            if !keep.contains(&node_idx) {
                diagram.add_ellipsis(layer_idx, node_idx);
            }
        }
    }

    // 3. 箭头与颜色标注（无配置对象时用默认集合）
    diagram.apply_annotations(select_annotation_parameters(None));

    // 4. 绘制并导出
    let mut canvas = Canvas::new();
    diagram.draw(&mut canvas);
    let output = canvas.save("neural_net_drawing")?;

    println!("已导出: {}", output.jpg_path.display());
    println!("已导出: {}", output.pdf_path.display());
    Ok(())
}
