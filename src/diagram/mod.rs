/*
 * @Author       : 老董
 * @Date         : 2026-02-11
 * @Description  : Diagram 模块：前馈网络层级结构示意图
 *
 * 公开 API：
 * - `NetworkDiagram`: 示意图描述与绘制
 * - `Dimensions` / `Layout`: 布局参数与坐标表
 * - `select_annotation_parameters` / `SimConfig`: 示例标注选择器
 */

mod layout;
mod selector;

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, HashSet};

use crate::canvas::{Canvas, Color, HAlign, Rotation, VAlign};

pub use layout::{Dimensions, Layout, NodeCoord};
pub use selector::{AnnotationSet, ProblemData, SimConfig, select_annotation_parameters};

// zorder约定：连线在最底，箭头线居中，圆圈与文字在最上（圆压线）
const EDGE_ZORDER: i32 = 1;
const ARROW_ZORDER: i32 = 2;
const NODE_ZORDER: i32 = 3;
const TEXT_ZORDER: i32 = 3;

const LABEL_FONT_SIZE: f64 = 12.0;
const ELLIPSIS_FONT_SIZE: f64 = 16.0;
const LEGEND_FONT_SIZE: f64 = 10.0;
/// 图例行距（字号减4，与脚本惯例一致）
const LEGEND_LINE_STEP: f64 = LEGEND_FONT_SIZE - 4.0;
const ARROWHEAD_SIZE: f64 = 10.0;

/// 箭头标注：`layer`为目标层号，`label`为箭头上方的文字
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrow {
    pub layer: usize,
    pub label: String,
}

impl Arrow {
    pub fn new(layer: usize, label: impl Into<String>) -> Self {
        Self {
            layer,
            label: label.into(),
        }
    }
}

/// 前馈网络层级结构示意图
///
/// `layer_sizes`是每层实际画出的槽位数（过宽的层可用省略号压缩），
/// `real_layers`是每层真实节点数，只作为文字标注显示。
#[derive(Debug)]
pub struct NetworkDiagram {
    layer_sizes: Vec<usize>,
    real_layers: Vec<usize>,
    dims: Dimensions,
    input_colors: Vec<Color>,
    output_colors: Vec<Color>,
    ellipsis: HashSet<(usize, usize)>,
    // 按目标节点号为键：同一节点重复添加时覆盖而非重复画箭头
    input_arrows: BTreeMap<usize, Arrow>,
    output_arrows: BTreeMap<usize, Arrow>,
    color_explanations: Vec<(Color, String)>,
}

impl NetworkDiagram {
    pub fn new(layer_sizes: Vec<usize>, real_layers: Vec<usize>) -> Self {
        Self {
            layer_sizes,
            real_layers,
            dims: Dimensions::default(),
            input_colors: Vec::new(),
            output_colors: Vec::new(),
            ellipsis: HashSet::new(),
            input_arrows: BTreeMap::new(),
            output_arrows: BTreeMap::new(),
            color_explanations: Vec::new(),
        }
    }

    // ========== 构建 ==========

    pub fn set_dimensions(&mut self, dims: Dimensions) {
        self.dims = dims;
    }

    /// 第一层节点的填充色（按节点号循环取用）；空表时用默认色
    pub fn set_input_colors(&mut self, colors: Vec<Color>) {
        self.input_colors = colors;
    }

    /// 最后一层节点的填充色（按节点号循环取用）；空表时用默认色
    pub fn set_output_colors(&mut self, colors: Vec<Color>) {
        self.output_colors = colors;
    }

    /// 把某槽位画成省略号（不参与连线）
    pub fn add_ellipsis(&mut self, layer_idx: usize, node_idx: usize) {
        self.ellipsis.insert((layer_idx, node_idx));
    }

    /// 添加指向第一层某节点的输入箭头；同一节点号重复添加时覆盖
    pub fn add_input_arrow(&mut self, node_idx: usize, arrow: Arrow) {
        self.input_arrows.insert(node_idx, arrow);
    }

    /// 添加从最后一层某节点引出的输出箭头；同一节点号重复添加时覆盖
    pub fn add_output_arrow(&mut self, node_idx: usize, arrow: Arrow) {
        self.output_arrows.insert(node_idx, arrow);
    }

    /// 图例条目（绘制时会过滤掉未被输入/输出节点用到的颜色）
    pub fn set_color_explanations(&mut self, explanations: Vec<(Color, String)>) {
        self.color_explanations = explanations;
    }

    /// 一次性套用选择器给出的标注集合
    pub fn apply_annotations(&mut self, set: AnnotationSet) {
        self.input_arrows = set.input_arrows;
        self.output_arrows = set.output_arrows;
        self.input_colors = set.input_colors;
        self.output_colors = set.output_colors;
        self.color_explanations = set.color_explanations;
    }

    // ========== 查询 ==========

    pub fn dimensions(&self) -> &Dimensions {
        &self.dims
    }

    pub fn input_arrows(&self) -> &BTreeMap<usize, Arrow> {
        &self.input_arrows
    }

    pub fn output_arrows(&self) -> &BTreeMap<usize, Arrow> {
        &self.output_arrows
    }

    /// 计算当前示意图的坐标表
    pub fn layout(&self) -> Layout {
        Layout::compute(&self.layer_sizes, &self.ellipsis, &self.dims)
    }

    // ========== 绘制 ==========

    /// 把整张示意图画到画布上
    pub fn draw(&self, canvas: &mut Canvas) {
        if self.layer_sizes.is_empty() {
            return;
        }
        let layout = self.layout();
        let n_layers = self.layer_sizes.len();

        self.draw_nodes(canvas, &layout, n_layers);
        self.draw_layer_labels(canvas, &layout);
        self.draw_edges(canvas, &layout, n_layers);
        self.draw_input_arrows(canvas);
        self.draw_output_arrows(canvas, n_layers);
        self.draw_legend(canvas, &layout);
    }

    /// 节点圆圈与省略号
    fn draw_nodes(&self, canvas: &mut Canvas, layout: &Layout, n_layers: usize) {
        for (layer_idx, &n_nodes) in self.layer_sizes.iter().enumerate() {
            for node_idx in 0..n_nodes {
                let Some(coord) = layout.coord(layer_idx, node_idx) else {
                    continue;
                };
                if !coord.is_node {
                    // 竖排三点即省略号
                    canvas.text(
                        coord.x,
                        coord.y,
                        "...",
                        ELLIPSIS_FONT_SIZE,
                        Color::Black,
                        HAlign::Center,
                        VAlign::Center,
                        Rotation::Ccw90,
                        TEXT_ZORDER,
                    );
                    continue;
                }
                let color = self.node_color(layer_idx, node_idx, n_layers);
                canvas.circle(
                    coord.x,
                    coord.y,
                    self.dims.radius,
                    color,
                    Color::Black,
                    NODE_ZORDER,
                );
            }
        }
    }

    /// 节点填充色规则：首层用输入色表、末层用输出色表（循环取用），
    /// 未提供色表时分别退化为浅蓝/鲑红，隐藏层一律浅灰
    fn node_color(&self, layer_idx: usize, node_idx: usize, n_layers: usize) -> Color {
        if layer_idx == 0 && !self.input_colors.is_empty() {
            self.input_colors[node_idx % self.input_colors.len()]
        } else if layer_idx == 0 {
            Color::LightBlue
        } else if layer_idx == n_layers - 1 && !self.output_colors.is_empty() {
            self.output_colors[node_idx % self.output_colors.len()]
        } else if layer_idx == n_layers - 1 {
            Color::Salmon
        } else {
            Color::LightGray
        }
    }

    /// 每层真实节点数的竖排标注，统一放在最高层上方
    fn draw_layer_labels(&self, canvas: &mut Canvas, layout: &Layout) {
        for (layer_idx, &n_real) in self.real_layers.iter().enumerate() {
            canvas.text(
                layer_idx as f64 * self.dims.h_spacing,
                layout.max_top_y() + 10.0,
                &format!("n_nodes={n_real}"),
                LABEL_FONT_SIZE,
                Color::Black,
                HAlign::Center,
                VAlign::Bottom,
                Rotation::Ccw90,
                TEXT_ZORDER,
            );
        }
    }

    /// 相邻层间的连线；任一端是省略号槽位则跳过
    fn draw_edges(&self, canvas: &mut Canvas, layout: &Layout, n_layers: usize) {
        for layer_idx in 0..n_layers.saturating_sub(1) {
            for i in 0..self.layer_sizes[layer_idx] {
                for j in 0..self.layer_sizes[layer_idx + 1] {
                    let (Some(a), Some(b)) =
                        (layout.coord(layer_idx, i), layout.coord(layer_idx + 1, j))
                    else {
                        continue;
                    };
                    if a.is_node && b.is_node {
                        canvas.line(
                            (a.x, a.y),
                            (b.x, b.y),
                            Color::Gray,
                            1.0,
                            EDGE_ZORDER,
                        );
                    }
                }
            }
        }
    }

    /// 从图外指向第一层节点的输入箭头（带文字标注）
    fn draw_input_arrows(&self, canvas: &mut Canvas) {
        if self.input_arrows.is_empty() {
            return;
        }
        let top_y = Layout::layer_top_y(self.layer_sizes[0], self.dims.v_spacing);
        for (&node_idx, arrow) in &self.input_arrows {
            let y = top_y - node_idx as f64 * self.dims.v_spacing;
            let x_head = self.dims.arrowhead_offset_x;
            self.draw_arrow(canvas, self.dims.arrow_start_x, x_head, y, &arrow.label);
        }
    }

    /// 从最后一层节点引出的输出箭头，长度与输入箭头一致
    fn draw_output_arrows(&self, canvas: &mut Canvas, n_layers: usize) {
        if self.output_arrows.is_empty() {
            return;
        }
        let Some(&last_size) = self.layer_sizes.last() else {
            return;
        };
        let top_y = Layout::layer_top_y(last_size, self.dims.v_spacing);
        let start_x = (n_layers - 1) as f64 * self.dims.h_spacing;
        let end_x = start_x + self.dims.arrow_start_x.abs();
        for (&node_idx, arrow) in &self.output_arrows {
            let y = top_y - node_idx as f64 * self.dims.v_spacing;
            self.draw_arrow(canvas, start_x, end_x, y, &arrow.label);
        }
    }

    /// 水平箭头：线段 + 头部标记 + 居中的上方文字
    fn draw_arrow(&self, canvas: &mut Canvas, x_from: f64, x_to: f64, y: f64, label: &str) {
        canvas.line((x_from, y), (x_to, y), Color::Black, 2.0, ARROW_ZORDER);
        canvas.marker(x_to, y, ARROWHEAD_SIZE, Color::Black, NODE_ZORDER);
        if !label.is_empty() {
            canvas.text(
                (x_from + x_to) / 2.0,
                y,
                label,
                LABEL_FONT_SIZE,
                Color::Black,
                HAlign::Center,
                VAlign::Bottom,
                Rotation::Horizontal,
                TEXT_ZORDER,
            );
        }
    }

    /// 颜色图例：只列出输入/输出色表里真正出现的颜色，逐行下排
    fn draw_legend(&self, canvas: &mut Canvas, layout: &Layout) {
        if self.color_explanations.is_empty() {
            return;
        }
        let used: HashSet<Color> = self
            .input_colors
            .iter()
            .chain(self.output_colors.iter())
            .copied()
            .collect();

        let mut z = 0usize;
        for (color, text) in &self.color_explanations {
            if !used.contains(color) {
                continue;
            }
            let y = -layout.max_top_y()
                - 3.0 * self.dims.radius
                - LEGEND_LINE_STEP * z as f64;
            canvas.text(
                -4.0,
                y,
                &format!("{}: {}", color.name(), text),
                LEGEND_FONT_SIZE,
                *color,
                HAlign::Left,
                VAlign::Bottom,
                Rotation::Horizontal,
                TEXT_ZORDER,
            );
            z += 1;
        }
    }
}
