/*
 * @Author       : 老董
 * @Date         : 2026-02-11
 * @Description  : 布局引擎：按层计算节点坐标
 */

use std::collections::{HashMap, HashSet};

/// 布局间距参数
///
/// 与示意图绘制脚本的惯用取值对应：
/// `(v_spacing, h_spacing, radius, arrow_start_x, arrowhead_offset_x)`。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    /// 同层相邻节点的垂直间距
    pub v_spacing: f64,
    /// 相邻层的水平间距
    pub h_spacing: f64,
    /// 节点圆半径
    pub radius: f64,
    /// 输入箭头起点的x坐标（在第一层左侧，为负值）
    pub arrow_start_x: f64,
    /// 箭头头部相对层x坐标的偏移（为负值）
    pub arrowhead_offset_x: f64,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            v_spacing: 12.2,
            h_spacing: 19.0,
            radius: 5.65,
            arrow_start_x: -30.0,
            arrowhead_offset_x: -9.0,
        }
    }
}

/// 单个节点槽位的坐标；`is_node`为false表示该槽位画省略号
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeCoord {
    pub x: f64,
    pub y: f64,
    pub is_node: bool,
}

/// 一次渲染的坐标表：(层号, 节点号) -> 坐标；填好后只读
#[derive(Debug)]
pub struct Layout {
    coords: HashMap<(usize, usize), NodeCoord>,
    max_top_y: f64,
}

impl Layout {
    /// 某层最上方节点的y坐标
    pub fn layer_top_y(n_nodes: usize, v_spacing: f64) -> f64 {
        (n_nodes.saturating_sub(1)) as f64 * v_spacing / 2.0
    }

    /// 计算全部槽位坐标
    ///
    /// 第`l`层位于`x = l * h_spacing`；层内节点垂直居中于0，
    /// 最上节点在`(n-1)*v_spacing/2`，往下每个节点低`v_spacing`。
    pub fn compute(
        layer_sizes: &[usize],
        ellipsis: &HashSet<(usize, usize)>,
        dims: &Dimensions,
    ) -> Self {
        let mut coords = HashMap::new();
        let mut max_top_y = f64::NEG_INFINITY;

        for (layer_idx, &n_nodes) in layer_sizes.iter().enumerate() {
            let layer_x = layer_idx as f64 * dims.h_spacing;
            let top_y = Self::layer_top_y(n_nodes, dims.v_spacing);
            if top_y > max_top_y {
                max_top_y = top_y;
            }

            for node_idx in 0..n_nodes {
                let y = top_y - node_idx as f64 * dims.v_spacing;
                let is_node = !ellipsis.contains(&(layer_idx, node_idx));
                coords.insert(
                    (layer_idx, node_idx),
                    NodeCoord {
                        x: layer_x,
                        y,
                        is_node,
                    },
                );
            }
        }

        Self { coords, max_top_y }
    }

    pub fn coord(&self, layer_idx: usize, node_idx: usize) -> Option<&NodeCoord> {
        self.coords.get(&(layer_idx, node_idx))
    }

    /// 所有层中最高节点的y坐标（全局标注的参考线）
    pub fn max_top_y(&self) -> f64 {
        self.max_top_y
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}
