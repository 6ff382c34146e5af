//! # Only Plot
//!
//! `only_plot`是`only_torch`系列的配套小工具，用于绘制前馈神经网络的
//! 层级结构示意图：按层排布节点圆圈、画出层间连线，支持输入/输出箭头标注、
//! 省略号占位（压缩显示过宽的层）与颜色图例，最终导出`.jpg`与`.pdf`静态图片。
//!
//! 本crate只画拓扑结构与文字标注，不涉及任何训练、推理或数值计算。

pub mod canvas;
pub mod diagram;
pub mod errors;
pub mod utils;

pub use canvas::{Canvas, Color, PlotOutput};
pub use diagram::{Arrow, Dimensions, NetworkDiagram, SimConfig, select_annotation_parameters};
pub use errors::PlotError;
