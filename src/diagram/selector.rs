/*
 * @Author       : 老董
 * @Date         : 2026-02-11
 * @Description  : 示例标注选择器：按仿真配置挑选箭头与颜色集合
 *
 * 这是演示用的胶水代码：针对一个具体的建模场景硬编码了物理量名与
 * 数组布局，不是可复用的通用逻辑。配置缺失或未识别的开关组合一律
 * 回退到默认集合。
 */

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::Arrow;
use crate::canvas::Color;
use crate::errors::PlotError;

/// 仿真配置（外部协作对象，只读）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimConfig {
    pub problem_data: Option<ProblemData>,
}

/// 仿真问题描述里与标注选择相关的开关
///
/// 各布尔开关用`Option<bool>`表达"属性缺失"：缺任何一个都走回退分支。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProblemData {
    #[serde(default)]
    pub get_only_diagnostic_output_from_forward: Option<bool>,
    #[serde(default)]
    pub use_variable_q_in: Option<bool>,
    #[serde(default)]
    pub mode_13: Option<bool>,
    /// 摄动参数名列表；每个参数在基础输入之后追加一个箭头
    #[serde(default)]
    pub pars_perturb: Vec<String>,
}

impl SimConfig {
    /// 从JSON文件加载配置
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, PlotError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// 选择器的输出：示意图的全套标注
#[derive(Debug, Clone)]
pub struct AnnotationSet {
    pub input_arrows: BTreeMap<usize, Arrow>,
    pub output_arrows: BTreeMap<usize, Arrow>,
    pub input_colors: Vec<Color>,
    pub output_colors: Vec<Color>,
    pub color_explanations: Vec<(Color, String)>,
}

/// 输出层在示例网络中的层号（7层网络的最后一层）
const OUTPUT_LAYER: usize = 5;

/// 按配置开关选择箭头/颜色集合
///
/// - 诊断输出 + 变量q + 模式13：10个基础输入箭头（p_p、q_r、q_p各3个加L）
/// - 诊断输出 + 模式13：7个基础输入箭头（p_p、q_r各3个加L）
/// - 其余组合或配置缺失：回退到10箭头默认集合（无摄动追加）
///
/// 两种已识别分支都会为`pars_perturb`中的每个参数追加一个输入箭头。
pub fn select_annotation_parameters(sim: Option<&SimConfig>) -> AnnotationSet {
    match try_select(sim) {
        Some(set) => set,
        None => fallback_set(),
    }
}

/// 已识别的开关组合；任何属性缺失或组合未识别返回None
fn try_select(sim: Option<&SimConfig>) -> Option<AnnotationSet> {
    let data = sim?.problem_data.as_ref()?;
    let diagnostic = data.get_only_diagnostic_output_from_forward?;
    let mode_13 = data.mode_13?;
    let variable_q = data.use_variable_q_in?;

    let base_labels: &[&str] = if diagnostic && variable_q && mode_13 {
        &[
            "p_p^(1)", "p_p^(2)", "p_p^(3)", "q_r^(1)", "q_r^(2)", "q_r^(3)", "q_p^(1)",
            "q_p^(2)", "q_p^(3)", "L",
        ]
    } else if diagnostic && mode_13 {
        &["p_p^(1)", "p_p^(2)", "p_p^(3)", "q_r^(1)", "q_r^(2)", "q_r^(3)", "L"]
    } else {
        return None;
    };

    let mut input_arrows = base_input_arrows(base_labels);
    let base_len = base_labels.len();
    // 摄动参数逐个追加到基础输入之后
    for (i, par) in data.pars_perturb.iter().enumerate() {
        input_arrows.insert(base_len + i, Arrow::new(0, par.clone()));
    }

    Some(AnnotationSet {
        input_arrows,
        output_arrows: output_arrows_default(),
        input_colors: input_colors_for(base_len),
        output_colors: vec![Color::Blue; 6],
        color_explanations: color_explanations_default(),
    })
}

/// 回退集合：与"诊断输出 + 变量q + 模式13"的基础集合一致，无摄动追加
fn fallback_set() -> AnnotationSet {
    let base_labels = [
        "p_p^(1)", "p_p^(2)", "p_p^(3)", "q_r^(1)", "q_r^(2)", "q_r^(3)", "q_p^(1)", "q_p^(2)",
        "q_p^(3)", "L",
    ];
    AnnotationSet {
        input_arrows: base_input_arrows(&base_labels),
        output_arrows: output_arrows_default(),
        input_colors: input_colors_for(base_labels.len()),
        output_colors: vec![Color::Blue; 6],
        color_explanations: color_explanations_default(),
    }
}

fn base_input_arrows(labels: &[&str]) -> BTreeMap<usize, Arrow> {
    labels
        .iter()
        .enumerate()
        .map(|(idx, &label)| (idx, Arrow::new(0, label)))
        .collect()
}

/// 输入节点色：全红，末位（L）为蓝
fn input_colors_for(n: usize) -> Vec<Color> {
    let mut colors = vec![Color::Red; n];
    if let Some(last) = colors.last_mut() {
        *last = Color::Blue;
    }
    colors
}

fn output_arrows_default() -> BTreeMap<usize, Arrow> {
    ["d_1^(1)", "d_1^(2)", "d_2^(1)", "d_2^(2)", "d_3^(1)", "d_3^(2)"]
        .iter()
        .enumerate()
        .map(|(idx, &label)| (idx, Arrow::new(OUTPUT_LAYER, label)))
        .collect()
}

fn color_explanations_default() -> Vec<(Color, String)> {
    vec![
        (Color::Red, "Explanation for red nodes".to_string()),
        (Color::Blue, "Explanation for blue nodes".to_string()),
    ]
}
