use serde::{Deserialize, Serialize};

/// 画布用的命名颜色
///
/// 示意图只需要少量固定颜色（节点填充、连线、文字），
/// 故用枚举而非任意RGB值，便于图例按颜色做相等比较。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    LightBlue,
    Salmon,
    LightGray,
    Gray,
    Black,
    White,
}

impl Color {
    /// 颜色对应的RGB值（与matplotlib同名颜色一致）
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            Self::Red => [255, 0, 0],
            Self::Blue => [0, 0, 255],
            Self::LightBlue => [173, 216, 230],
            Self::Salmon => [250, 128, 114],
            Self::LightGray => [211, 211, 211],
            Self::Gray => [128, 128, 128],
            Self::Black => [0, 0, 0],
            Self::White => [255, 255, 255],
        }
    }

    /// 颜色名（图例文字用）
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::LightBlue => "lightblue",
            Self::Salmon => "salmon",
            Self::LightGray => "lightgray",
            Self::Gray => "gray",
            Self::Black => "black",
            Self::White => "white",
        }
    }

    /// RGB归一化到[0,1]（PDF内容流用）
    pub fn rgb_f64(self) -> [f64; 3] {
        let [r, g, b] = self.rgb();
        [
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        ]
    }
}
