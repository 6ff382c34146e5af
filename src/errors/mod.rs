use thiserror::Error;

/// 绘图相关错误类型
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("画布为空，没有可导出的图元")]
    EmptyScene,
    #[error(
        "请提供不含后缀的基础路径，例如\"neural_net_drawing\"而不是\"{0}\"，库会自动生成.jpg和.pdf文件"
    )]
    BasePathHasExtension(String),
    #[error("文件读写失败: {0}")]
    Io(#[from] std::io::Error),
    #[error("图像编码失败: {0}")]
    Image(#[from] image::ImageError),
    #[error("配置解析失败: {0}")]
    Config(#[from] serde_json::Error),
}
