use crate::caffe::{CaffeError, EltwiseOp};
use crate::nn::GraphError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("读取文件`{path}`失败：{source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("配置文件`{path}`无效：{reason}")]
    InvalidConfig { path: String, reason: String },

    #[error(transparent)]
    Caffe(#[from] CaffeError),
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("层`{layer}`：不支持的层类型`{layer_type}`（目前仅支持DummyData与Eltwise）")]
    UnsupportedLayer { layer: String, layer_type: String },
    #[error("层`{layer}`：不支持的Eltwise运算{operation}（目前仅支持SUM）")]
    UnsupportedEltwiseOperation { layer: String, operation: EltwiseOp },
    #[error("层`{layer}`：输入`{bottom}`不是之前任何层的输出")]
    UnknownBottom { layer: String, bottom: String },
    #[error("层名`{0}`重复")]
    DuplicateLayer(String),
    #[error("层`{layer}`：{reason}")]
    InvalidLayer { layer: String, reason: String },

    #[error("找不到名为`{0}`的层或输出")]
    UnknownName(String),
}
