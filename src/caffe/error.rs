use crate::prototxt::PrototxtError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CaffeError {
    #[error(transparent)]
    Prototxt(#[from] PrototxtError),

    #[error("{context}缺少必需的字段`{field}`")]
    MissingField { context: String, field: String },

    #[error("层`{layer}`：未知的填充器类型`{filler_type}`")]
    UnknownFillerType { layer: String, filler_type: String },
    #[error("层`{layer}`：填充器参数无效：{reason}")]
    InvalidFiller { layer: String, reason: String },

    #[error("层`{layer}`：DummyData参数无效：{reason}")]
    InvalidDummyData { layer: String, reason: String },

    #[error("层`{layer}`：未知的Eltwise运算`{operation}`")]
    UnknownEltwiseOperation { layer: String, operation: String },
    #[error("层`{layer}`：Eltwise参数无效：{reason}")]
    InvalidEltwise { layer: String, reason: String },
}
