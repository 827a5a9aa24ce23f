use super::error::CaffeError;
use crate::prototxt::{EnumValue, Message};
use std::fmt;

/// caffe.proto中`EltwiseParameter.EltwiseOp`的取值（PROD = 0; SUM = 1; MAX = 2）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EltwiseOp {
    Prod,
    #[default]
    Sum,
    Max,
}

impl fmt::Display for EltwiseOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Prod => "PROD",
            Self::Sum => "SUM",
            Self::Max => "MAX",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EltwiseParameter {
    pub operation: EltwiseOp,
    /// 仅对SUM有效的逐输入系数，为空表示全为1
    pub coeffs: Vec<f32>,
}

impl EltwiseParameter {
    pub fn from_message(msg: &Message, layer: &str) -> Result<Self, CaffeError> {
        let unknown = |operation: String| CaffeError::UnknownEltwiseOperation {
            layer: layer.to_string(),
            operation,
        };
        let operation = match msg.get_enum("operation")? {
            None => EltwiseOp::Sum,
            Some(EnumValue::Name(name)) => match name.as_str() {
                "PROD" => EltwiseOp::Prod,
                "SUM" => EltwiseOp::Sum,
                "MAX" => EltwiseOp::Max,
                _ => return Err(unknown(name)),
            },
            Some(EnumValue::Number(n)) => match n {
                0 => EltwiseOp::Prod,
                1 => EltwiseOp::Sum,
                2 => EltwiseOp::Max,
                _ => return Err(unknown(n.to_string())),
            },
        };

        let coeffs = msg.get_f32s("coeff")?;
        if !coeffs.is_empty() && operation != EltwiseOp::Sum {
            return Err(CaffeError::InvalidEltwise {
                layer: layer.to_string(),
                reason: format!("只有SUM运算接受系数（coeff），当前运算为{operation}"),
            });
        }

        Ok(Self { operation, coeffs })
    }
}
