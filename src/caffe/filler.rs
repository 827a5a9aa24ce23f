use super::error::CaffeError;
use crate::prototxt::{EnumValue, Message};

/// xavier/msra填充时用于归一化方差的扇入/扇出选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VarianceNorm {
    #[default]
    FanIn,
    FanOut,
    Average,
}

/// Caffe的`FillerParameter`，只保留伪数据层用得到的填充器
#[derive(Debug, Clone, PartialEq)]
pub enum FillerParameter {
    Constant { value: f32 },
    Uniform { min: f32, max: f32 },
    Gaussian { mean: f32, std: f32 },
    Xavier { variance_norm: VarianceNorm },
    Msra { variance_norm: VarianceNorm },
}

impl Default for FillerParameter {
    /// 与caffe.proto一致：未指定填充器时按值为0的常量填充
    fn default() -> Self {
        Self::Constant { value: 0. }
    }
}

impl FillerParameter {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Constant { .. } => "constant",
            Self::Uniform { .. } => "uniform",
            Self::Gaussian { .. } => "gaussian",
            Self::Xavier { .. } => "xavier",
            Self::Msra { .. } => "msra",
        }
    }

    pub fn from_message(msg: &Message, layer: &str) -> Result<Self, CaffeError> {
        let filler_type = msg.get_str("type")?.unwrap_or_else(|| "constant".to_string());
        let invalid = |reason: String| CaffeError::InvalidFiller {
            layer: layer.to_string(),
            reason,
        };

        match filler_type.as_str() {
            "constant" => Ok(Self::Constant {
                value: msg.get_f32("value")?.unwrap_or(0.),
            }),
            "uniform" => {
                let filler = Self::Uniform {
                    min: msg.get_f32("min")?.unwrap_or(0.),
                    max: msg.get_f32("max")?.unwrap_or(1.),
                };
                filler.validate(layer)?;
                Ok(filler)
            }
            "gaussian" => {
                let filler = Self::Gaussian {
                    mean: msg.get_f32("mean")?.unwrap_or(0.),
                    std: msg.get_f32("std")?.unwrap_or(1.),
                };
                filler.validate(layer)?;
                // sparse缺省为-1，即不稀疏
                if let Some(sparse) = msg.get_f32("sparse")? {
                    if sparse >= 0. {
                        return Err(invalid("不支持稀疏（sparse）的gaussian填充".to_string()));
                    }
                }
                Ok(filler)
            }
            "xavier" => Ok(Self::Xavier {
                variance_norm: parse_variance_norm(msg, layer)?,
            }),
            "msra" => Ok(Self::Msra {
                variance_norm: parse_variance_norm(msg, layer)?,
            }),
            other => Err(CaffeError::UnknownFillerType {
                layer: layer.to_string(),
                filler_type: other.to_string(),
            }),
        }
    }

    /// 检查随机填充器的参数能否用于采样
    pub fn validate(&self, layer: &str) -> Result<(), CaffeError> {
        let reason = match *self {
            Self::Uniform { min, max } if !min.is_finite() || !max.is_finite() || min > max => {
                format!("uniform填充器须满足有限的min≤max，实际min={min}，max={max}")
            }
            Self::Uniform { min, max } if !(max - min).is_finite() => {
                format!("uniform填充器的区间跨度max-min超出f32范围，实际min={min}，max={max}")
            }
            Self::Gaussian { mean, std } if !mean.is_finite() || !std.is_finite() || std < 0. => {
                format!("gaussian填充器须满足有限的mean且std≥0，实际mean={mean}，std={std}")
            }
            _ => return Ok(()),
        };
        Err(CaffeError::InvalidFiller {
            layer: layer.to_string(),
            reason,
        })
    }
}

fn parse_variance_norm(msg: &Message, layer: &str) -> Result<VarianceNorm, CaffeError> {
    let norm = match msg.get_enum("variance_norm")? {
        None => VarianceNorm::FanIn,
        Some(EnumValue::Name(name)) => match name.as_str() {
            "FAN_IN" => VarianceNorm::FanIn,
            "FAN_OUT" => VarianceNorm::FanOut,
            "AVERAGE" => VarianceNorm::Average,
            _ => return Err(unknown_variance_norm(layer, &name)),
        },
        Some(EnumValue::Number(n)) => match n {
            0 => VarianceNorm::FanIn,
            1 => VarianceNorm::FanOut,
            2 => VarianceNorm::Average,
            _ => return Err(unknown_variance_norm(layer, &n.to_string())),
        },
    };
    Ok(norm)
}

fn unknown_variance_norm(layer: &str, value: &str) -> CaffeError {
    CaffeError::InvalidFiller {
        layer: layer.to_string(),
        reason: format!("未知的variance_norm`{value}`"),
    }
}
