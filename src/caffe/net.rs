use super::dummy_data::DummyDataParameter;
use super::eltwise::EltwiseParameter;
use super::error::CaffeError;
use crate::prototxt::{self, EnumValue, Message};

/// 单个层的描述
#[derive(Debug, Clone, PartialEq)]
pub struct LayerParameter {
    pub name: String,
    /// 层类型，如"DummyData"、"Eltwise"（旧式`layers`的枚举类型会被转换为同样的写法）
    pub layer_type: String,
    pub bottoms: Vec<String>,
    pub tops: Vec<String>,
    pub dummy_data: Option<DummyDataParameter>,
    pub eltwise: Option<EltwiseParameter>,
    /// 该层在prototxt中的起始行号
    pub line: usize,
}

/// 整个网络的描述
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NetParameter {
    pub name: Option<String>,
    pub layers: Vec<LayerParameter>,
    /// 网络级的外部输入（`input:`），本crate无法为其提供数据
    pub inputs: Vec<String>,
}

impl NetParameter {
    /// 直接从prototxt文本构建
    pub fn parse(text: &str) -> Result<Self, CaffeError> {
        Self::from_message(&prototxt::parse(text)?)
    }

    pub fn from_message(msg: &Message) -> Result<Self, CaffeError> {
        let mut layers = Vec::new();
        for field in msg.fields() {
            let is_legacy = match field.name.as_str() {
                "layer" => false,
                "layers" => true,
                _ => continue,
            };
            let prototxt::Value::Message(layer_msg) = &field.value else {
                return Err(prototxt::PrototxtError::FieldType {
                    field: field.name.clone(),
                    line: field.line,
                    expected: "消息".to_string(),
                    found: "标量".to_string(),
                }
                .into());
            };
            layers.push(LayerParameter::from_message(layer_msg, field.line, is_legacy)?);
        }

        Ok(Self {
            name: msg.get_str("name")?,
            layers,
            inputs: msg.get_strs("input")?,
        })
    }
}

impl LayerParameter {
    fn from_message(msg: &Message, line: usize, is_legacy: bool) -> Result<Self, CaffeError> {
        let context = format!("第{line}行的层");
        let name = msg.get_str("name")?.ok_or_else(|| CaffeError::MissingField {
            context: context.clone(),
            field: "name".to_string(),
        })?;

        let layer_type = if is_legacy {
            msg.get_enum("type")?.map(legacy_type_name)
        } else {
            msg.get_str("type")?
        }
        .ok_or_else(|| CaffeError::MissingField {
            context: format!("层`{name}`"),
            field: "type".to_string(),
        })?;

        let dummy_data = msg
            .get_message("dummy_data_param")?
            .map(|m| DummyDataParameter::from_message(m, &name))
            .transpose()?;
        let eltwise = msg
            .get_message("eltwise_param")?
            .map(|m| EltwiseParameter::from_message(m, &name))
            .transpose()?;

        Ok(Self {
            bottoms: msg.get_strs("bottom")?,
            tops: msg.get_strs("top")?,
            name,
            layer_type,
            dummy_data,
            eltwise,
            line,
        })
    }
}

/// 旧式`V1LayerParameter.LayerType`枚举到新式类型名的映射，只列出本crate识别的类型
fn legacy_type_name(value: EnumValue) -> String {
    match value {
        EnumValue::Name(name) => match name.as_str() {
            "DUMMY_DATA" => "DummyData".to_string(),
            "ELTWISE" => "Eltwise".to_string(),
            _ => name,
        },
        EnumValue::Number(32) => "DummyData".to_string(),
        EnumValue::Number(25) => "Eltwise".to_string(),
        EnumValue::Number(n) => format!("V1LayerType({n})"),
    }
}
