/*
 * @Description  : prototxt解析后的通用消息树，以及按字段名取值的类型化访问接口。
 *                 与protobuf文本格式一致：对非重复（singular）字段取值时，若字段出现了多次，以最后一次为准。
 */

use super::error::PrototxtError;
use std::fmt;

/// 一条消息（即一对`{}`之间的内容，或整个文件）
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Message {
    fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub value: Value,
    /// 字段名所在的行号（从1开始），用于报错
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Message(Message),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// 数字的原始文本
    Number(String),
    /// 未加引号的标识符，如枚举值`SUM`或`true`
    Ident(String),
    Str(String),
}

/// 枚举字段的值：protobuf文本格式允许用名字或整数值表示
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumValue {
    Name(String),
    Number(i64),
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{name}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl Value {
    fn kind_name(&self) -> String {
        match self {
            Self::Scalar(scalar) => scalar.kind_name(),
            Self::Message(_) => "消息".to_string(),
        }
    }
}

impl Scalar {
    fn kind_name(&self) -> String {
        match self {
            Self::Number(raw) => format!("数字`{raw}`"),
            Self::Ident(raw) => format!("标识符`{raw}`"),
            Self::Str(raw) => format!("字符串\"{raw}\""),
        }
    }

    /// 按浮点数解析。支持`inf`/`nan`、`f`后缀、十六进制整数
    pub fn as_f64(&self) -> Option<f64> {
        let raw = match self {
            Self::Number(raw) => raw.as_str(),
            Self::Ident(raw) => raw.as_str(),
            Self::Str(_) => return None,
        };
        let (negative, body) = split_sign(raw);
        let lower = body.to_ascii_lowercase();
        let magnitude = match lower.as_str() {
            "inf" | "infinity" => f64::INFINITY,
            "nan" => f64::NAN,
            _ if lower.starts_with("0x") => i64::from_str_radix(&lower[2..], 16).ok()? as f64,
            _ => {
                let trimmed = lower.strip_suffix('f').unwrap_or(&lower);
                // Ident形式的数字只允许inf/nan
                if matches!(self, Self::Ident(_)) {
                    return None;
                }
                trimmed.parse::<f64>().ok()?
            }
        };
        Some(if negative { -magnitude } else { magnitude })
    }

    /// 按整数解析。支持十进制与`0x`十六进制
    pub fn as_i64(&self) -> Option<i64> {
        let Self::Number(raw) = self else {
            return None;
        };
        let (negative, body) = split_sign(raw);
        let lower = body.to_ascii_lowercase();
        let magnitude = match lower.strip_prefix("0x") {
            Some(hex) => i64::from_str_radix(hex, 16).ok()?,
            None => lower.parse::<i64>().ok()?,
        };
        Some(if negative { -magnitude } else { magnitude })
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Ident(raw) => match raw.as_str() {
                "true" | "True" | "t" => Some(true),
                "false" | "False" | "f" => Some(false),
                _ => None,
            },
            Self::Number(raw) => match raw.as_str() {
                "1" => Some(true),
                "0" => Some(false),
                _ => None,
            },
            Self::Str(_) => None,
        }
    }
}

fn split_sign(raw: &str) -> (bool, &str) {
    if let Some(rest) = raw.strip_prefix('-') {
        (true, rest)
    } else {
        (false, raw.strip_prefix('+').unwrap_or(raw))
    }
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// 按出现顺序返回所有同名字段
    pub fn get_all<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Field> + use<'a> {
        let name = name.to_string();
        self.fields.iter().filter(move |f| f.name == name)
    }

    /// 同名字段的最后一次出现
    pub fn last(&self, name: &str) -> Option<&Field> {
        self.fields.iter().rev().find(|f| f.name == name)
    }

    // ========== 子消息 ==========

    pub fn get_message(&self, name: &str) -> Result<Option<&Message>, PrototxtError> {
        self.last(name).map(as_message).transpose()
    }

    pub fn get_messages(&self, name: &str) -> Result<Vec<&Message>, PrototxtError> {
        self.get_all(name).map(as_message).collect()
    }

    // ========== 标量 ==========

    pub fn get_str(&self, name: &str) -> Result<Option<String>, PrototxtError> {
        self.last(name).map(as_str).transpose()
    }

    pub fn get_strs(&self, name: &str) -> Result<Vec<String>, PrototxtError> {
        self.get_all(name).map(as_str).collect()
    }

    pub fn get_f32(&self, name: &str) -> Result<Option<f32>, PrototxtError> {
        self.last(name).map(as_f32).transpose()
    }

    pub fn get_f32s(&self, name: &str) -> Result<Vec<f32>, PrototxtError> {
        self.get_all(name).map(as_f32).collect()
    }

    pub fn get_u64(&self, name: &str) -> Result<Option<u64>, PrototxtError> {
        self.last(name).map(as_u64).transpose()
    }

    pub fn get_u64s(&self, name: &str) -> Result<Vec<u64>, PrototxtError> {
        self.get_all(name).map(as_u64).collect()
    }

    pub fn get_bool(&self, name: &str) -> Result<Option<bool>, PrototxtError> {
        self.last(name).map(as_bool).transpose()
    }

    pub fn get_enum(&self, name: &str) -> Result<Option<EnumValue>, PrototxtError> {
        self.last(name).map(as_enum).transpose()
    }
}

fn type_error(field: &Field, expected: &str) -> PrototxtError {
    PrototxtError::FieldType {
        field: field.name.clone(),
        line: field.line,
        expected: expected.to_string(),
        found: field.value.kind_name(),
    }
}

fn scalar_of<'a>(field: &'a Field, expected: &str) -> Result<&'a Scalar, PrototxtError> {
    match &field.value {
        Value::Scalar(scalar) => Ok(scalar),
        Value::Message(_) => Err(type_error(field, expected)),
    }
}

fn as_message(field: &Field) -> Result<&Message, PrototxtError> {
    match &field.value {
        Value::Message(message) => Ok(message),
        Value::Scalar(_) => Err(type_error(field, "消息")),
    }
}

fn as_str(field: &Field) -> Result<String, PrototxtError> {
    match scalar_of(field, "字符串")? {
        Scalar::Str(s) => Ok(s.clone()),
        _ => Err(type_error(field, "字符串")),
    }
}

fn as_f32(field: &Field) -> Result<f32, PrototxtError> {
    scalar_of(field, "浮点数")?
        .as_f64()
        .map(|v| v as f32)
        .ok_or_else(|| type_error(field, "浮点数"))
}

fn as_u64(field: &Field) -> Result<u64, PrototxtError> {
    let value = scalar_of(field, "整数")?
        .as_i64()
        .ok_or_else(|| type_error(field, "整数"))?;
    u64::try_from(value).map_err(|_| PrototxtError::FieldRange {
        field: field.name.clone(),
        line: field.line,
        value: value.to_string(),
        reason: "须≥0".to_string(),
    })
}

fn as_bool(field: &Field) -> Result<bool, PrototxtError> {
    scalar_of(field, "布尔值")?
        .as_bool()
        .ok_or_else(|| type_error(field, "布尔值"))
}

fn as_enum(field: &Field) -> Result<EnumValue, PrototxtError> {
    match scalar_of(field, "枚举值")? {
        Scalar::Ident(name) => Ok(EnumValue::Name(name.clone())),
        scalar @ Scalar::Number(_) => scalar
            .as_i64()
            .map(EnumValue::Number)
            .ok_or_else(|| type_error(field, "枚举值")),
        Scalar::Str(_) => Err(type_error(field, "枚举值")),
    }
}
