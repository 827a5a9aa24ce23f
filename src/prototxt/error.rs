use thiserror::Error;

/// prototxt解析以及字段取值时的错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrototxtError {
    // 词法
    #[error("第{line}行第{column}列：无法识别的字符`{found}`")]
    UnexpectedChar {
        line: usize,
        column: usize,
        found: char,
    },
    #[error("第{line}行第{column}列：字符串未闭合")]
    UnterminatedString { line: usize, column: usize },
    #[error("第{line}行第{column}列：无效的转义序列`\\{found}`")]
    InvalidEscape {
        line: usize,
        column: usize,
        found: char,
    },

    // 语法
    #[error("第{line}行第{column}列：期望{expected}，实际得到{found}")]
    UnexpectedToken {
        line: usize,
        column: usize,
        expected: String,
        found: String,
    },
    #[error("第{line}行第{column}列：子消息嵌套超过{limit}层")]
    NestingTooDeep {
        line: usize,
        column: usize,
        limit: usize,
    },
    #[error("第{line}行第{column}列：不支持扩展字段`[{name}]`")]
    ExtensionNotSupported {
        line: usize,
        column: usize,
        name: String,
    },

    // 字段取值
    #[error("字段`{field}`（第{line}行）类型不符：期望{expected}，实际为{found}")]
    FieldType {
        field: String,
        line: usize,
        expected: String,
        found: String,
    },
    #[error("字段`{field}`（第{line}行）的值`{value}`超出范围：{reason}")]
    FieldRange {
        field: String,
        line: usize,
        value: String,
        reason: String,
    },
}
