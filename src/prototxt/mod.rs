/*
 * @Description  : prototxt（protobuf文本格式）的解析。
 *                 只负责把文本解析为通用的`Message`树，不关心Caffe的具体字段含义；
 *                 Caffe层面的字段提取见`crate::caffe`。
 */

mod error;
mod lexer;
mod message;
mod parser;

pub use error::PrototxtError;
pub use message::{EnumValue, Field, Message, Scalar, Value};
pub use parser::{MAX_NESTING_DEPTH, parse};

#[cfg(test)]
mod tests;
