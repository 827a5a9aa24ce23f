/*
 * @Description  : Caffe模型描述（NetParameter/LayerParameter等）的类型化视图。
 *                 从`prototxt::Message`中提取本crate关心的字段，默认值与Caffe的caffe.proto一致。
 */

mod dummy_data;
mod eltwise;
mod error;
mod filler;
mod net;

pub use dummy_data::{DummyDataParameter, LegacyDims};
pub use eltwise::{EltwiseOp, EltwiseParameter};
pub use error::CaffeError;
pub use filler::{FillerParameter, VarianceNorm};
pub use net::{LayerParameter, NetParameter};

#[cfg(test)]
mod tests;
