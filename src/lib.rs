//! # Caffe Importer
//!
//! `caffe_importer`项目用纯rust解析[Caffe](https://caffe.berkeleyvision.org)的`prototxt`文本模型描述，
//! 并将其构建为本crate内的计算图（`nn`模块），随后通过`transformer`模块直接执行。
//!
//! 目前仅支持：常量填充的伪数据（`DummyData`）层，以及逐元素求和（`Eltwise`/`SUM`）层。
//!
//! ```no_run
//! use caffe_importer::importer::parse_prototxt;
//! use caffe_importer::transformer::make_transformer;
//!
//! let op_map = parse_prototxt("demos/sum.prototxt", false).unwrap();
//! let d = op_map.get("D").unwrap().clone();
//! let results = make_transformer().computation(&[d]).unwrap().run().unwrap();
//! results[0].print();
//! ```

pub mod caffe;
pub mod errors;
pub mod importer;
pub mod nn;
pub mod prototxt;
pub mod tensor;
pub mod transformer;
pub mod utils;
