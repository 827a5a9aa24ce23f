use std::path::Path;

use ndarray::{Array, IxDyn};
use ndarray_npy::{read_npy, write_npy};

use super::Tensor;
use crate::errors::TensorError;

// 以NumPy的`.npy`格式保存和加载张量，便于和Caffe/NumPy侧的结果直接比对
impl Tensor {
    /// 将单个Tensor写入本地`.npy`文件
    pub fn save_npy<P: AsRef<Path>>(&self, path: P) -> Result<(), TensorError> {
        write_npy(path, &self.data).map_err(|e| TensorError::Io(e.to_string()))
    }
    /// 从本地`.npy`文件加载单个Tensor
    pub fn load_npy<P: AsRef<Path>>(path: P) -> Result<Self, TensorError> {
        let data: Array<f32, IxDyn> = read_npy(path).map_err(|e| TensorError::Io(e.to_string()))?;
        Ok(Self { data })
    }
}
