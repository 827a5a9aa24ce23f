use super::add::add_within_tensors;
use crate::errors::Operator;
use crate::tensor::Tensor;
use std::ops::AddAssign;

impl AddAssign for Tensor {
    fn add_assign(&mut self, other: Self) {
        *self = add_within_tensors(self, &other, Operator::AddAssign);
    }
}

impl<'a> AddAssign<&'a Self> for Tensor {
    fn add_assign(&mut self, other: &'a Self) {
        *self = add_within_tensors(self, other, Operator::AddAssign);
    }
}

impl AddAssign<f32> for Tensor {
    fn add_assign(&mut self, scalar: f32) {
        self.data += scalar;
    }
}
