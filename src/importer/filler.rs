use crate::caffe::{FillerParameter, VarianceNorm};
use crate::nn::Graph;
use crate::tensor::Tensor;

/// 按填充器生成给定形状的张量，随机填充使用图的随机数生成器
pub(super) fn fill(filler: &FillerParameter, shape: &[usize], graph: &Graph) -> Tensor {
    let count = shape.iter().product::<usize>();
    match filler {
        FillerParameter::Constant { value } => Tensor::new_constant(*value, shape),
        // 空张量没有可填的元素，也没有有意义的扇入扇出
        _ if count == 0 => Tensor::zeros(shape),
        FillerParameter::Uniform { min, max } => graph
            .inner_mut()
            .with_rng(|rng| Tensor::new_uniform_with_rng(*min, *max, shape, rng)),
        FillerParameter::Gaussian { mean, std } => graph
            .inner_mut()
            .with_rng(|rng| Tensor::new_normal_with_rng(*mean, *std, shape, rng)),
        FillerParameter::Xavier { variance_norm } => {
            let scale = (3. / fan(shape, *variance_norm)).sqrt();
            graph
                .inner_mut()
                .with_rng(|rng| Tensor::new_uniform_with_rng(-scale, scale, shape, rng))
        }
        FillerParameter::Msra { variance_norm } => {
            let std = (2. / fan(shape, *variance_norm)).sqrt();
            graph
                .inner_mut()
                .with_rng(|rng| Tensor::new_normal_with_rng(0., std, shape, rng))
        }
    }
}

/// Caffe的约定：fan_in = count / shape[0]，fan_out = count / shape[1]。
/// 调用方须保证元素个数不为0
pub(super) fn fan(shape: &[usize], variance_norm: VarianceNorm) -> f32 {
    let count = shape.iter().product::<usize>();
    let fan_in = shape.first().map_or(count, |&n| count / n);
    let fan_out = shape.get(1).map_or(count, |&n| count / n);
    match variance_norm {
        VarianceNorm::FanIn => fan_in as f32,
        VarianceNorm::FanOut => fan_out as f32,
        VarianceNorm::Average => (fan_in + fan_out) as f32 / 2.,
    }
}
