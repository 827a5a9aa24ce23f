/*
 * @Description  : 张量的加法测试：纯数与张量相加，以及形状严格一致的张量逐元素相加
 */

use crate::assert_panic;
use crate::tensor::Tensor;

#[test]
fn test_add_with_or_without_ownership() {
    let tensor1 = Tensor::new(&[1., 2., 3.], &[3]);
    let tensor2 = Tensor::new(&[4., 5., 6.], &[3]);

    // f32 + 不带引用的张量
    let result = 5. + tensor1.clone();
    assert_eq!(result, Tensor::new(&[6., 7., 8.], &[3]));

    // f32 + 带引用的张量
    let result = 5. + &tensor1;
    assert_eq!(result, Tensor::new(&[6., 7., 8.], &[3]));

    // 带引用的张量 + f32
    let result = &tensor1 + 5.;
    assert_eq!(result, Tensor::new(&[6., 7., 8.], &[3]));

    // 不带引用的张量 + 带引用的张量
    let result = tensor1.clone() + &tensor2;
    assert_eq!(result, Tensor::new(&[5., 7., 9.], &[3]));

    // 带引用的张量 + 带引用的张量
    let result = &tensor1 + &tensor2;
    assert_eq!(result, Tensor::new(&[5., 7., 9.], &[3]));
}

#[test]
fn test_add_assign() {
    let mut tensor = Tensor::new_constant(1., &[2, 3]);
    tensor += &Tensor::new_constant(3., &[2, 3]);
    tensor += Tensor::new_constant(-2., &[2, 3]);
    assert_eq!(tensor, Tensor::new_constant(2., &[2, 3]));

    tensor += 0.5;
    assert_eq!(tensor, Tensor::new_constant(2.5, &[2, 3]));
}

#[test]
fn test_add_shape_mismatch() {
    let tensor1 = Tensor::new(&[1., 2., 3., 4.], &[2, 2]);
    let tensor2 = Tensor::new(&[1., 2., 3., 4.], &[4]);
    assert_panic!(
        &tensor1 + &tensor2,
        "形状不一致，故无法相加：第一个张量的形状为[2, 2]，第二个张量的形状为[4]"
    );

    let mut tensor3 = tensor1.clone();
    assert_panic!(
        tensor3 += &tensor2,
        "形状不一致，故无法自相加：第一个张量的形状为[2, 2]，第二个张量的形状为[4]"
    );
}
