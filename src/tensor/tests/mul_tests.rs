use crate::tensor::Tensor;

#[test]
fn test_mul_scalar() {
    let tensor = Tensor::new(&[1., -2., 3.], &[1, 3]);

    assert_eq!(&tensor * 2., Tensor::new(&[2., -4., 6.], &[1, 3]));
    assert_eq!(2. * &tensor, Tensor::new(&[2., -4., 6.], &[1, 3]));
    assert_eq!(tensor.clone() * -1., Tensor::new(&[-1., 2., -3.], &[1, 3]));
    assert_eq!(0. * tensor, Tensor::zeros(&[1, 3]));
}
