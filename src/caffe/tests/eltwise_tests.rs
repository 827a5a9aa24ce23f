use crate::caffe::{CaffeError, EltwiseOp, EltwiseParameter};
use crate::prototxt::parse;

fn eltwise(text: &str) -> Result<EltwiseParameter, CaffeError> {
    EltwiseParameter::from_message(&parse(text).unwrap(), "E")
}

#[test]
fn test_eltwise_operation() {
    assert_eq!(eltwise("").unwrap().operation, EltwiseOp::Sum);
    assert_eq!(eltwise("operation: PROD").unwrap().operation, EltwiseOp::Prod);
    assert_eq!(eltwise("operation: 2").unwrap().operation, EltwiseOp::Max);
    assert_eq!(eltwise("operation: 1").unwrap().operation, EltwiseOp::Sum);
    assert_eq!(EltwiseOp::Max.to_string(), "MAX");
}

#[test]
fn test_eltwise_coeffs() {
    let param = eltwise("operation: SUM coeff: 1 coeff: -1").unwrap();
    assert_eq!(param.coeffs, vec![1., -1.]);
    assert!(eltwise("").unwrap().coeffs.is_empty());
}

#[test]
fn test_eltwise_errors() {
    assert_eq!(
        eltwise("operation: AVG").unwrap_err(),
        CaffeError::UnknownEltwiseOperation {
            layer: "E".to_string(),
            operation: "AVG".to_string(),
        }
    );
    assert_eq!(
        eltwise("operation: PROD coeff: 2").unwrap_err(),
        CaffeError::InvalidEltwise {
            layer: "E".to_string(),
            reason: "只有SUM运算接受系数（coeff），当前运算为PROD".to_string(),
        }
    );
}
