use crate::caffe::{CaffeError, DummyDataParameter, FillerParameter};
use crate::prototxt::parse;

fn dummy(text: &str) -> Result<DummyDataParameter, CaffeError> {
    DummyDataParameter::from_message(&parse(text).unwrap(), "D")
}

#[test]
fn test_resolve_single_filler_and_shape() {
    let param = dummy("data_filler { value: 3 } shape { dim: 2 dim: 3 }").unwrap();
    assert_eq!(
        param.resolve_fillers(2, "D").unwrap(),
        vec![FillerParameter::Constant { value: 3. }; 2]
    );
    assert_eq!(
        param.resolve_shapes(2, "D").unwrap(),
        vec![vec![2, 3], vec![2, 3]]
    );
}

#[test]
fn test_resolve_per_top() {
    let param = dummy(
        "data_filler { value: 1 } data_filler { value: 2 }
         shape { dim: 1 } shape { dim: 4 dim: 5 }",
    )
    .unwrap();
    assert_eq!(
        param.resolve_fillers(2, "D").unwrap(),
        vec![
            FillerParameter::Constant { value: 1. },
            FillerParameter::Constant { value: 2. }
        ]
    );
    assert_eq!(
        param.resolve_shapes(2, "D").unwrap(),
        vec![vec![1], vec![4, 5]]
    );
}

#[test]
fn test_no_filler_means_zero_constant() {
    let param = dummy("shape { dim: 2 }").unwrap();
    assert_eq!(
        param.resolve_fillers(1, "D").unwrap(),
        vec![FillerParameter::Constant { value: 0. }]
    );
}

#[test]
fn test_legacy_dims() {
    let param = dummy("num: 1 channels: 2 channels: 3 height: 4 width: 5").unwrap();
    assert_eq!(
        param.resolve_shapes(2, "D").unwrap(),
        vec![vec![1, 2, 4, 5], vec![1, 3, 4, 5]]
    );

    // 旧式写法缺少某一维
    let param = dummy("num: 1 channels: 2 height: 4").unwrap();
    assert_eq!(
        param.resolve_shapes(1, "D").unwrap_err(),
        CaffeError::InvalidDummyData {
            layer: "D".to_string(),
            reason: "width的个数须为1或top个数1，实际为0".to_string(),
        }
    );
}

#[test]
fn test_count_mismatch() {
    let param = dummy(
        "data_filler { value: 1 } data_filler { value: 2 } shape { dim: 1 } shape { dim: 1 }",
    )
    .unwrap();
    assert_eq!(
        param.resolve_fillers(3, "D").unwrap_err(),
        CaffeError::InvalidDummyData {
            layer: "D".to_string(),
            reason: "data_filler的个数须为0、1或top个数3，实际为2".to_string(),
        }
    );
    assert_eq!(
        param.resolve_shapes(3, "D").unwrap_err(),
        CaffeError::InvalidDummyData {
            layer: "D".to_string(),
            reason: "shape的个数须为1或top个数3，实际为2".to_string(),
        }
    );
    assert!(dummy("").unwrap().resolve_shapes(1, "D").is_err());
}

#[test]
fn test_shape_and_legacy_are_exclusive() {
    assert_eq!(
        dummy("num: 1 shape { dim: 1 }").unwrap_err(),
        CaffeError::InvalidDummyData {
            layer: "D".to_string(),
            reason: "不能同时指定shape与旧式的num/channels/height/width".to_string(),
        }
    );
}

#[test]
fn test_negative_dim_is_rejected() {
    assert!(matches!(
        dummy("shape { dim: -2 }").unwrap_err(),
        CaffeError::Prototxt(_)
    ));
}
