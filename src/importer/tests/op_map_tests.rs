use crate::assert_err;
use crate::importer::{ImportError, ImportOptions, parse_prototxt_str};

const NET: &str = r#"
layer { name: "src" type: "DummyData" top: "x" top: "y"
        dummy_data_param { shape { dim: 1 } } }
layer { name: "sum" type: "Eltwise" bottom: "x" bottom: "y" top: "out" }
"#;

#[test]
fn test_lookup_by_layer_and_blob() {
    let op_map = parse_prototxt_str(NET, &ImportOptions::default()).unwrap();

    assert_eq!(op_map.len(), 2);
    assert_eq!(op_map.names(), &["src", "sum"]);
    assert!(op_map.contains("src"));
    assert!(op_map.contains("out"));
    assert!(!op_map.contains("nothing"));
    assert!(op_map.contains_layer("sum"));
    assert!(!op_map.contains_layer("out"));

    let sum = op_map.get("sum").unwrap();
    let out = op_map.get("out").unwrap();
    assert_eq!(sum.node_id(), out.node_id());
    assert_eq!(op_map.get_layer("src").unwrap().name().unwrap(), "src/x");
    assert_eq!(op_map.get_blob("y").unwrap().name().unwrap(), "src/y");
    assert!(op_map.get_layer("x").is_none());
}

#[test]
fn test_get_all() {
    let op_map = parse_prototxt_str(NET, &ImportOptions::default()).unwrap();

    let ops = op_map.get_all(&["out", "x"]).unwrap();
    assert_eq!(ops.len(), 2);
    assert_eq!(ops[0].name().unwrap(), "sum");
    assert_eq!(ops[1].name().unwrap(), "src/x");

    assert_err!(op_map.get_all(&["out", "nope"]), ImportError::UnknownName("nope"));
}

#[test]
fn test_iter_in_import_order() {
    let op_map = parse_prototxt_str(NET, &ImportOptions::default()).unwrap();
    let pairs: Vec<(String, String)> = op_map
        .iter()
        .map(|(layer, op)| (layer.to_string(), op.name().unwrap()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("src".to_string(), "src/x".to_string()),
            ("sum".to_string(), "sum".to_string())
        ]
    );
    assert_eq!(format!("{op_map:?}"), "OpMap { net_name: None, layers: [\"src\", \"sum\"] }");
}
