use crate::prototxt::{MAX_NESTING_DEPTH, Message, PrototxtError, Scalar, Value, parse};

const SAMPLE: &str = r#"
name: "Sum"
layer {
  name: "A"
  type: "DummyData"
  top: "A"
  dummy_data_param {
    data_filler { type: "constant" value: 1.0 }
    shape { dim: 2 dim: 3 }
  }
}
"#;

#[test]
fn test_parse_nested_messages() {
    let net = parse(SAMPLE).unwrap();
    assert_eq!(net.fields().len(), 2);
    assert_eq!(net.get_str("name").unwrap().as_deref(), Some("Sum"));

    let layers = net.get_messages("layer").unwrap();
    assert_eq!(layers.len(), 1);
    let layer = layers[0];
    assert_eq!(layer.get_str("type").unwrap().as_deref(), Some("DummyData"));

    let param = layer.get_message("dummy_data_param").unwrap().unwrap();
    let filler = param.get_message("data_filler").unwrap().unwrap();
    assert_eq!(filler.get_f32("value").unwrap(), Some(1.0));
    let shape = param.get_message("shape").unwrap().unwrap();
    assert_eq!(shape.get_u64s("dim").unwrap(), vec![2, 3]);

    // 字段行号
    assert_eq!(layer.last("top").unwrap().line, 6);
}

#[test]
fn test_parse_alternative_syntax() {
    let text = r#"
        shape: { dim: [2, 3, 4] }
        filler < type: 'uniform' min: -1 max: 1 >;
        bottom: "A", bottom: "B"
        note: "abc" 'def'
        empty: []
    "#;
    let msg = parse(text).unwrap();

    let shape = msg.get_message("shape").unwrap().unwrap();
    assert_eq!(shape.get_u64s("dim").unwrap(), vec![2, 3, 4]);

    let filler = msg.get_message("filler").unwrap().unwrap();
    assert_eq!(filler.get_str("type").unwrap().as_deref(), Some("uniform"));
    assert_eq!(filler.get_f32("min").unwrap(), Some(-1.));

    assert_eq!(msg.get_strs("bottom").unwrap(), vec!["A", "B"]);
    assert_eq!(msg.get_str("note").unwrap().as_deref(), Some("abcdef"));
    assert!(!msg.contains("empty"));
}

#[test]
fn test_parse_enum_and_list_of_messages() {
    let msg = parse("eltwise_param { operation: SUM coeff: [1, -0.5] }\nitems: [{a: 1}, {a: 2}]")
        .unwrap();
    let param = msg.get_message("eltwise_param").unwrap().unwrap();
    assert_eq!(
        param.last("operation").unwrap().value,
        Value::Scalar(Scalar::Ident("SUM".to_string()))
    );
    assert_eq!(param.get_f32s("coeff").unwrap(), vec![1., -0.5]);

    let items = msg.get_messages("items").unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].get_u64("a").unwrap(), Some(2));
}

#[test]
fn test_parse_empty_input() {
    assert!(parse("").unwrap().is_empty());
    assert!(parse("  # 只有注释\n").unwrap().is_empty());
}

#[test]
fn test_parse_errors() {
    // 缺少右括号
    assert_eq!(
        parse("layer {\n  name: \"A\"\n").unwrap_err(),
        PrototxtError::UnexpectedToken {
            line: 3,
            column: 1,
            expected: "`}`".to_string(),
            found: "文件结尾".to_string(),
        }
    );

    // 多余的右括号
    assert_eq!(
        parse("name: \"A\" }").unwrap_err(),
        PrototxtError::UnexpectedToken {
            line: 1,
            column: 11,
            expected: "字段名".to_string(),
            found: "符号`}`".to_string(),
        }
    );

    // 标量字段缺少冒号
    assert_eq!(
        parse("name \"A\"").unwrap_err(),
        PrototxtError::UnexpectedToken {
            line: 1,
            column: 6,
            expected: "`:`或`{`".to_string(),
            found: "字符串\"A\"".to_string(),
        }
    );

    // 列表未闭合
    assert!(matches!(
        parse("dim: [1, 2").unwrap_err(),
        PrototxtError::UnexpectedToken { expected, .. } if expected == "`,`或`]`"
    ));

    // 扩展字段
    assert_eq!(
        parse("[foo.bar]: 1").unwrap_err(),
        PrototxtError::ExtensionNotSupported {
            line: 1,
            column: 1,
            name: "foo.bar".to_string(),
        }
    );
}

fn nested(depth: usize, open: &str, close: &str) -> String {
    format!("{}{}", format!("a {open} ").repeat(depth), format!("{close} ").repeat(depth))
}

#[test]
fn test_parse_nesting_limit() {
    // 恰好达到上限时仍可解析
    let mut msg = parse(&nested(MAX_NESTING_DEPTH, "{", "}")).unwrap();
    for _ in 0..MAX_NESTING_DEPTH {
        msg = msg.get_message("a").unwrap().unwrap().clone();
    }
    assert_eq!(msg, Message::new());

    // 超出一层即报错，位置指向越界的那个`{`
    assert_eq!(
        parse(&nested(MAX_NESTING_DEPTH + 1, "{", "}")).unwrap_err(),
        PrototxtError::NestingTooDeep {
            line: 1,
            column: 4 * MAX_NESTING_DEPTH + 3,
            limit: MAX_NESTING_DEPTH,
        }
    );
    assert!(matches!(
        parse(&nested(MAX_NESTING_DEPTH + 1, "<", ">")).unwrap_err(),
        PrototxtError::NestingTooDeep { .. }
    ));
    assert!(matches!(
        parse(&format!(
            "a: [{}]",
            nested(MAX_NESTING_DEPTH + 1, "{", "}").replacen("a ", "", 1)
        ))
        .unwrap_err(),
        PrototxtError::NestingTooDeep { .. }
    ));

    // 极深的输入应返回错误而不是耗尽栈
    assert!(matches!(
        parse(&nested(200_000, "{", "}")).unwrap_err(),
        PrototxtError::NestingTooDeep { .. }
    ));
}
