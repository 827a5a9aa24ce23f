/*
 * @Description  : 把单个Caffe层翻译为计算图节点。
 *                 输入（bottom）按blob名解析到之前的层产生的节点，输出（top）与新节点一一对应。
 */

use super::filler::fill;
use super::{ImportError, OpMap};
use crate::caffe::{EltwiseOp, LayerParameter};
use crate::nn::{Graph, Op};
use tracing::trace;

/// 翻译一个层，返回与其top一一对应的节点
pub(super) fn convert_layer(
    graph: &Graph,
    op_map: &OpMap,
    layer: &LayerParameter,
) -> Result<Vec<Op>, ImportError> {
    match layer.layer_type.as_str() {
        "DummyData" => convert_dummy_data(graph, layer),
        "Eltwise" => convert_eltwise(graph, op_map, layer),
        other => Err(ImportError::UnsupportedLayer {
            layer: layer.name.clone(),
            layer_type: other.to_string(),
        }),
    }
}

fn invalid(layer: &LayerParameter, reason: String) -> ImportError {
    ImportError::InvalidLayer {
        layer: layer.name.clone(),
        reason,
    }
}

/// 每个top一个常量节点
fn convert_dummy_data(graph: &Graph, layer: &LayerParameter) -> Result<Vec<Op>, ImportError> {
    if !layer.bottoms.is_empty() {
        return Err(invalid(
            layer,
            format!("DummyData层不接受输入（bottom），实际有{}个", layer.bottoms.len()),
        ));
    }
    let num_top = layer.tops.len();
    if num_top == 0 {
        return Err(invalid(layer, "DummyData层至少需要1个输出（top）".to_string()));
    }

    let param = layer.dummy_data.clone().unwrap_or_default();
    let fillers = param.resolve_fillers(num_top, &layer.name)?;
    let shapes = param.resolve_shapes(num_top, &layer.name)?;

    let mut ops = Vec::with_capacity(num_top);
    for ((top, filler), shape) in layer.tops.iter().zip(&fillers).zip(&shapes) {
        trace!(layer = %layer.name, top = %top, filler = filler.type_name(), shape = ?shape, "填充伪数据");
        filler.validate(&layer.name)?;
        let value = fill(filler, shape, graph);
        ops.push(graph.constant(&value, Some(&node_name(layer, top)))?);
    }
    Ok(ops)
}

/// 只支持SUM：`top = Σ coeff[i] * bottom[i]`
fn convert_eltwise(
    graph: &Graph,
    op_map: &OpMap,
    layer: &LayerParameter,
) -> Result<Vec<Op>, ImportError> {
    let param = layer.eltwise.clone().unwrap_or_default();
    if param.operation != EltwiseOp::Sum {
        return Err(ImportError::UnsupportedEltwiseOperation {
            layer: layer.name.clone(),
            operation: param.operation,
        });
    }

    if layer.tops.len() != 1 {
        return Err(invalid(
            layer,
            format!("Eltwise层须恰好有1个输出（top），实际为{}个", layer.tops.len()),
        ));
    }
    if layer.bottoms.len() < 2 {
        return Err(invalid(
            layer,
            format!("Eltwise层至少需要2个输入（bottom），实际为{}个", layer.bottoms.len()),
        ));
    }
    if !param.coeffs.is_empty() && param.coeffs.len() != layer.bottoms.len() {
        return Err(invalid(
            layer,
            format!(
                "coeff的个数（{}）须与输入（bottom）个数（{}）一致",
                param.coeffs.len(),
                layer.bottoms.len()
            ),
        ));
    }

    let inputs = layer
        .bottoms
        .iter()
        .map(|bottom| {
            op_map
                .get_blob(bottom)
                .ok_or_else(|| ImportError::UnknownBottom {
                    layer: layer.name.clone(),
                    bottom: bottom.clone(),
                })
        })
        .collect::<Result<Vec<&Op>, _>>()?;

    // Eltwise不做广播
    let first_shape = inputs[0].value_expected_shape()?;
    for (bottom, input) in layer.bottoms.iter().zip(&inputs).skip(1) {
        let shape = input.value_expected_shape()?;
        if shape != first_shape {
            return Err(invalid(
                layer,
                format!(
                    "输入`{bottom}`的形状{shape:?}与输入`{}`的形状{first_shape:?}不一致",
                    layer.bottoms[0]
                ),
            ));
        }
    }

    let sum = graph.sum(&inputs, &param.coeffs, Some(&node_name(layer, &layer.tops[0])))?;
    Ok(vec![sum])
}

/// 单输出的层以层名命名节点，多输出的层为`层名/top名`
fn node_name(layer: &LayerParameter, top: &str) -> String {
    if layer.tops.len() == 1 {
        layer.name.clone()
    } else {
        format!("{}/{}", layer.name, top)
    }
}
