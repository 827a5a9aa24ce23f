/*
 * @Description  : Caffe prototxt导入器：解析模型文件，逐层构建计算图，返回层名到节点的映射（`OpMap`）。
 */

mod error;
mod filler;
mod op_map;
mod ops_bridge;
mod options;

pub use error::ImportError;
pub use op_map::OpMap;
pub use options::ImportOptions;

use crate::caffe::{LayerParameter, NetParameter};
use crate::nn::{Graph, Op};
use std::path::Path;
use tracing::{debug, info, warn};

#[cfg(test)]
mod tests;

/// 未指定图名且prototxt中也没有`name:`时使用的图名
pub const DEFAULT_GRAPH_NAME: &str = "caffe_net";

/// 解析prototxt模型文件，`verbose`为true时以info级别记录每个导入的层
pub fn parse_prototxt<P: AsRef<Path>>(path: P, verbose: bool) -> Result<OpMap, ImportError> {
    parse_prototxt_with_options(path, &ImportOptions::new(verbose))
}

pub fn parse_prototxt_with_options<P: AsRef<Path>>(
    path: P,
    options: &ImportOptions,
) -> Result<OpMap, ImportError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "读取prototxt");
    parse_prototxt_str(&text, options)
}

/// 直接解析prototxt文本
pub fn parse_prototxt_str(text: &str, options: &ImportOptions) -> Result<OpMap, ImportError> {
    let net = NetParameter::parse(text)?;
    import_net(&net, options)
}

/// 把已解析的网络描述构建为计算图，层按文件中的顺序导入
pub fn import_net(net: &NetParameter, options: &ImportOptions) -> Result<OpMap, ImportError> {
    let graph_name = options
        .graph_name
        .as_deref()
        .or(net.name.as_deref())
        .unwrap_or(DEFAULT_GRAPH_NAME);
    let graph = match options.seed {
        Some(seed) => Graph::with_name_and_seed(graph_name, seed),
        None => Graph::with_name(graph_name),
    };

    for input in &net.inputs {
        warn!(input = %input, "忽略网络级输入（input），引用它的层将无法导入");
    }

    let mut op_map = OpMap::new(graph.clone(), net.name.clone());
    for layer in &net.layers {
        if op_map.contains_layer(&layer.name) {
            return Err(ImportError::DuplicateLayer(layer.name.clone()));
        }
        let ops = ops_bridge::convert_layer(&graph, &op_map, layer)?;
        log_layer(options.verbose, layer, &ops);
        op_map.insert_layer(&layer.name, &layer.tops, ops);
    }

    if options.verbose {
        info!(
            graph = graph_name,
            layers = op_map.len(),
            nodes = graph.nodes_count(),
            "prototxt导入完成"
        );
    } else {
        debug!(
            graph = graph_name,
            layers = op_map.len(),
            nodes = graph.nodes_count(),
            "prototxt导入完成"
        );
    }
    Ok(op_map)
}

fn log_layer(verbose: bool, layer: &LayerParameter, ops: &[Op]) {
    let shapes = ops
        .iter()
        .map(Op::value_expected_shape)
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_default();
    if verbose {
        info!(
            layer = %layer.name,
            layer_type = %layer.layer_type,
            bottoms = ?layer.bottoms,
            tops = ?layer.tops,
            shapes = ?shapes,
            "导入层"
        );
    } else {
        debug!(
            layer = %layer.name,
            layer_type = %layer.layer_type,
            bottoms = ?layer.bottoms,
            tops = ?layer.tops,
            shapes = ?shapes,
            "导入层"
        );
    }
}
