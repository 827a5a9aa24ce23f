use super::ImportError;
use crate::nn::{Graph, Op};
use std::collections::HashMap;

/// 导入结果：层名（以及各层输出blob名）到计算图节点的映射
///
/// - 多输出的层，层名对应其第一个输出
/// - blob名总是对应最后一次写入它的层（原地运算会覆盖之前的绑定）
pub struct OpMap {
    graph: Graph,
    net_name: Option<String>,
    /// 按导入顺序排列的层名
    layer_names: Vec<String>,
    layers: HashMap<String, Op>,
    blobs: HashMap<String, Op>,
}

impl OpMap {
    pub(super) fn new(graph: Graph, net_name: Option<String>) -> Self {
        Self {
            graph,
            net_name,
            layer_names: Vec::new(),
            layers: HashMap::new(),
            blobs: HashMap::new(),
        }
    }

    /// 记录一个已导入的层，`ops`与`tops`一一对应
    pub(super) fn insert_layer(&mut self, layer: &str, tops: &[String], ops: Vec<Op>) {
        if let Some(first) = ops.first() {
            self.layers.insert(layer.to_string(), first.clone());
            self.layer_names.push(layer.to_string());
        }
        for (top, op) in tops.iter().zip(ops) {
            self.blobs.insert(top.clone(), op);
        }
    }

    /// 先按层名查找，找不到再按blob名查找
    pub fn get(&self, name: &str) -> Option<&Op> {
        self.layers.get(name).or_else(|| self.blobs.get(name))
    }

    /// 按给定顺序查找多个名字，任一名字不存在即报错
    pub fn get_all<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Op>, ImportError> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name)
                    .cloned()
                    .ok_or_else(|| ImportError::UnknownName(name.to_string()))
            })
            .collect()
    }

    pub fn get_layer(&self, name: &str) -> Option<&Op> {
        self.layers.get(name)
    }

    pub fn get_blob(&self, name: &str) -> Option<&Op> {
        self.blobs.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn contains_layer(&self, name: &str) -> bool {
        self.layers.contains_key(name)
    }

    /// 按导入顺序返回所有层名
    pub fn names(&self) -> &[String] {
        &self.layer_names
    }

    /// 按导入顺序遍历（层名，节点）
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Op)> + '_ {
        self.layer_names
            .iter()
            .filter_map(|name| self.layers.get(name).map(|op| (name.as_str(), op)))
    }

    pub fn len(&self) -> usize {
        self.layer_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layer_names.is_empty()
    }

    /// prototxt中的网络名（`name:`）
    pub fn net_name(&self) -> Option<&str> {
        self.net_name.as_deref()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }
}

impl std::fmt::Debug for OpMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpMap")
            .field("net_name", &self.net_name)
            .field("layers", &self.layer_names)
            .finish()
    }
}
