/*
 * @Description  : Op - 计算图中某个节点的句柄，导入器输出的op_map中存放的就是它
 */

use super::graph::{Graph, GraphInner};
use super::{GraphError, NodeId};
use crate::tensor::Tensor;
use std::cell::RefCell;
use std::rc::Rc;

/// 节点句柄 - 携带图引用，可直接取形状、求值
///
/// # 使用示例
/// ```ignore
/// let graph = Graph::new();
/// let a = graph.constant(&Tensor::new_constant(1., &[2, 3]), Some("A"))?;
/// let b = graph.constant(&Tensor::new_constant(3., &[2, 3]), Some("B"))?;
/// let d = graph.sum(&[&a, &b], &[], Some("D"))?;
/// let value = d.eval()?;
/// ```
#[derive(Clone)]
pub struct Op {
    /// 节点 ID
    id: NodeId,
    /// 图引用（用户不可见）
    graph: Rc<RefCell<GraphInner>>,
}

impl std::fmt::Debug for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("Op");
        debug.field("id", &self.id);
        // 图正被可变借用时（如节点构建中）只打印id
        if let Ok(graph) = self.graph.try_borrow() {
            if let Ok(name) = graph.get_node_name(self.id) {
                debug.field("name", &name);
            }
        }
        debug.finish()
    }
}

impl Op {
    /// 创建新的 Op（内部使用）
    pub(crate) const fn new(id: NodeId, graph: Rc<RefCell<GraphInner>>) -> Self {
        Self { id, graph }
    }

    /// 获取节点 ID
    pub const fn node_id(&self) -> NodeId {
        self.id
    }

    /// 获取内部图引用
    pub(crate) const fn graph(&self) -> &Rc<RefCell<GraphInner>> {
        &self.graph
    }

    /// 检查两个 Op 是否来自同一个 Graph
    pub fn same_graph(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.graph, &other.graph)
    }

    /// 获取 Op 所属的 Graph handle
    ///
    /// 即使原始 Graph handle 已 drop，此方法仍返回有效的 Graph。
    pub fn get_graph(&self) -> Graph {
        Graph::from_rc(Rc::clone(&self.graph))
    }

    pub fn name(&self) -> Result<String, GraphError> {
        Ok(self.graph.borrow().get_node_name(self.id)?.to_string())
    }

    /// 节点类型名，如"constant"、"sum"
    pub fn type_name(&self) -> Result<&'static str, GraphError> {
        self.graph.borrow().get_node_type_name(self.id)
    }

    /// 父节点（按参与运算的先后顺序）
    pub fn parents(&self) -> Result<Vec<Self>, GraphError> {
        let parents = self.graph.borrow().get_node_parents(self.id)?;
        Ok(parents
            .into_iter()
            .map(|id| Self::new(id, Rc::clone(&self.graph)))
            .collect())
    }

    /// 获取节点的预期输出形状，这个形状在节点创建时就已确定
    pub fn value_expected_shape(&self) -> Result<Vec<usize>, GraphError> {
        Ok(self
            .graph
            .borrow()
            .get_node_value_expected_shape(self.id)?
            .to_vec())
    }

    // ==================== 执行 ====================

    /// 前向传播
    pub fn forward(&self) -> Result<(), GraphError> {
        self.graph.borrow_mut().forward(self.id)
    }

    /// 前向传播后返回本节点的值
    pub fn eval(&self) -> Result<Tensor, GraphError> {
        self.forward()?;
        self.value()?.ok_or_else(|| {
            GraphError::ComputationError(format!("节点{}在前向传播后仍没有值", self.id))
        })
    }

    // ==================== 值访问和设置 ====================

    /// 获取节点的值（克隆的 Tensor），尚未计算时为None
    pub fn value(&self) -> Result<Option<Tensor>, GraphError> {
        Ok(self.graph.borrow().get_node_value(self.id)?.cloned())
    }

    /// 替换节点的值（仅常量节点允许，且形状须一致）
    pub fn set_value(&self, value: &Tensor) -> Result<(), GraphError> {
        self.graph.borrow_mut().set_node_value(self.id, Some(value))
    }
}
