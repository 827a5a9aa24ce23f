/*
 * @Description  : Graph 句柄（用户级 API）
 */

use super::error::GraphError;
use super::inner::GraphInner;
use crate::nn::descriptor::GraphDescriptor;
use crate::nn::{NodeId, Op};
use crate::tensor::Tensor;
use std::cell::RefCell;
use std::rc::Rc;

/// Graph - 计算图句柄
///
/// # 设计原则
/// - 是 `Rc<RefCell<GraphInner>>` 的薄封装
/// - Clone 语义：多个 Graph 引用同一个 GraphInner
/// - 创建的 Op 自动持有图引用
#[derive(Clone)]
pub struct Graph {
    inner: Rc<RefCell<GraphInner>>,
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("Graph");
        if let Ok(inner) = self.inner.try_borrow() {
            debug
                .field("name", &inner.name())
                .field("nodes_count", &inner.nodes_count());
        }
        debug.finish()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    // ==================== 创建 ====================

    /// 创建新图
    pub fn new() -> Self {
        Self::from_inner(GraphInner::new())
    }

    /// 创建带种子的图（随机填充的常量可复现）
    pub fn new_with_seed(seed: u64) -> Self {
        Self::from_inner(GraphInner::new_with_seed(seed))
    }

    pub fn with_name(name: &str) -> Self {
        Self::from_inner(GraphInner::with_name(name))
    }

    pub fn with_name_and_seed(name: &str, seed: u64) -> Self {
        Self::from_inner(GraphInner::with_name_and_seed(name, seed))
    }

    /// 从现有 GraphInner 创建句柄
    pub fn from_inner(inner: GraphInner) -> Self {
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// 从现有 Rc 创建句柄
    pub(crate) const fn from_rc(inner: Rc<RefCell<GraphInner>>) -> Self {
        Self { inner }
    }

    /// 获取内部 GraphInner 的不可变引用
    pub fn inner(&self) -> std::cell::Ref<'_, GraphInner> {
        self.inner.borrow()
    }

    /// 获取内部 GraphInner 的可变引用
    pub fn inner_mut(&self) -> std::cell::RefMut<'_, GraphInner> {
        self.inner.borrow_mut()
    }

    /// 检查两个句柄是否指向同一个图
    pub fn same_graph(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// 将 NodeId 包装成 Op
    pub fn wrap_node_id(&self, node_id: NodeId) -> Result<Op, GraphError> {
        // 先检查节点是否存在
        self.inner.borrow().get_node(node_id)?;
        Ok(Op::new(node_id, Rc::clone(&self.inner)))
    }

    // ==================== 创建节点 ====================

    /// 创建常量节点，`name`为None时自动命名为`constant_n`
    pub fn constant(&self, value: &Tensor, name: Option<&str>) -> Result<Op, GraphError> {
        let node_id = self.inner.borrow_mut().new_constant_node(value, name)?;
        Ok(Op::new(node_id, Rc::clone(&self.inner)))
    }

    /// 创建逐元素加权求和节点：`Σ coeffs[i] * ops[i]`，`coeffs`为空表示所有系数为1
    pub fn sum(&self, ops: &[&Op], coeffs: &[f32], name: Option<&str>) -> Result<Op, GraphError> {
        if let Some(foreign) = ops.iter().find(|op| !Rc::ptr_eq(op.graph(), &self.inner)) {
            return Err(GraphError::InvalidOperation(format!(
                "不能对来自不同 Graph 的节点进行操作：{foreign:?}"
            )));
        }
        let parents: Vec<NodeId> = ops.iter().map(|op| op.node_id()).collect();
        let node_id = self
            .inner
            .borrow_mut()
            .new_sum_node(&parents, coeffs, name)?;
        Ok(Op::new(node_id, Rc::clone(&self.inner)))
    }

    // ==================== 查询 ====================

    pub fn name(&self) -> String {
        self.inner.borrow().name().to_string()
    }

    pub fn nodes_count(&self) -> usize {
        self.inner.borrow().nodes_count()
    }

    /// 按节点名查找
    pub fn find_op(&self, name: &str) -> Option<Op> {
        let node_id = self.inner.borrow().find_node_by_name(name)?;
        Some(Op::new(node_id, Rc::clone(&self.inner)))
    }

    /// 导出图的描述符
    pub fn describe(&self) -> GraphDescriptor {
        self.inner.borrow().describe()
    }

    pub fn summary_string(&self) -> String {
        self.inner.borrow().summary_string()
    }
}
