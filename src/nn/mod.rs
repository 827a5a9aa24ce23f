/*
 * @Description  : 负责计算图（graph）的构建与前向计算。
 *                 prototxt导入器（`crate::importer`）产出的节点都挂在这里的`Graph`上，
 *                 再由`crate::transformer`执行。
 */

mod descriptor;
mod graph;
mod nodes;
mod op;

pub use descriptor::{GraphDescriptor, NodeDescriptor, NodeTypeDescriptor};
pub use graph::{Graph, GraphError, GraphInner};
pub use nodes::NodeId;
pub use op::Op;

#[cfg(test)]
mod tests;
