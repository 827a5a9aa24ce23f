mod node_handle;
pub(in crate::nn) mod raw_node;

pub(in crate::nn) use node_handle::NodeHandle;
pub use node_handle::NodeId;
pub(in crate::nn) use raw_node::NodeType;
