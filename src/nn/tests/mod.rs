mod graph_handle;
mod node_constant;
mod op;
