use super::ImportError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 导入选项，可从JSON配置文件加载，缺省的字段取默认值
///
/// ```json
/// { "verbose": true, "seed": 42, "graph_name": "my_net" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// 以info级别逐层记录导入过程（否则为debug级别）
    pub verbose: bool,
    /// 随机填充器（uniform/gaussian/xavier/msra）使用的种子，None表示不可复现
    pub seed: Option<u64>,
    /// 计算图的名称，None时使用网络名（`name:`），再缺省为`caffe_net`
    pub graph_name: Option<String>,
}

impl ImportOptions {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_graph_name(mut self, name: &str) -> Self {
        self.graph_name = Some(name.to_string());
        self
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ImportError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ImportError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text).map_err(|e| ImportError::InvalidConfig {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
