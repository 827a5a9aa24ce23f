use super::error::CaffeError;
use super::filler::FillerParameter;
use crate::prototxt::Message;

/// 旧式的4维形状写法：`num`/`channels`/`height`/`width`各自可重复
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LegacyDims {
    pub num: Vec<usize>,
    pub channels: Vec<usize>,
    pub height: Vec<usize>,
    pub width: Vec<usize>,
}

impl LegacyDims {
    fn is_empty(&self) -> bool {
        self.num.is_empty()
            && self.channels.is_empty()
            && self.height.is_empty()
            && self.width.is_empty()
    }
}

/// Caffe的`DummyDataParameter`：为每个输出（top）给出一个填充器和一个形状。
/// 填充器个数须为0、1或top个数；形状（新式`shape`或旧式4维写法二选一）个数须为1或top个数
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DummyDataParameter {
    pub fillers: Vec<FillerParameter>,
    pub shapes: Vec<Vec<usize>>,
    pub legacy: LegacyDims,
}

impl DummyDataParameter {
    pub fn from_message(msg: &Message, layer: &str) -> Result<Self, CaffeError> {
        let fillers = msg
            .get_messages("data_filler")?
            .into_iter()
            .map(|m| FillerParameter::from_message(m, layer))
            .collect::<Result<Vec<_>, _>>()?;

        let shapes = msg
            .get_messages("shape")?
            .into_iter()
            .map(|m| Ok(to_usizes(m.get_u64s("dim")?)))
            .collect::<Result<Vec<_>, CaffeError>>()?;

        let legacy = LegacyDims {
            num: to_usizes(msg.get_u64s("num")?),
            channels: to_usizes(msg.get_u64s("channels")?),
            height: to_usizes(msg.get_u64s("height")?),
            width: to_usizes(msg.get_u64s("width")?),
        };

        if !legacy.is_empty() && !shapes.is_empty() {
            return Err(CaffeError::InvalidDummyData {
                layer: layer.to_string(),
                reason: "不能同时指定shape与旧式的num/channels/height/width".to_string(),
            });
        }

        Ok(Self {
            fillers,
            shapes,
            legacy,
        })
    }

    /// 按top个数展开，得到每个top的填充器
    pub fn resolve_fillers(
        &self,
        num_top: usize,
        layer: &str,
    ) -> Result<Vec<FillerParameter>, CaffeError> {
        match self.fillers.len() {
            0 => Ok(vec![FillerParameter::default(); num_top]),
            1 => Ok(vec![self.fillers[0].clone(); num_top]),
            n if n == num_top => Ok(self.fillers.clone()),
            n => Err(CaffeError::InvalidDummyData {
                layer: layer.to_string(),
                reason: format!("data_filler的个数须为0、1或top个数{num_top}，实际为{n}"),
            }),
        }
    }

    /// 按top个数展开，得到每个top的形状
    pub fn resolve_shapes(&self, num_top: usize, layer: &str) -> Result<Vec<Vec<usize>>, CaffeError> {
        if self.legacy.is_empty() {
            let shapes = expand("shape", &self.shapes, num_top, layer)?;
            return Ok(shapes);
        }

        let num = expand("num", &self.legacy.num, num_top, layer)?;
        let channels = expand("channels", &self.legacy.channels, num_top, layer)?;
        let height = expand("height", &self.legacy.height, num_top, layer)?;
        let width = expand("width", &self.legacy.width, num_top, layer)?;
        Ok((0..num_top)
            .map(|i| vec![num[i], channels[i], height[i], width[i]])
            .collect())
    }
}

/// 个数为1时复制到每个top，个数等于top个数时原样返回，否则报错
fn expand<T: Clone>(
    field: &str,
    values: &[T],
    num_top: usize,
    layer: &str,
) -> Result<Vec<T>, CaffeError> {
    match values.len() {
        1 => Ok(vec![values[0].clone(); num_top]),
        n if n == num_top => Ok(values.to_vec()),
        n => Err(CaffeError::InvalidDummyData {
            layer: layer.to_string(),
            reason: format!("{field}的个数须为1或top个数{num_top}，实际为{n}"),
        }),
    }
}

fn to_usizes(values: Vec<u64>) -> Vec<usize> {
    values.into_iter().map(|v| v as usize).collect()
}
