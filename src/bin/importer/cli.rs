use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "importer",
    version,
    about = "把Caffe的prototxt模型导入为计算图并执行"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 计算并打印指定层（或输出blob）的值
    Compute {
        /// prototxt模型文件路径
        #[arg(short, long)]
        model: PathBuf,

        /// 逗号分隔的层名，如`A,B,D`
        #[arg(short, long, value_delimiter = ',', required = true)]
        name: Vec<String>,

        /// 若指定，把每个结果另存为`<目录>/<名字>.npy`
        #[arg(long)]
        save_dir: Option<PathBuf>,

        #[command(flatten)]
        common: CommonArgs,
    },
    /// 以JSON（或文本表格）输出导入后的计算图
    Describe {
        /// prototxt模型文件路径
        #[arg(short, long)]
        model: PathBuf,

        /// 输出文本表格而非JSON
        #[arg(long)]
        table: bool,

        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args, Debug)]
pub struct CommonArgs {
    /// 以info级别记录每个导入的层
    #[arg(short, long)]
    pub verbose: bool,

    /// 随机填充器使用的种子
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON格式的导入配置文件，命令行参数优先
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// 日志级别（RUST_LOG语法）
    #[arg(long, default_value = "warn")]
    pub log: String,
}

/// 兼容`-model`、`-name`这种单横线的长参数写法
pub fn normalize_args<I: IntoIterator<Item = String>>(args: I) -> Vec<String> {
    args.into_iter()
        .map(|arg| match arg.split_once('=') {
            Some((flag @ ("-model" | "-name"), value)) => format!("-{flag}={value}"),
            _ if arg == "-model" || arg == "-name" => format!("-{arg}"),
            _ => arg,
        })
        .collect()
}
