mod cli;

use anyhow::{Context, Result};
use caffe_importer::importer::{ImportOptions, OpMap, parse_prototxt_with_options};
use caffe_importer::transformer::make_transformer;
use clap::Parser;
use cli::{Cli, CommonArgs, Command};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse_from(cli::normalize_args(std::env::args()));

    match cli.command {
        Command::Compute {
            model,
            name,
            save_dir,
            common,
        } => {
            init_logging(&common)?;
            compute(&model, &name, save_dir.as_deref(), &common)
        }
        Command::Describe {
            model,
            table,
            common,
        } => {
            init_logging(&common)?;
            describe(&model, table, &common)
        }
    }
}

fn init_logging(common: &CommonArgs) -> Result<()> {
    let mut filter = match std::env::var("RUST_LOG") {
        Ok(env) if !env.is_empty() => EnvFilter::try_new(env),
        _ => EnvFilter::try_new(&common.log),
    }
    .with_context(|| format!("无效的日志级别`{}`", common.log))?;
    if common.verbose {
        filter = filter.add_directive("caffe_importer=info".parse()?);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// 配置文件打底，命令行参数覆盖
fn load_options(common: &CommonArgs) -> Result<ImportOptions> {
    let mut options = match &common.config {
        Some(path) => ImportOptions::from_json_file(path)?,
        None => ImportOptions::default(),
    };
    options.verbose |= common.verbose;
    if let Some(seed) = common.seed {
        options.seed = Some(seed);
    }
    Ok(options)
}

fn import(model: &Path, common: &CommonArgs) -> Result<OpMap> {
    let options = load_options(common)?;
    parse_prototxt_with_options(model, &options)
        .with_context(|| format!("导入模型`{}`失败", model.display()))
}

fn compute(
    model: &Path,
    names: &[String],
    save_dir: Option<&Path>,
    common: &CommonArgs,
) -> Result<()> {
    let op_map = import(model, common)?;
    let ops = op_map.get_all(names)?;
    let results = make_transformer()
        .computation(&ops)?
        .run()
        .context("计算失败")?;

    if let Some(dir) = save_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("无法创建目录`{}`", dir.display()))?;
    }
    for (name, tensor) in names.iter().zip(&results) {
        println!("{name}:");
        println!("{tensor}");
        if let Some(dir) = save_dir {
            let path = npy_path(dir, name);
            tensor
                .save_npy(&path)
                .with_context(|| format!("保存`{}`失败", path.display()))?;
            info!(name = %name, path = %path.display(), "已保存");
        }
    }
    Ok(())
}

fn describe(model: &Path, table: bool, common: &CommonArgs) -> Result<()> {
    let op_map = import(model, common)?;
    if table {
        print!("{}", op_map.graph().summary_string());
    } else {
        println!("{}", op_map.graph().describe().to_json()?);
    }
    Ok(())
}

/// 层名可能含`/`，保存时替换为`_`
fn npy_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.npy", name.replace('/', "_")))
}
