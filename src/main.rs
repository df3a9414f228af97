use std::io::{self, BufWriter, Write};
use anyhow::{Context, Result};
use log::{debug, warn};

use mini_find::cli::Cli;
use mini_find::finder::{FindOptions, Finder};

fn main() {
    // 初始化日志：默认只输出警告，可通过 RUST_LOG 调整
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    // 退出码始终为 0，所有失败都只通过输出文本报告
    if let Err(err) = run() {
        warn!("{:#}", err);
    }
}

fn run() -> Result<()> {
    // 无法解析的参数与其他无效调用一样：不做任何事
    let cli = match Cli::try_parse_env() {
        Ok(cli) => cli,
        Err(err) => {
            debug!("无法解析参数: {}", err);
            return Ok(());
        }
    };

    let command = match cli.command() {
        Ok(command) => command,
        Err(err) => {
            debug!("{}", err);
            return Ok(());
        }
    };

    debug!("在路径中搜索: {}", command.root());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let finder = Finder::new(FindOptions::default());

    finder
        .run(&command, &mut out)
        .with_context(|| format!("搜索 {} 失败", command.root()))?;
    out.flush().context("刷新标准输出失败")?;

    Ok(())
}
