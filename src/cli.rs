//! find 工具的命令行接口
//!
//! 本模块提供了find工具的命令行接口。
//! 参数个数决定运行模式，任何其他形式的调用都不做任何事情。

use std::ffi::OsString;
use std::iter;
use clap::Parser;
use crate::errors::{FindError, FindResult};
use crate::finder::time::{parse_long, TimeFilter};
use crate::finder::{Command, Criterion, Operation};

/// Unix find 命令的最小 Rust 实现
///
/// 用法：
///   mini-find [<root>]
///   mini-find <root> -name <target> [-delete]
///   mini-find <root> -mmin <±N> [-delete]
///   mini-find <root> -inum <N> [-delete]
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// 原始参数（不含程序名）
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// 解析完整的 argv（第一个元素是程序名）
    ///
    /// 在程序名之后插入 `--`，使用户给出的每个参数（包括 `--`）都按原样
    /// 成为位置参数。
    pub fn try_parse_args<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next().unwrap_or_else(|| OsString::from("mini-find"));
        Self::try_parse_from(
            iter::once(program)
                .chain(iter::once(OsString::from("--")))
                .chain(argv),
        )
    }

    /// 从进程参数解析
    pub fn try_parse_env() -> Result<Self, clap::Error> {
        Self::try_parse_args(std::env::args_os())
    }

    /// 参数个数，包括程序名
    pub fn argc(&self) -> usize {
        self.args.len() + 1
    }

    /// 根据参数个数和形式构建命令描述
    pub fn command(&self) -> FindResult<Command> {
        let args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        match args.as_slice() {
            [] => Ok(Command::List {
                root: ".".to_string(),
            }),
            [root] => Ok(Command::List {
                root: root.to_string(),
            }),
            [root, primary, value] => find(root, primary, value, Operation::Print),
            [root, primary, value, "-delete"] => find(root, primary, value, Operation::Delete),
            [_, _, _, other] => Err(FindError::MalformedInvocation(format!(
                "expected -delete, got '{}'",
                other
            ))),
            _ => Err(FindError::MalformedInvocation(format!(
                "{} arguments",
                self.argc()
            ))),
        }
    }
}

fn find(root: &str, primary: &str, value: &str, operation: Operation) -> FindResult<Command> {
    let criterion = match primary {
        "-name" => Criterion::Name(value.to_string()),
        "-mmin" => Criterion::Modified(TimeFilter::parse(value)),
        "-inum" => Criterion::Inode(parse_long(value)),
        other => {
            return Err(FindError::MalformedInvocation(format!(
                "unknown primary '{}'",
                other
            )))
        }
    };

    Ok(Command::Find {
        root: root.to_string(),
        criterion,
        operation,
    })
}
