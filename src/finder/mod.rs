//! 文件查找模块
//!
//! 这个模块把目录遍历、过滤器和动作组合成五种运行模式：
//! 列出全部条目，以及按名称、修改时间、inode 查找（可选删除）。
//! 每个匹配在被发现时立即处理，不会累积结果列表。

pub mod action;
pub mod filter;
pub mod options;
pub mod path;
pub mod time;
pub mod walker;

use std::io::Write;
use std::time::Instant;
use log::debug;

use crate::errors::FindResult;
use self::action::Outcome;
use self::filter::{InodeFilter, MTimeFilter, NameFilter};
use self::time::TimeFilter;
use self::walker::TreeWalker;

pub use self::action::Operation;
pub use self::filter::FileFilter;
pub use self::options::FindOptions;

/// 查找条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// `-name`：精确文件名
    Name(String),
    /// `-mmin`：修改时间窗口
    Modified(TimeFilter),
    /// `-inum`：inode 号
    Inode(i64),
}

/// 一次运行的命令描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 列出根目录下的所有条目
    List { root: String },
    /// 对匹配条件的文件执行动作
    Find {
        root: String,
        criterion: Criterion,
        operation: Operation,
    },
}

impl Command {
    pub fn root(&self) -> &str {
        match self {
            Command::List { root } | Command::Find { root, .. } => root,
        }
    }
}

/// 运行统计，只用于日志和测试
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// 访问过的条目（包括目录）
    pub visited: usize,
    /// 匹配的文件
    pub matched: usize,
    /// 成功删除的文件
    pub deleted: usize,
    /// 删除失败的文件
    pub failed: usize,
}

impl RunStats {
    fn record(&mut self, outcome: Outcome) {
        self.matched += 1;
        match outcome {
            Outcome::Printed => {}
            Outcome::Deleted => self.deleted += 1,
            Outcome::DeleteFailed => self.failed += 1,
        }
    }
}

/// 文件查找器
#[derive(Debug, Default)]
pub struct Finder {
    options: FindOptions,
}

impl Finder {
    /// 创建新的文件查找器实例
    pub fn new(options: FindOptions) -> Self {
        Self { options }
    }

    /// 执行命令，输出写入 `out`
    pub fn run(&self, command: &Command, out: &mut dyn Write) -> FindResult<RunStats> {
        let start_time = Instant::now();
        debug!("Running {:?}", command);

        let stats = match command {
            Command::List { root } => self.list(root, out)?,
            Command::Find {
                root,
                criterion,
                operation,
            } => match criterion {
                Criterion::Name(target) => {
                    self.find(root, &NameFilter::new(target), *operation, out)?
                }
                Criterion::Modified(window) => {
                    if let Some(banner) = window.banner() {
                        writeln!(out, "{}\n", banner)?;
                    }
                    let filter = MTimeFilter::new(*window, self.options.reference_time);
                    self.find(root, &filter, *operation, out)?
                }
                Criterion::Inode(number) => {
                    self.find(root, &InodeFilter::new(*number), *operation, out)?
                }
            },
        };

        debug!(
            "Visited {} entries, {} matched, {} deleted, {} failed in {:.2?}",
            stats.visited,
            stats.matched,
            stats.deleted,
            stats.failed,
            start_time.elapsed()
        );
        Ok(stats)
    }

    /// 打印每一个条目，目录和文件都包括
    pub fn list(&self, root: &str, out: &mut dyn Write) -> FindResult<RunStats> {
        let visited = TreeWalker::new(&self.options).walk(root, |entry| {
            path::write_path(out, &entry.display_path())?;
            out.write_all(b"\n")?;
            Ok(())
        })?;

        Ok(RunStats {
            visited,
            ..RunStats::default()
        })
    }

    /// 对每个匹配 `filter` 的非目录条目执行 `operation`
    ///
    /// 目录只会被进入，永远不会被匹配。
    pub fn find<F>(
        &self,
        root: &str,
        filter: &F,
        operation: Operation,
        out: &mut dyn Write,
    ) -> FindResult<RunStats>
    where
        F: FileFilter + ?Sized,
    {
        debug!("Searching in {} for files where {}", root, filter.description());

        let mut stats = RunStats::default();
        let visited = TreeWalker::new(&self.options).walk(root, |entry| {
            if entry.is_dir() {
                return Ok(());
            }
            if let Some(found) = filter.evaluate(entry) {
                stats.record(operation.execute(entry, found, out)?);
            }
            Ok(())
        })?;

        stats.visited = visited;
        Ok(stats)
    }
}
