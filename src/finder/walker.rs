//! 文件系统遍历功能
//!
//! 本模块以深度优先、先序的方式遍历目录树：
//! 目录条目先被访问，然后才进入该目录。
//! 遍历使用 walkdir 内部的显式栈，深度不受调用栈限制。

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use log::trace;
use walkdir::WalkDir;

use crate::errors::{FindError, FindResult};
use super::options::FindOptions;
use super::path;

/// 目录条目的粗略类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// 目录（不跟随符号链接）
    Directory,
    /// 其他所有类型：普通文件、符号链接、设备等
    Other,
}

/// 遍历过程中产生的单个条目
///
/// 只在访问回调期间有效，不会被保留。
#[derive(Debug)]
pub struct Entry<'a> {
    root: &'a str,
    inner: walkdir::DirEntry,
}

impl<'a> Entry<'a> {
    /// 条目名称
    pub fn name(&self) -> &OsStr {
        self.inner.file_name()
    }

    /// 条目类型，取自目录条目本身
    pub fn kind(&self) -> EntryKind {
        if self.inner.file_type().is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind() == EntryKind::Directory
    }

    /// 用于文件系统操作的路径
    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// 用于输出的路径：根路径字符串加上逐级条目名称（原始字节）
    pub fn display_path(&self) -> OsString {
        let components: Vec<_> = self.inner.path().components().collect();
        let start = components.len().saturating_sub(self.inner.depth());
        let relative: PathBuf = components[start..].iter().collect();
        path::join_relative(self.root, &relative)
    }
}

/// 使用给定选项处理文件系统遍历
pub struct TreeWalker<'a> {
    options: &'a FindOptions,
}

impl<'a> TreeWalker<'a> {
    /// 使用给定选项创建新的 TreeWalker
    pub fn new(options: &'a FindOptions) -> Self {
        Self { options }
    }

    /// 从 `root` 开始遍历，对每个条目（包括目录）调用 `visit`
    ///
    /// 无法打开的目录不产生任何条目，也不报告错误。
    /// 只有 `visit` 返回的错误会中止遍历。返回访问过的条目数。
    pub fn walk<F>(&self, root: &str, mut visit: F) -> FindResult<usize>
    where
        F: FnMut(&Entry<'_>) -> FindResult<()>,
    {
        let mut visited = 0;

        for entry in self.init_walker(root) {
            match entry {
                Ok(inner) => {
                    visit(&Entry { root, inner })?;
                    visited += 1;
                }
                Err(err) => {
                    let err = FindError::from(err);
                    trace!("skipping: {}", err);
                }
            }
        }

        Ok(visited)
    }

    /// 使用配置的选项初始化目录遍历器
    fn init_walker(&self, root: &str) -> walkdir::IntoIter {
        WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .max_open(self.options.max_open.max(1))
            .into_iter()
    }
}
