//! 用于查找文件和目录的库
//!
//! 本库实现了 Unix find 命令的一个最小子集：
//! - 深度优先列出目录树中的所有条目
//! - 按精确文件名查找（`-name`）
//! - 按修改时间窗口查找（`-mmin`）
//! - 按 inode 号查找（`-inum`）
//! - 删除匹配的文件而不是打印（`-delete`）
//!
//! # 示例
//!
//! ```no_run
//! use mini_find::finder::{Command, Criterion, FindOptions, Finder, Operation};
//!
//! let finder = Finder::new(FindOptions::default());
//! let command = Command::Find {
//!     root: ".".to_string(),
//!     criterion: Criterion::Name("Cargo.toml".to_string()),
//!     operation: Operation::Print,
//! };
//!
//! let mut out = std::io::stdout();
//! let stats = finder.run(&command, &mut out).unwrap();
//! eprintln!("{} 个匹配", stats.matched);
//! ```

pub mod cli;
pub mod errors;
pub mod finder;

// Re-export main types for convenience
pub use errors::{FindError, FindResult};
pub use finder::{Command, Finder};
