use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for operations that can produce FindError
pub type FindResult<T> = Result<T, FindError>;

/// mini-find 的自定义错误类型
///
/// 除 `Output` 外，所有错误都在单个条目范围内被恢复：
/// 记录日志后继续遍历下一个条目。
#[derive(Debug, Error)]
pub enum FindError {
    /// 目录无法打开（权限不足、不是目录、不存在）
    #[error("目录不可读 {}: {source}", .path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 无法获取文件元数据
    #[error("无法获取文件状态 {}: {source}", .path.display())]
    StatUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 删除失败
    #[error("删除失败 {}: {source}", .path.display())]
    DeleteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 参数形式或数量不符合任何调用形式
    #[error("无效的调用: {0}")]
    MalformedInvocation(String),

    /// 写入标准输出失败
    #[error("输出错误: {0}")]
    Output(#[from] io::Error),

    /// 遍历目录时的错误（无底层IO错误）
    #[error("目录遍历错误: {0}")]
    Walk(String),
}

impl From<walkdir::Error> for FindError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        match err.io_error() {
            Some(io_err) => FindError::DirectoryUnreadable {
                source: io::Error::new(io_err.kind(), io_err.to_string()),
                path,
            },
            None => FindError::Walk(err.to_string()),
        }
    }
}
