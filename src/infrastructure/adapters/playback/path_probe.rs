//! PATH Probe - 在 PATH 中查找播放器程序
//!
//! 搜索路径在构造时读取一次，之后不再访问环境变量。

use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::application::ports::BackendProbePort;

pub struct PathProbe {
    search_path: Option<OsString>,
}

impl PathProbe {
    /// 使用当前进程的 PATH
    pub fn from_env() -> Self {
        Self {
            search_path: std::env::var_os("PATH"),
        }
    }

    /// 使用指定的搜索路径（`:` 分隔）
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    fn candidates(&self, program: &str) -> Vec<PathBuf> {
        let path = Path::new(program);
        // 带目录的程序名直接检查，不走 PATH
        if path.components().count() > 1 {
            return vec![path.to_path_buf()];
        }

        self.search_path
            .as_ref()
            .map(|p| std::env::split_paths(p).map(|dir| dir.join(program)).collect())
            .unwrap_or_default()
    }
}

async fn is_executable(path: &Path) -> bool {
    match tokio::fs::metadata(path).await {
        #[cfg(unix)]
        Ok(meta) => {
            use std::os::unix::fs::PermissionsExt;
            meta.is_file() && meta.permissions().mode() & 0o111 != 0
        }
        #[cfg(not(unix))]
        Ok(meta) => meta.is_file(),
        Err(_) => false,
    }
}

#[async_trait]
impl BackendProbePort for PathProbe {
    async fn is_installed(&self, program: &str) -> bool {
        for candidate in self.candidates(program) {
            if is_executable(&candidate).await {
                tracing::debug!(program, path = %candidate.display(), "Program found");
                return true;
            }
        }
        false
    }
}
