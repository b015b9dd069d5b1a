//! Barter 문서 저장소
//!
//! `config.json`, `session.json` 같은 작은 JSON 문서를 한 디렉토리에 둡니다.
//! 세션 문서에는 토큰이 들어 있으므로 쓰기는 임시 파일 → rename 순서로 하고,
//! unix에서는 소유자만 읽을 수 있게 만듭니다.

use crate::{Error, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 글로벌 디렉토리 이름 (<config_dir>/barter)
const APP_DIR: &str = "barter";

/// 프로젝트 디렉토리 이름 (./.barter)
const PROJECT_DIR: &str = ".barter";

/// 디렉토리 하나에 묶인 JSON 문서들
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// 사용자 전역 문서 (설정, 세션)
    pub fn global() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Storage("no user config directory on this platform".into()))?;
        Ok(Self::new(config_dir.join(APP_DIR)))
    }

    /// 프로젝트 문서 (설정만)
    pub fn project(root: impl AsRef<Path>) -> Self {
        Self::new(root.as_ref().join(PROJECT_DIR))
    }

    pub fn current_project() -> Result<Self> {
        Ok(Self::project(std::env::current_dir()?))
    }

    pub fn file_path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// 문서 읽기 (없으면 에러)
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let path = self.file_path(name);
        let raw = std::fs::read_to_string(&path)
            .map_err(|e| Error::Storage(format!("{}: {}", path.display(), e)))?;
        parse(&path, &raw)
    }

    /// 문서 읽기 (없거나 비어 있으면 None)
    pub fn load_optional<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let path = self.file_path(name);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::Storage(format!("{}: {}", path.display(), e))),
        };
        if raw.trim().is_empty() {
            debug!("{} is empty, ignoring", path.display());
            return Ok(None);
        }
        parse(&path, &raw).map(Some)
    }

    /// 문서 쓰기 (임시 파일에 쓴 뒤 교체)
    pub fn save<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| Error::Storage(format!("{}: {}", self.dir.display(), e)))?;

        let path = self.file_path(name);
        let tmp = self.file_path(&format!(".{}.tmp", name));
        let body = serde_json::to_string_pretty(value)?;

        std::fs::write(&tmp, body)
            .map_err(|e| Error::Storage(format!("{}: {}", tmp.display(), e)))?;
        restrict_to_owner(&tmp)?;
        std::fs::rename(&tmp, &path)
            .map_err(|e| Error::Storage(format!("{}: {}", path.display(), e)))?;

        debug!("Saved {}", path.display());
        Ok(())
    }

    /// 문서 삭제 (없으면 false)
    pub fn remove(&self, name: &str) -> Result<bool> {
        let path = self.file_path(name);
        match std::fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::Storage(format!("{}: {}", path.display(), e))),
        }
    }
}

fn parse<T: DeserializeOwned>(path: &Path, raw: &str) -> Result<T> {
    serde_json::from_str(raw)
        .map_err(|e| Error::Storage(format!("{} is not valid: {}", path.display(), e)))
}

#[cfg(unix)]
fn restrict_to_owner(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_to_owner(_path: &Path) -> Result<()> {
    Ok(())
}
