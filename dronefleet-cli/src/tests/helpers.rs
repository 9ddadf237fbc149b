//! Test helpers for writing order files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) const VALID_ORDERS: &str = r#"[
  {"weight": 8.0, "destination": {"x": 10.0, "y": 10.0}, "priority": "high"},
  {"weight": 5.0, "destination": {"x": 20.0, "y": 5.0}, "priority": "medium"},
  {"weight": 12.0, "destination": {"x": 5.0, "y": 5.0}}
]"#;

#[expect(clippy::expect_used, reason = "test helpers fail fast on IO errors")]
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Temporary directory exposed as a UTF-8 path.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    #[expect(clippy::expect_used, reason = "test helpers fail fast on IO errors")]
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write_orders(&self, contents: &str) -> Utf8PathBuf {
        let path = self.path("orders.json");
        write_utf8(&path, contents.as_bytes());
        path
    }
}
