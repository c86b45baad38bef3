//! Android release packaging for the Tara app.
//!
//! Mirrors the Gradle build: the release APK produced by Flutter is published
//! under a fixed file name once `assembleRelease` finishes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

pub const NAMESPACE: &str = "io.app.tara";
pub const APPLICATION_ID: &str = "io.app.tara";
pub const JVM_TARGET: u32 = 17;
pub const DEFAULT_OUTPUTS_DIR: &str = "build/app/outputs/flutter-apk";
pub const SOURCE_APK: &str = "app-release.apk";
pub const TARGET_APK: &str = "tara-app.apk";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AndroidRelease {
    pub namespace: &'static str,
    pub application_id: &'static str,
    pub jvm_target: u32,
    pub outputs_dir: PathBuf,
}

impl Default for AndroidRelease {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUTS_DIR)
    }
}

impl AndroidRelease {
    pub fn new(outputs_dir: impl Into<PathBuf>) -> Self {
        Self {
            namespace: NAMESPACE,
            application_id: APPLICATION_ID,
            jvm_target: JVM_TARGET,
            outputs_dir: outputs_dir.into(),
        }
    }

    pub fn source_apk(&self) -> PathBuf {
        self.outputs_dir.join(SOURCE_APK)
    }

    pub fn target_apk(&self) -> PathBuf {
        self.outputs_dir.join(TARGET_APK)
    }

    pub fn finalize(&self) -> io::Result<Option<PathBuf>> {
        rename_release_artifact(&self.outputs_dir)
    }
}

/// Copies `app-release.apk` to `tara-app.apk`, replacing any previous copy.
/// Returns the published path, or `None` when there was nothing to publish.
pub fn rename_release_artifact(outputs_dir: &Path) -> io::Result<Option<PathBuf>> {
    let source = outputs_dir.join(SOURCE_APK);
    if !source.exists() {
        warn!(path = %source.display(), "release apk not found; skipping rename");
        return Ok(None);
    }
    let target = outputs_dir.join(TARGET_APK);
    let bytes = fs::copy(&source, &target)?;
    info!(from = %source.display(), to = %target.display(), bytes, "release apk published");
    Ok(Some(target))
}
