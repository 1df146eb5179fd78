//! # 落盘模块
//!
//! ## 设计思路
//!
//! 输出文件每轮都会被覆盖。为避免中途失败留下截断的 PNG，写入分两步：
//! 先写同目录下的临时文件，完整 flush 后再 `rename` 覆盖目标。
//!
//! ## 实现思路
//!
//! - `PartialFileGuard` 采用 RAII：构造时登记临时路径，`Drop` 时若未提交则删除。
//! - 父目录缺失时自动 `create_dir_all`。
//! - PNG 编码使用 `image` 自带的 `PngEncoder`，默认参数下输出是确定的。

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use super::IconError;

/// 临时文件的 RAII 守卫。
///
/// 未调用 [`PartialFileGuard::commit`] 就离开作用域时，临时文件会被删除。
struct PartialFileGuard {
    temp_path: PathBuf,
    committed: bool,
}

impl PartialFileGuard {
    fn new(temp_path: PathBuf) -> Self {
        Self {
            temp_path,
            committed: false,
        }
    }

    fn path(&self) -> &Path {
        &self.temp_path
    }

    /// 将临时文件原子替换到目标位置。
    fn commit(mut self, destination: &Path) -> Result<(), IconError> {
        fs::rename(&self.temp_path, destination).map_err(|e| {
            IconError::FileSystem(format!("{}: 替换目标文件失败：{}", destination.display(), e))
        })?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for PartialFileGuard {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        if let Err(err) = fs::remove_file(&self.temp_path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "清理临时文件失败: {} ({})",
                    self.temp_path.display(),
                    err
                );
            }
        }
    }
}

/// 以 PNG 格式写出 RGBA 图像，目标存在则覆盖。
pub fn write_png(path: &Path, image: &RgbaImage) -> Result<(), IconError> {
    write_atomically(path, |writer| {
        PngEncoder::new(writer)
            .write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| format!("PNG 编码失败：{}", e))
    })
}

/// 写出任意字节内容（清单文件使用）。
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), IconError> {
    write_atomically(path, |writer| {
        writer
            .write_all(bytes)
            .map_err(|e| format!("写入失败：{}", e))
    })
}

/// 创建 `path` 缺失的父目录。
pub fn ensure_parent_dir(path: &Path) -> Result<(), IconError> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent.exists() {
        return Ok(());
    }
    fs::create_dir_all(parent).map_err(|e| {
        IconError::FileSystem(format!("{}: 创建目录失败：{}", parent.display(), e))
    })
}

fn write_atomically<F>(path: &Path, write: F) -> Result<(), IconError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), String>,
{
    ensure_parent_dir(path)?;

    let guard = PartialFileGuard::new(temp_path_for(path));
    let file = File::create(guard.path()).map_err(|e| {
        IconError::FileSystem(format!("{}: 创建临时文件失败：{}", guard.path().display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    write(&mut writer).map_err(|e| IconError::FileSystem(format!("{}: {}", path.display(), e)))?;

    let file = writer.into_inner().map_err(|e| {
        IconError::FileSystem(format!("{}: 刷新缓冲失败：{}", path.display(), e.error()))
    })?;
    file.sync_all()
        .map_err(|e| IconError::FileSystem(format!("{}: 同步磁盘失败：{}", path.display(), e)))?;
    drop(file);

    guard.commit(path)
}

/// 目标同目录下的隐藏临时文件，保证 `rename` 不跨文件系统。
fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock error")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("app-icon-gen-writer-{nanos}"));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn write_png_creates_missing_directories() {
        let dir = unique_temp_dir();
        let path = dir.join("a/b/c/icon.png");
        let image = RgbaImage::from_pixel(3, 3, Rgba([1, 2, 3, 4]));

        write_png(&path, &image).expect("write png");

        let decoded = image::open(&path).expect("decode").to_rgba8();
        assert_eq!(decoded, image);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn write_leaves_no_temp_file_behind() {
        let dir = unique_temp_dir();
        let path = dir.join("Contents.json");

        write_bytes(&path, b"{}").expect("first write");
        write_bytes(&path, b"{\"a\":1}").expect("overwrite");

        assert_eq!(std::fs::read(&path).expect("read"), b"{\"a\":1}");
        let entries: Vec<_> = std::fs::read_dir(&dir)
            .expect("read dir")
            .flatten()
            .map(|e| e.file_name())
            .collect();
        assert_eq!(entries.len(), 1);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn failed_write_removes_partial_file() {
        let dir = unique_temp_dir();
        let path = dir.join("icon.png");

        let result = write_atomically(&path, |writer| {
            writer.write_all(b"partial").map_err(|e| e.to_string())?;
            Err("编码中断".to_string())
        });

        assert!(matches!(result, Err(IconError::FileSystem(_))));
        assert!(!path.exists());
        assert!(!temp_path_for(&path).exists());

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn directory_in_the_way_is_a_filesystem_error() {
        let dir = unique_temp_dir();
        let blocker = dir.join("mipmap-mdpi");
        std::fs::write(&blocker, b"not a directory").expect("write blocker");

        let result = write_png(&blocker.join("ic_launcher.png"), &RgbaImage::new(1, 1));
        assert!(matches!(result, Err(IconError::FileSystem(_))));

        let _ = std::fs::remove_dir_all(dir);
    }
}
