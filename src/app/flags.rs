//! Country flag loading: disk cache first, then the flag URL

use crate::task::{Pending, Spawner, TaskPoll};
use crate::types::Country;
use eframe::egui;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct FlagCache {
    dir: PathBuf,
    textures: HashMap<String, Option<egui::TextureHandle>>,
    loading: HashMap<String, Pending<Option<Vec<u8>>>>,
}

impl FlagCache {
    pub fn new(cache_dir: &Path) -> Self {
        Self {
            dir: cache_dir.join("flags"),
            textures: HashMap::new(),
            loading: HashMap::new(),
        }
    }

    /// Texture for `country`'s flag, starting a download on first request.
    /// `None` while loading or when the flag is unavailable.
    pub fn get(
        &mut self,
        ctx: &egui::Context,
        country: &Country,
        client: &reqwest::Client,
        spawner: &Spawner,
    ) -> Option<egui::TextureHandle> {
        let code = country.alpha2_code.as_str();
        if let Some(cached) = self.textures.get(code) {
            return cached.clone();
        }
        if self.loading.contains_key(code) {
            return None;
        }

        let path = self.path_for(code);
        if let Some(image) = path.as_deref().and_then(read_cached) {
            let texture = upload(ctx, code, image);
            self.textures.insert(code.to_string(), Some(texture.clone()));
            return Some(texture);
        }

        debug!(code, url = %country.flag_image_url, "Fetching flag");
        let pending = spawner.spawn(fetch_flag(
            client.clone(),
            country.flag_image_url.clone(),
            path,
        ));
        self.loading.insert(code.to_string(), pending);
        None
    }

    /// Turn finished downloads into textures
    pub fn poll(&mut self, ctx: &egui::Context) {
        let mut finished = Vec::new();
        for (code, pending) in self.loading.iter_mut() {
            match pending.poll() {
                TaskPoll::Running => {}
                TaskPoll::Ready(bytes) => finished.push((code.clone(), bytes)),
                TaskPoll::Abandoned => finished.push((code.clone(), None)),
            }
        }
        for (code, bytes) in finished {
            self.loading.remove(&code);
            let texture = bytes
                .and_then(|b| decode_png(&b))
                .map(|image| upload(ctx, &code, image));
            self.textures.insert(code, texture);
        }
    }

    fn path_for(&self, code: &str) -> Option<PathBuf> {
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        Some(self.dir.join(format!("{}.png", code.to_ascii_uppercase())))
    }
}

/// Decoded flag from the disk cache. A file that no longer decodes is removed
/// so the next request downloads it again.
fn read_cached(path: &Path) -> Option<egui::ColorImage> {
    let bytes = std::fs::read(path).ok()?;
    let image = decode_png(&bytes);
    if image.is_none() {
        warn!(path = %path.display(), "Discarding unreadable cached flag");
        if let Err(e) = std::fs::remove_file(path) {
            debug!(path = %path.display(), error = %e, "Failed to remove cached flag");
        }
    }
    image
}

async fn fetch_flag(
    client: reqwest::Client,
    url: String,
    dest: Option<PathBuf>,
) -> Option<Vec<u8>> {
    let response = match client.get(&url).send().await {
        Ok(r) if r.status().is_success() => r,
        Ok(r) => {
            warn!(url = %url, status = %r.status(), "Flag request rejected");
            return None;
        }
        Err(e) => {
            warn!(url = %url, error = %e, "Flag request failed");
            return None;
        }
    };
    let bytes = match response.bytes().await {
        Ok(b) => b.to_vec(),
        Err(e) => {
            warn!(url = %url, error = %e, "Failed to read flag body");
            return None;
        }
    };
    if let Some(dest) = dest {
        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent).await.ok();
        }
        if let Err(e) = tokio::fs::write(&dest, &bytes).await {
            debug!(path = %dest.display(), error = %e, "Failed to cache flag");
        }
    }
    Some(bytes)
}

fn upload(ctx: &egui::Context, code: &str, image: egui::ColorImage) -> egui::TextureHandle {
    ctx.load_texture(format!("flag_{}", code), image, egui::TextureOptions::LINEAR)
}

fn decode_png(bytes: &[u8]) -> Option<egui::ColorImage> {
    match image::load_from_memory(bytes) {
        Ok(img) => {
            let rgba = img.to_rgba8();
            let size = [rgba.width() as usize, rgba.height() as usize];
            Some(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
        }
        Err(e) => {
            warn!(error = %e, "Failed to decode flag image");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn decodes_png_bytes() {
        let mut png = Vec::new();
        image::RgbaImage::from_pixel(3, 2, image::Rgba([200, 16, 46, 255]))
            .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();
        let decoded = decode_png(&png).unwrap();
        assert_eq!(decoded.size, [3, 2]);
    }

    #[test]
    fn rejects_garbage() {
        assert!(decode_png(b"not a png").is_none());
    }

    #[test]
    fn corrupt_cached_flag_is_removed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CA.png");
        std::fs::write(&path, b"truncated").unwrap();

        assert!(read_cached(&path).is_none());
        assert!(!path.exists());
    }

    #[test]
    fn valid_cached_flag_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("FR.png");
        image::RgbaImage::from_pixel(4, 3, image::Rgba([0, 85, 164, 255]))
            .save_with_format(&path, image::ImageFormat::Png)
            .unwrap();

        let decoded = read_cached(&path).unwrap();
        assert_eq!(decoded.size, [4, 3]);
        assert!(path.exists());
    }

    #[test]
    fn cache_path_only_for_plain_codes() {
        let cache = FlagCache::new(Path::new("/tmp/travel"));
        assert_eq!(
            cache.path_for("ca"),
            Some(PathBuf::from("/tmp/travel/flags/CA.png"))
        );
        assert_eq!(cache.path_for("../x"), None);
        assert_eq!(cache.path_for(""), None);
    }
}
