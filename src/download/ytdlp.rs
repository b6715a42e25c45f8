use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::{process::Command, sync::OnceCell};

use crate::{config::Config, download::Downloader, download::search_query};

/// Downloads audio by running the `yt-dlp` command line tool.
///
/// The binary is checked with `--version` before the first download only.
/// Clones share the result of that check.
#[derive(Debug, Clone)]
pub struct YtDlp {
    binary: String,
    audio_format: Option<String>,
    available: Arc<OnceCell<bool>>,
}

impl YtDlp {
    pub fn new(binary: impl Into<String>, audio_format: Option<String>) -> Self {
        Self {
            binary: binary.into(),
            audio_format,
            available: Arc::new(OnceCell::new()),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.ytdlp_path.clone(), config.audio_format.clone())
    }

    /// Arguments passed to yt-dlp for one track.
    pub fn args(&self, track: &str, output: &Path) -> Vec<String> {
        // '%' starts a field in yt-dlp output templates
        let template = format!("{}.%(ext)s", output.display().to_string().replace('%', "%%"));

        let mut args: Vec<String> = vec![
            "--format".into(),
            "bestaudio/best".into(),
            "--no-playlist".into(),
            "--output".into(),
            template,
            "--print".into(),
            "after_move:filepath".into(),
        ];

        if let Some(format) = &self.audio_format {
            args.extend(["--extract-audio".into(), "--audio-format".into(), format.clone()]);
        }

        args.push(search_query(track));
        args
    }

    async fn is_available(&self) -> bool {
        *self
            .available
            .get_or_init(|| async {
                Command::new(&self.binary)
                    .arg("--version")
                    .output()
                    .await
                    .map(|o| o.status.success())
                    .unwrap_or(false)
            })
            .await
    }
}

impl Downloader for YtDlp {
    async fn download(&self, track: &str, output: &Path) -> Result<PathBuf, String> {
        if !self.is_available().await {
            return Err(format!("{} is not installed or not in PATH", self.binary));
        }

        let result = Command::new(&self.binary)
            .args(self.args(track, output))
            .output()
            .await
            .map_err(|e| format!("Failed to start {}: {}", self.binary, e))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            let reason = stderr
                .lines()
                .rev()
                .find(|line| !line.trim().is_empty())
                .unwrap_or("no error output");
            return Err(format!(
                "{} exited with code {:?}: {}",
                self.binary,
                result.status.code(),
                reason.trim()
            ));
        }

        let stdout = String::from_utf8_lossy(&result.stdout);
        let path = stdout
            .lines()
            .rev()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| output.to_path_buf());

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_single_result_search() {
        let ytdlp = YtDlp::new("yt-dlp", None);
        let args = ytdlp.args("Around the World Daft Punk", Path::new("downloads/Around"));

        assert_eq!(args.last().unwrap(), "ytsearch1:Around the World Daft Punk audio");
        assert!(args.contains(&"bestaudio/best".to_string()));
        assert!(args.contains(&"--no-playlist".to_string()));
        assert!(!args.contains(&"--extract-audio".to_string()));
    }

    #[test]
    fn escapes_percent_in_template() {
        let ytdlp = YtDlp::new("yt-dlp", Some("mp3".into()));
        let args = ytdlp.args("100% Pure Love", Path::new("downloads/100% Pure Love"));

        assert!(args.contains(&"downloads/100%% Pure Love.%(ext)s".to_string()));
        assert!(args.contains(&"--extract-audio".to_string()));
        assert!(args.contains(&"mp3".to_string()));
    }

    #[tokio::test]
    async fn checks_binary_once() {
        let ytdlp = YtDlp::new("sporldl-missing-yt-dlp", None);
        let clone = ytdlp.clone();
        assert_eq!(ytdlp.available.get(), None);

        let first = ytdlp.download("One More Time", Path::new("unused")).await;
        assert_eq!(ytdlp.available.get(), Some(&false));

        let second = clone.download("Get Lucky", Path::new("unused")).await;
        assert_eq!(first.unwrap_err(), "sporldl-missing-yt-dlp is not installed or not in PATH");
        assert_eq!(second.unwrap_err(), "sporldl-missing-yt-dlp is not installed or not in PATH");
        assert_eq!(Arc::strong_count(&ytdlp.available), 2);
    }
}
