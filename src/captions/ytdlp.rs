use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use log::{debug, error};
use reqwest::Client;
use tokio::process::Command;

use crate::captions::model::{LanguagePreference, TrackCollections, TrackDescriptor};
use crate::captions::source::CaptionSource;
use crate::errors::CaptionError;

/// Caption source backed by the `yt-dlp` executable and plain HTTP downloads
#[derive(Debug)]
pub struct YtDlpSource {
    /// Path or name of the yt-dlp executable
    program: String,
    /// HTTP client for payload downloads
    client: Client,
    /// Optional timeout applied to the metadata call
    timeout: Option<Duration>,
}

impl YtDlpSource {
    /// Create a new source
    ///
    /// Without a timeout, the transport defaults apply.
    pub fn new(program: impl Into<String>, timeout: Option<Duration>) -> Result<Self, CaptionError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()
            .map_err(|e| CaptionError::ClientSetup(e.to_string()))?;

        Ok(Self {
            program: program.into(),
            client,
            timeout,
        })
    }

    /// Arguments for a metadata-only run with subtitle intent
    pub fn metadata_args(url: &str, languages: &LanguagePreference) -> Vec<String> {
        vec![
            "--dump-single-json".to_string(),
            "--skip-download".to_string(),
            "--write-subs".to_string(),
            "--write-auto-subs".to_string(),
            "--sub-langs".to_string(),
            languages.joined(),
            "--no-warnings".to_string(),
            "--quiet".to_string(),
            url.to_string(),
        ]
    }

    async fn run_metadata(&self, args: &[String]) -> Result<std::process::Output, CaptionError> {
        let future = Command::new(&self.program)
            .args(args)
            .kill_on_drop(true)
            .output();

        let result = match self.timeout {
            Some(timeout) => tokio::select! {
                result = future => result,
                _ = tokio::time::sleep(timeout) => {
                    return Err(CaptionError::Timeout {
                        operation: "metadata fetch",
                        secs: timeout.as_secs(),
                    });
                }
            },
            None => future.await,
        };

        result.map_err(|e| CaptionError::ToolLaunch {
            program: self.program.clone(),
            message: e.to_string(),
        })
    }
}

/// Parse a yt-dlp metadata document into track collections
pub fn parse_metadata(json: &[u8]) -> Result<TrackCollections, CaptionError> {
    serde_json::from_slice(json).map_err(|e| CaptionError::metadata_parse(e.to_string()))
}

#[async_trait]
impl CaptionSource for YtDlpSource {
    async fn resolve_tracks(
        &self,
        url: &str,
        languages: &LanguagePreference,
    ) -> Result<TrackCollections, CaptionError> {
        let args = Self::metadata_args(url, languages);
        debug!("Running {} {}", self.program, args.join(" "));

        let output = self.run_metadata(&args).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("{} failed: {}", self.program, stderr.trim());
            return Err(CaptionError::MetadataFetch(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let collections = parse_metadata(&output.stdout)?;
        debug!(
            "Resolved {} automatic and {} manual caption languages",
            collections.automatic.len(),
            collections.manual.len()
        );
        Ok(collections)
    }

    async fn fetch_payload(&self, track: &TrackDescriptor) -> Result<Bytes, CaptionError> {
        debug!("Downloading {} caption payload", track.ext);
        let response = self.client.get(&track.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            return Err(CaptionError::HttpStatus {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        Ok(response.bytes().await?)
    }
}
