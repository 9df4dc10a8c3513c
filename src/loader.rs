//! Molfile acquisition.
//!
//! Loading is two stages: fetching the raw text (file or HTTP), which runs
//! on a background thread, and parse-and-build, which the host runs once
//! the text arrives. [`LoadPipeline`] carries the handoff between them.

use std::fmt;
use std::path::PathBuf;
use std::sync::mpsc;

use crate::error::MolviewError;
use crate::io::molfile;
use crate::options::{ColorOptions, GeometryOptions, ParseOptions};
use crate::renderer::geometry::{BallAndStickBuilder, MoleculeGroup};

/// Where molfile text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Local file path.
    Path(PathBuf),
    /// `http://` or `https://` URL.
    Url(String),
}

impl Source {
    /// Interpret a user-supplied string: anything with an HTTP(S) scheme is
    /// a URL, everything else a path.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(trimmed.to_owned())
        } else {
            Self::Path(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Retrieves the raw text behind a [`Source`].
pub trait Fetch: Send + 'static {
    /// Fetch the full text.
    ///
    /// # Errors
    ///
    /// Returns [`MolviewError::Fetch`] (or [`MolviewError::Io`]) when the
    /// text cannot be retrieved.
    fn fetch(&self, source: &Source) -> Result<String, MolviewError>;
}

/// Reads local files. URLs are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFetcher;

impl Fetch for FileFetcher {
    fn fetch(&self, source: &Source) -> Result<String, MolviewError> {
        match source {
            Source::Path(path) => std::fs::read_to_string(path).map_err(|e| {
                MolviewError::Fetch(format!(
                    "failed to read {}: {e}",
                    path.display()
                ))
            }),
            Source::Url(url) => Err(MolviewError::Fetch(format!(
                "{url}: HTTP fetching is not available"
            ))),
        }
    }
}

/// Fetches URLs over HTTP(S) with `ureq`; paths go through [`FileFetcher`].
#[cfg(feature = "fetch")]
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpFetcher;

#[cfg(feature = "fetch")]
impl Fetch for HttpFetcher {
    fn fetch(&self, source: &Source) -> Result<String, MolviewError> {
        let Source::Url(url) = source else {
            return FileFetcher.fetch(source);
        };
        log::info!("downloading {url}");
        ureq::get(url)
            .call()
            .map_err(|e| {
                MolviewError::Fetch(format!("failed to download {url}: {e}"))
            })?
            .into_body()
            .read_to_string()
            .map_err(|e| {
                MolviewError::Fetch(format!("failed to read response: {e}"))
            })
    }
}

/// The default fetcher for this build: HTTP-capable when the `fetch`
/// feature is on, files only otherwise.
#[must_use]
pub fn default_fetcher() -> Box<dyn Fetch> {
    #[cfg(feature = "fetch")]
    {
        Box::new(HttpFetcher)
    }
    #[cfg(not(feature = "fetch"))]
    {
        Box::new(FileFetcher)
    }
}

impl Fetch for Box<dyn Fetch> {
    fn fetch(&self, source: &Source) -> Result<String, MolviewError> {
        (**self).fetch(source)
    }
}

/// Parse molfile text and build its ball-and-stick group.
///
/// # Errors
///
/// Returns [`MolviewError::Malformed`] if the text is not a valid molfile.
pub fn build_from_text(
    text: &str,
    parse: &ParseOptions,
    geometry: &GeometryOptions,
    colors: &ColorOptions,
) -> Result<MoleculeGroup, MolviewError> {
    let molecule = molfile::parse_with(text, parse)?;
    Ok(BallAndStickBuilder::new(geometry, colors).build(&molecule))
}

/// Fetch, parse and build on the calling thread.
///
/// # Errors
///
/// Returns the fetch error unchanged, or [`MolviewError::Malformed`] from
/// parsing.
pub fn load_blocking(
    source: &Source,
    fetcher: &dyn Fetch,
    parse: &ParseOptions,
    geometry: &GeometryOptions,
    colors: &ColorOptions,
) -> Result<MoleculeGroup, MolviewError> {
    let text = fetcher.fetch(source)?;
    build_from_text(&text, parse, geometry, colors)
}

/// A fetch running on a background thread.
///
/// The result resolves exactly once: [`LoadPipeline::try_take`] yields it
/// on the first poll after it arrives and `None` forever after.
#[derive(Debug)]
pub struct LoadPipeline {
    source: Source,
    result_rx: mpsc::Receiver<Result<String, MolviewError>>,
    thread: Option<std::thread::JoinHandle<()>>,
    resolved: bool,
}

impl LoadPipeline {
    /// Start fetching `source` on a thread named `molecule-fetch`.
    ///
    /// # Errors
    ///
    /// Returns [`MolviewError::ThreadSpawn`] if the thread cannot start.
    pub fn spawn<F: Fetch>(
        source: Source,
        fetcher: F,
    ) -> Result<Self, MolviewError> {
        let (result_tx, result_rx) = mpsc::sync_channel(1);
        let thread_source = source.clone();

        let thread = std::thread::Builder::new()
            .name("molecule-fetch".into())
            .spawn(move || {
                let result = fetcher.fetch(&thread_source);
                let _ = result_tx.send(result);
            })
            .map_err(MolviewError::ThreadSpawn)?;

        log::info!("loading {source}");
        Ok(Self {
            source,
            result_rx,
            thread: Some(thread),
            resolved: false,
        })
    }

    /// Source being fetched.
    #[must_use]
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Whether the result has already been handed out.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Non-blocking check for the fetched text.
    pub fn try_take(&mut self) -> Option<Result<String, MolviewError>> {
        if self.resolved {
            return None;
        }
        let result = match self.result_rx.try_recv() {
            Ok(result) => result,
            Err(mpsc::TryRecvError::Empty) => return None,
            Err(mpsc::TryRecvError::Disconnected) => Err(MolviewError::Fetch(
                format!("{}: fetch thread exited without a result", self.source),
            )),
        };
        self.resolved = true;
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
        Some(result)
    }

    /// Block until the fetched text arrives.
    ///
    /// Returns `None` if the result was already taken.
    pub fn wait(&mut self) -> Option<Result<String, MolviewError>> {
        if self.resolved {
            return None;
        }
        let result = self.result_rx.recv().unwrap_or_else(|_| {
            Err(MolviewError::Fetch(format!(
                "{}: fetch thread exited without a result",
                self.source
            )))
        });
        self.resolved = true;
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
        Some(result)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const ASPIRIN: &str =
        include_str!("../assets/molecules/aspirin.mol");

    /// Serves fixed text, or a fetch error when `text` is `None`.
    pub(crate) struct StaticFetcher {
        pub(crate) text: Option<&'static str>,
    }

    impl Fetch for StaticFetcher {
        fn fetch(&self, _source: &Source) -> Result<String, MolviewError> {
            self.text
                .map(str::to_owned)
                .ok_or_else(|| MolviewError::Fetch("connection refused".into()))
        }
    }

    #[test]
    fn source_parse_detects_urls() {
        assert_eq!(
            Source::parse("https://example.org/a.mol"),
            Source::Url("https://example.org/a.mol".into())
        );
        assert_eq!(
            Source::parse("HTTP://example.org/a.mol"),
            Source::Url("HTTP://example.org/a.mol".into())
        );
        assert_eq!(
            Source::parse(" molecules/a.mol "),
            Source::Path(PathBuf::from("molecules/a.mol"))
        );
    }

    #[test]
    fn file_fetcher_reads_and_reports_missing() {
        let dir = std::env::temp_dir().join("molview_loader_test");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("aspirin.mol");
        std::fs::write(&path, ASPIRIN).unwrap();

        let text = FileFetcher.fetch(&Source::Path(path)).unwrap();
        assert_eq!(text, ASPIRIN);

        let missing = FileFetcher.fetch(&Source::Path(dir.join("nope.mol")));
        assert!(matches!(missing, Err(MolviewError::Fetch(_))));

        let url = FileFetcher.fetch(&Source::parse("https://example.org/x"));
        assert!(matches!(url, Err(MolviewError::Fetch(_))));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_blocking_builds_group() {
        let group = load_blocking(
            &Source::parse("aspirin.mol"),
            &StaticFetcher { text: Some(ASPIRIN) },
            &ParseOptions::default(),
            &GeometryOptions::default(),
            &ColorOptions::default(),
        )
        .unwrap();
        assert_eq!(group.sphere_count(), 21);
        assert_eq!(group.cylinder_count(), 26);
    }

    #[test]
    fn load_blocking_passes_fetch_error_through() {
        let err = load_blocking(
            &Source::parse("aspirin.mol"),
            &StaticFetcher { text: None },
            &ParseOptions::default(),
            &GeometryOptions::default(),
            &ColorOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, MolviewError::Fetch(_)));
    }

    #[test]
    fn pipeline_resolves_exactly_once() {
        let mut pipeline = LoadPipeline::spawn(
            Source::parse("aspirin.mol"),
            StaticFetcher { text: Some(ASPIRIN) },
        )
        .unwrap();

        let text = pipeline.wait().unwrap().unwrap();
        assert_eq!(text, ASPIRIN);
        assert!(pipeline.is_resolved());
        assert!(pipeline.try_take().is_none());
        assert!(pipeline.wait().is_none());
    }

    #[test]
    fn pipeline_try_take_eventually_yields_error() {
        let mut pipeline = LoadPipeline::spawn(
            Source::parse("https://example.org/missing.mol"),
            StaticFetcher { text: None },
        )
        .unwrap();

        let result = loop {
            if let Some(result) = pipeline.try_take() {
                break result;
            }
            std::thread::yield_now();
        };
        assert!(matches!(result, Err(MolviewError::Fetch(_))));
        assert!(pipeline.try_take().is_none());
    }
}
