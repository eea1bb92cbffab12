//! Build and store commands driven by the CLI.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{EventKind, RecursiveMode};
use tracing::{debug, error, info, warn};

use tabrs_core::config::constants;
use tabrs_core::core::output::HtmlOutputHandler;
use tabrs_core::core::tabset::{StoredTab, parse_tabs};
use tabrs_core::error::{Result, TabrsError};
use tabrs_core::pipeline::{self, PipeMap, Pipeline};

use crate::pipeline::nodes::{
    HtmlGeneratorNode, HtmlWriterNode, TabSetParserNode, TabSourceReaderNode,
};
use crate::record::{NewTabSet, TabSetPatch, TabSetRecord};
use crate::store::TabSetStore;

/// Check if the file is a tab-set source file
pub fn is_tabset_source(path: &Path) -> bool {
    if let Some(extension) = path.extension() {
        let ext = extension.to_string_lossy().to_lowercase();
        return constants::TABSET_EXTENSIONS.contains(&ext.as_str());
    }
    false
}

pub async fn build_command(source: PathBuf, output_path: PathBuf, watch: bool) -> Result<()> {
    debug!("Starting build command");
    debug!("Source: {:?}", source);
    debug!("Output: {:?}", output_path);
    debug!("Watch mode: {}", watch);

    build_once(&source, &output_path, false).await?;

    if watch {
        info!("Entering watch mode...");
        watch_and_rebuild(source, output_path).await?;
    }

    Ok(())
}

/// Build using the pipeline system
async fn build_once(source: &Path, output_path: &Path, is_rebuild: bool) -> Result<()> {
    debug!("Starting pipeline-based build process...");

    let pipeline = Pipeline::new("TabrsBuildPipeline")
        .with_external_inputs(vec![
            "source".to_string(),
            "output_path".to_string(),
            "is_rebuild".to_string(),
        ])
        .add_node(Box::new(TabSourceReaderNode))
        .add_node(Box::new(TabSetParserNode))
        .add_node(Box::new(HtmlGeneratorNode))
        .add_node(Box::new(HtmlWriterNode));

    let mut pipe_data = PipeMap::new();
    pipe_data.insert_typed(pipeline::SOURCE, source.to_path_buf());
    pipe_data.insert_typed(pipeline::OUTPUT_PATH, output_path.to_path_buf());
    pipe_data.insert_typed(pipeline::IS_REBUILD, is_rebuild);

    pipeline.execute(pipe_data).await?;

    if is_rebuild {
        debug!("Pipeline rebuild completed successfully");
    } else {
        info!("Pipeline build completed successfully");
    }

    Ok(())
}

/// Watch the source file and rebuild on change
async fn watch_and_rebuild(source: PathBuf, output_path: PathBuf) -> Result<()> {
    use notify::{Config, RecommendedWatcher, Watcher};
    use std::sync::mpsc;

    let (tx, rx) = mpsc::channel();

    let mut watcher = RecommendedWatcher::new(
        move |res| {
            if let Err(e) = tx.send(res) {
                error!("Failed to send watch event: {}", e);
            }
        },
        Config::default(),
    )
    .map_err(|e| TabrsError::other(e.to_string()))?;

    if source.is_dir() {
        watcher
            .watch(&source, RecursiveMode::Recursive)
            .map_err(|e| TabrsError::other(e.to_string()))?;
        debug!("Watching directory: {:?}", source);
    } else if let Some(parent) = source.parent() {
        let parent = if parent.as_os_str().is_empty() {
            Path::new(".")
        } else {
            parent
        };
        watcher
            .watch(parent, RecursiveMode::NonRecursive)
            .map_err(|e| TabrsError::other(e.to_string()))?;
        debug!("Watching file parent directory: {:?}", parent);
    }

    debug!("File watcher initialized. Waiting for changes...");

    let source_name = source.file_name().map(|n| n.to_os_string());
    let mut pending_changes: HashSet<PathBuf> = HashSet::new();
    let mut last_event_time = std::time::Instant::now();

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(Ok(event)) => match event.kind {
                EventKind::Create(_) | EventKind::Modify(_) => {
                    let relevant_paths: Vec<_> = event
                        .paths
                        .iter()
                        .filter(|path| {
                            is_tabset_source(path)
                                && (source.is_dir()
                                    || path.file_name().map(|n| n.to_os_string()) == source_name)
                        })
                        .cloned()
                        .collect();

                    if !relevant_paths.is_empty() {
                        for path in relevant_paths {
                            pending_changes.insert(path);
                        }
                        last_event_time = std::time::Instant::now();
                    }
                }
                _ => {}
            },
            Ok(Err(e)) => {
                warn!("Watch error: {}", e);
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                if !pending_changes.is_empty()
                    && last_event_time.elapsed() >= Duration::from_millis(200)
                {
                    let changed_files: Vec<_> = pending_changes.iter().cloned().collect();
                    pending_changes.clear();

                    info!("Detected changes in source files: {:?}", changed_files);

                    match build_once(&source, &output_path, true).await {
                        Ok(()) => debug!("Rebuild completed successfully"),
                        Err(e) => error!("Rebuild failed: {}", e),
                    }
                }
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                error!("Watch channel disconnected");
                break;
            }
        }
    }

    Ok(())
}

/// Parse a tab-set source file, compile it, and persist a new record
pub async fn save_tabset(
    store: &dyn TabSetStore,
    source: &Path,
    title: Option<String>,
) -> Result<TabSetRecord> {
    let raw = tokio::fs::read_to_string(source).await?;
    let tabs = parse_tabs(&raw)?;
    let html = HtmlOutputHandler::generate_html(&tabs);

    store
        .create(NewTabSet {
            title: title.unwrap_or_default(),
            tabs: StoredTab::sequence(&tabs),
            html,
        })
        .await
}

/// Reparse a tab-set source file, regenerate the document, and patch the
/// record in place
pub async fn update_tabset(
    store: &dyn TabSetStore,
    id: &str,
    source: &Path,
    title: Option<String>,
) -> Result<TabSetRecord> {
    let raw = tokio::fs::read_to_string(source).await?;
    let tabs = parse_tabs(&raw)?;
    let html = HtmlOutputHandler::generate_html(&tabs);

    let mut patch = TabSetPatch::new()
        .tabs(StoredTab::sequence(&tabs))
        .html(html);
    patch.title = title;

    store.update(id, patch).await
}
