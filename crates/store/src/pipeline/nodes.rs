// Build pipeline nodes for I/O operations

use async_trait::async_trait;
use tracing::{debug, info};

use tabrs_core::core::output::HtmlOutputHandler;
use tabrs_core::core::tabset::parse_tabs;
use tabrs_core::error::{Result, TabrsError};
use tabrs_core::pipeline::{self, PipeMap, PipeNode};

/// Tab source reader node - load the tab-set source file
pub struct TabSourceReaderNode;

#[async_trait]
impl PipeNode for TabSourceReaderNode {
    fn name(&self) -> String {
        "TabSourceReader".to_string()
    }

    fn input(&self) -> Vec<String> {
        vec!["source".to_string()]
    }

    fn output(&self) -> Vec<String> {
        vec!["raw_source".to_string()]
    }

    async fn process(&self, mut data: PipeMap) -> Result<PipeMap> {
        let source = data
            .get_typed(pipeline::SOURCE)
            .ok_or_else(|| TabrsError::missing_input("source"))?;

        debug!("Reading tab-set source: {:?}", source);
        let raw = tokio::fs::read_to_string(source).await?;

        data.insert_typed(pipeline::RAW_SOURCE, raw);
        Ok(data)
    }
}

/// Tab set parser node - parse the raw source into tabs
pub struct TabSetParserNode;

#[async_trait]
impl PipeNode for TabSetParserNode {
    fn name(&self) -> String {
        "TabSetParser".to_string()
    }

    fn input(&self) -> Vec<String> {
        vec!["raw_source".to_string()]
    }

    fn output(&self) -> Vec<String> {
        vec!["tabs".to_string()]
    }

    async fn process(&self, mut data: PipeMap) -> Result<PipeMap> {
        let is_rebuild = *data.get_typed(pipeline::IS_REBUILD).unwrap_or(&false);
        let raw = data
            .get_typed(pipeline::RAW_SOURCE)
            .ok_or_else(|| TabrsError::missing_input("raw_source"))?;

        let tabs = parse_tabs(raw)?;

        if is_rebuild {
            debug!("Parsed {} tabs", tabs.len());
        } else {
            info!("Parsed {} tabs", tabs.len());
        }

        data.insert_typed(pipeline::TABS, tabs);
        Ok(data)
    }
}

/// HTML generator node - compile tabs into the standalone document
pub struct HtmlGeneratorNode;

#[async_trait]
impl PipeNode for HtmlGeneratorNode {
    fn name(&self) -> String {
        "HtmlGenerator".to_string()
    }

    fn input(&self) -> Vec<String> {
        vec!["tabs".to_string()]
    }

    fn output(&self) -> Vec<String> {
        vec!["html_content".to_string()]
    }

    async fn process(&self, mut data: PipeMap) -> Result<PipeMap> {
        let tabs = data
            .get_typed(pipeline::TABS)
            .ok_or_else(|| TabrsError::missing_input("tabs"))?;

        let html = HtmlOutputHandler::generate_html(tabs);
        debug!("Generated document: {} bytes", html.len());

        data.insert_typed(pipeline::HTML_CONTENT, html);
        Ok(data)
    }
}

/// HTML writer node - write the generated document to the output path
pub struct HtmlWriterNode;

#[async_trait]
impl PipeNode for HtmlWriterNode {
    fn name(&self) -> String {
        "HtmlWriter".to_string()
    }

    fn input(&self) -> Vec<String> {
        vec!["html_content".to_string(), "output_path".to_string()]
    }

    fn output(&self) -> Vec<String> {
        vec![]
    }

    async fn process(&self, data: PipeMap) -> Result<PipeMap> {
        let is_rebuild = *data.get_typed(pipeline::IS_REBUILD).unwrap_or(&false);
        let html = data
            .get_typed(pipeline::HTML_CONTENT)
            .ok_or_else(|| TabrsError::missing_input("html_content"))?;
        let output_path = data
            .get_typed(pipeline::OUTPUT_PATH)
            .ok_or_else(|| TabrsError::missing_input("output_path"))?;

        tokio::fs::write(output_path, html).await?;

        if is_rebuild {
            debug!("Rewrote {:?}", output_path);
        } else {
            info!("Wrote {:?}", output_path);
        }

        Ok(data)
    }
}
