//! Message-driven export session: run and cancel requests in, terminal
//! document messages out.

use vartok_protocol::{ExportConfig, ExportMessage, UiRequest};

use crate::export::{self, ExportError};
use crate::model::VariableSnapshot;

/// Drives exports for one UI surface.
///
/// A run is atomic: all three documents are built before the first message
/// is constructed, so a failure emits nothing. Cancellation closes the
/// session for good; a closed session swallows every further request.
#[derive(Debug, Default)]
pub struct ExportSession {
    config: ExportConfig,
    closed: bool,
}

impl ExportSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preferences from the most recent run request.
    pub fn config(&self) -> ExportConfig {
        self.config
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Handle one request. Runs emit base, theme, and merged documents in
    /// that order; everything else emits nothing.
    pub fn handle_request(
        &mut self,
        snapshot: &VariableSnapshot,
        request: UiRequest,
    ) -> Result<Vec<ExportMessage>, ExportError> {
        if self.closed {
            return Ok(Vec::new());
        }

        match request {
            UiRequest::Run { config } => {
                self.config = config;
                let tokens = export::export_tokens(snapshot);
                Ok(vec![
                    ExportMessage::BaseTokens(export::to_document_json(&tokens.base)?),
                    ExportMessage::ThemeTokens(tokens.theme),
                    ExportMessage::MergedTokens(export::to_document_json(&tokens.merged)?),
                ])
            }
            UiRequest::Cancel => {
                self.closed = true;
                Ok(Vec::new())
            }
        }
    }
}
