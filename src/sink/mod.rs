use arboard::Clipboard;

use crate::ConverterError;

/// Target that receives the generated translation prompt
#[cfg_attr(test, mockall::automock)]
pub trait PromptSink {
    /// Get the name of this sink
    fn name(&self) -> &'static str;

    /// Hand the full prompt text to the sink
    fn deliver(&mut self, text: &str) -> Result<(), ConverterError>;
}

/// System clipboard sink
#[derive(Default)]
pub struct ClipboardSink {
    clipboard: Option<Clipboard>,
}

impl ClipboardSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PromptSink for ClipboardSink {
    fn name(&self) -> &'static str {
        "clipboard"
    }

    fn deliver(&mut self, text: &str) -> Result<(), ConverterError> {
        // Opened on first delivery
        let clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(|e| {
                ConverterError::SinkDeliveryFailed(format!("Failed to initialize clipboard: {}", e))
            })?,
        };
        let clipboard = self.clipboard.insert(clipboard);

        clipboard
            .set_text(text)
            .map_err(|e| ConverterError::SinkDeliveryFailed(format!("Failed to copy to clipboard: {}", e)))?;

        tracing::info!("Copied {} chars to {}", text.len(), self.name());
        Ok(())
    }
}

/// Outcome of a best-effort prompt delivery
#[derive(Debug, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    /// The sink failed; the prompt must be surfaced some other way
    Failed(String),
}

/// Deliver the prompt, downgrading any sink error to [`Delivery::Failed`]
pub fn deliver_prompt(sink: &mut dyn PromptSink, prompt: &str) -> Delivery {
    match sink.deliver(prompt) {
        Ok(()) => Delivery::Delivered,
        Err(err) => {
            tracing::warn!("Could not deliver prompt to {}: {}", sink.name(), err);
            Delivery::Failed(err.to_string())
        }
    }
}
