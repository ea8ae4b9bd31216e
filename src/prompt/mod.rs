/// Instruction block placed ahead of the subtitles handed to a translation service
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with a `{target_language}` placeholder
    template: String,
}

impl PromptTemplate {
    /// The default instructions for subtitle translation.
    pub const SUBTITLE_TRANSLATION: &'static str = "Translate the subtitles into {target_language}
1 Keep the exact number of lines and the original timestamps
2 Use an instructive, conversational style with natural {target_language} constructions
3 Stick strictly to the terminology

The result must be text in the same format as the original

";

    pub const DEFAULT_TARGET_LANGUAGE: &'static str = "English";

    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    pub fn subtitle_translation() -> Self {
        Self::new(Self::SUBTITLE_TRANSLATION)
    }

    /// Render the instruction block for the given language
    pub fn render(&self, target_language: &str) -> String {
        self.template.replace("{target_language}", target_language)
    }

    /// Prepend the rendered instructions to the subtitle text; the subtitles are not inspected
    pub fn build(&self, target_language: &str, srt_content: &str) -> String {
        let mut prompt = self.render(target_language);
        prompt.push_str(srt_content);
        prompt
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::subtitle_translation()
    }
}

/// Build a translation prompt with the default template
pub fn create_translation_prompt(srt_content: &str, target_language: &str) -> String {
    PromptTemplate::default().build(target_language, srt_content)
}
