use crate::modes::TranslationMode;

/// Build the single prompt string sent to the generation endpoint
pub fn build_prompt(input_text: &str, mode: TranslationMode) -> String {
    format!(
        "{}\n\nOriginal message: \"{}\"\n\nWhat they really meant (respond in one sentence):",
        mode.system_prompt(),
        input_text
    )
}
