//! Canned and model-backed topic explanations.
//!
//! Glossary lookup first, free-text completion second, templated
//! placeholder last. This path never propagates a failure to the caller.

use std::sync::Arc;

use tracing::warn;

use phoneguide_llm::CompletionClient;

use crate::composer::SYSTEM_PROMPT;

/// Canned explanations, iterated in order. Keys are authored longest
/// first so compound topics ("ois vs eis") win over their component
/// terms ("ois", "eis") under substring matching.
const GLOSSARY: &[(&str, &str)] = &[
    (
        "performance",
        "Performance is driven by processor (SoC), RAM, and cooling. Snapdragon 8 Gen series and \
         Dimensity 8000/9000 series offer flagship performance. For gaming, look for phones with \
         good thermal management and high refresh rate displays.",
    ),
    (
        "ois vs eis",
        "OIS vs EIS: OIS uses physical hardware (better for photos, no quality loss) while EIS uses \
         software (good for video, may crop image). Flagship phones often use both - OIS for photos \
         and hybrid stabilization for video. For photography, OIS is superior.",
    ),
    (
        "battery",
        "Battery life depends on capacity (mAh), processor efficiency, and software optimization. \
         Phones with 5000mAh+ batteries like OnePlus Nord CE 4 offer excellent endurance. \
         Fast charging (67W+) quickly replenishes battery, useful for heavy users.",
    ),
    (
        "display",
        "Display quality depends on type (OLED vs AMOLED), refresh rate (60Hz vs 120Hz+), and \
         brightness. OLED displays offer better colors and contrast. High refresh rates (120Hz+) \
         provide smoother scrolling and gaming. Look for good outdoor visibility (high nits brightness).",
    ),
    (
        "camera",
        "Smartphone cameras vary by sensor size, megapixels, and processing. Larger sensors (like in \
         Google Pixel) capture more light. Megapixels matter for detail but sensor quality is more important. \
         Look for phones with good OIS, large sensors, and proven computational photography.",
    ),
    (
        "ois",
        "OIS (Optical Image Stabilization) uses physical lens/sensor movement to counteract \
         camera shake. It's better for low-light photos and video, providing smoother stabilization \
         without cropping the image. Phones like Google Pixel and Samsung flagships have excellent OIS.",
    ),
    (
        "eis",
        "EIS (Electronic Image Stabilization) uses software and gyroscope data to stabilize video \
         by cropping and adjusting the frame. It's more common in budget phones and works well for \
         video but can reduce image quality slightly due to cropping.",
    ),
];

/// Maps a topic string to a canned or model-generated explanation.
pub struct ExplanationResolver {
    completion: Arc<dyn CompletionClient>,
}

impl ExplanationResolver {
    pub fn new(completion: Arc<dyn CompletionClient>) -> Self {
        Self { completion }
    }

    /// Explain a topic.
    ///
    /// Case-insensitive substring lookup against the glossary; first
    /// matching key wins. On a miss, asks the completion service; if that
    /// also fails, returns a templated placeholder.
    pub async fn explain(&self, topic: &str) -> String {
        let topic_lower = topic.to_lowercase();
        for (key, text) in GLOSSARY {
            if topic_lower.contains(key) {
                return (*text).to_string();
            }
        }

        let prompt = format!(
            "Explain this smartphone topic in simple terms under 150 words: {}",
            topic
        );
        match self.completion.complete_text(SYSTEM_PROMPT, &prompt).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) | Err(_) => {
                warn!(topic, "Explanation completion unavailable; using placeholder");
                format!("I can explain {}. In smartphones, this refers to...", topic)
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
