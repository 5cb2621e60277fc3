//! Request/response contract for the generative layout-suggestion service.
//! The service itself lives outside this crate behind [`LayoutAdvisor`].

use crate::error::SheetError;
use crate::record::VehicleConfig;
use serde_json::Value;

pub type AdvisorFailure = Box<dyn std::error::Error + Send + Sync>;

const GENERIC_FAILURE: &str = "failed to get layout suggestion";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentLength {
    Short,
    Medium,
    Long,
}

impl ContentLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentLength::Short => "short",
            ContentLength::Medium => "medium",
            ContentLength::Long => "long",
        }
    }

    /// Rough size of a record's variable content, judged by its equipment list.
    pub fn for_config(config: &VehicleConfig) -> Self {
        match config.equipment.populated().len() {
            0..=3 => ContentLength::Short,
            4..=7 => ContentLength::Medium,
            _ => ContentLength::Long,
        }
    }
}

impl std::str::FromStr for ContentLength {
    type Err = SheetError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(ContentLength::Short),
            "medium" => Ok(ContentLength::Medium),
            "long" => Ok(ContentLength::Long),
            other => Err(SheetError::InvalidRecord(format!(
                "content length must be short, medium or long, got {other:?}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    pub content_length: ContentLength,
    pub branding: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSuggestion {
    pub suggestion: String,
    pub reasoning: String,
}

/// A text-generation backend. Receives the full prompt and returns the raw
/// JSON reply.
pub trait LayoutAdvisor {
    fn complete(&self, prompt: &str) -> Result<String, AdvisorFailure>;
}

impl<F> LayoutAdvisor for F
where
    F: Fn(&str) -> Result<String, AdvisorFailure>,
{
    fn complete(&self, prompt: &str) -> Result<String, AdvisorFailure> {
        self(prompt)
    }
}

pub fn prompt_for(request: &SuggestionRequest) -> String {
    format!(
        "You are an expert in document layout and design. Based on the content length and \
branding elements provided, suggest an optimal layout for a DIN A4 PDF to improve readability \
and visual appeal.\n\n\
Content Length: {}\n\
Branding Elements: {}\n\n\
Consider factors such as font sizes, margins, image placement, and color usage to create a \
visually appealing and easy-to-read document. Explain the reasoning behind your suggestion.\n\
Reply with a JSON object with the string fields \"layoutSuggestion\" and \"reasoning\".\n",
        request.content_length.as_str(),
        request.branding.trim()
    )
}

pub fn parse_suggestion(raw: &str) -> Option<LayoutSuggestion> {
    let value: Value = serde_json::from_str(raw.trim()).ok()?;
    let field = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };
    Some(LayoutSuggestion {
        suggestion: field("layoutSuggestion")?,
        reasoning: field("reasoning")?,
    })
}

/// One attempt, no retries. Every failure collapses into the same generic
/// error so backend details never reach the caller.
pub fn request_layout_suggestion(
    advisor: &dyn LayoutAdvisor,
    request: &SuggestionRequest,
) -> Result<LayoutSuggestion, SheetError> {
    let reply = advisor
        .complete(&prompt_for(request))
        .map_err(|_| SheetError::Suggestion(GENERIC_FAILURE.to_string()))?;
    parse_suggestion(&reply).ok_or_else(|| SheetError::Suggestion(GENERIC_FAILURE.to_string()))
}
