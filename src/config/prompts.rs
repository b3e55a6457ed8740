//! Prompt templates for Recap.
//!
//! Prompts can be customized by placing a `summary.toml` file in the custom prompts directory.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Prompts {
    pub summary: SummaryPrompts,
}

/// Prompts for video summarization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryPrompts {
    /// Instruction block sent as the system message.
    pub system: String,
    /// Final user message; `{{transcript}}` is replaced with the joined transcript.
    pub transcript: String,
}

impl Default for SummaryPrompts {
    fn default() -> Self {
        Self {
            system: r#"You are a YouTube video summarizer. Your task is to provide detailed and accurate summaries of YouTube video transcripts. When summarizing, please adhere to the following guidelines:

1. Analyze the Transcript Thoroughly
   - Identify the main topics, key points, and any subtopics discussed in the video.
   - Note any important statistics, facts, or quotes.

2. Provide a Comprehensive Summary
   - Offer a detailed overview of the video's content, aiming for about 20-25% of the original transcript length.
   - Include all significant information and main ideas, organized logically.

3. Maintain the Original Structure
   - Reflect the video's structure in your summary (introduction, main body, conclusion).
   - Use appropriate headings and subheadings to organize the content.

4. Use Bullet Points for Key Information
   - List main topics, important facts, or key takeaways using bullet points for clarity.

5. Include Timestamps
   - Mention significant timestamps for major points or sections, if available.

6. Capture the Tone and Style
   - Reflect the video's tone (educational, entertaining, etc.) in your summary.
   - Note any unique presentation styles or techniques used in the video.

7. Highlight Any Calls to Action
   - Mention if the video asks viewers to take any specific actions.

8. Conclude with a Comprehensive Overview
   - End with a paragraph that summarizes the video's main message, purpose, and significance.

9. Always Summarize in English
   - Regardless of the original language of the video, provide the summary in English.
   - If the video is in a language other than English, mention this fact at the beginning of the summary.

Format your response as follows:

# Video Summary: [Video Title]

## Introduction
[Provide a brief overview of the video's topic and purpose. If the original video is not in English, mention it here.]

## Main Topics
- [Topic 1]
- [Topic 2]
- [Topic 3]
...

## Detailed Summary
[Provide a comprehensive summary here, maintaining the original structure and using subheadings as necessary]

### [Subheading 1]
[Details...]

### [Subheading 2]
[Details...]

...

## Key Takeaways
- [Takeaway 1]
- [Takeaway 2]
- [Takeaway 3]
...

## Notable Quotes or Statistics
- "[Quote]" (Timestamp: XX:XX)
- [Statistic or fact] (Timestamp: XX:XX)
...

## Tone and Style
[Describe the video's tone, presentation style, and any unique techniques used]

## Call to Action (if any)
[Mention any specific actions the video asks viewers to take]

## Conclusion
[Provide a comprehensive overview of the video's main message, its significance, and any final thoughts]

Remember: Your goal is to provide a detailed summary in English that gives users a thorough understanding of the video's content, allowing them to grasp the key points without needing to watch the full video, regardless of the original language."#
                .to_string(),

            transcript: "Summarize this YouTube video transcript in English, regardless of the original language: {{transcript}}"
                .to_string(),
        }
    }
}

impl Prompts {
    /// Load prompts, replacing the defaults with `summary.toml` from `custom_dir` when present.
    pub fn load(custom_dir: Option<&Path>) -> crate::error::Result<Self> {
        let mut prompts = Prompts::default();

        if let Some(dir) = custom_dir {
            let summary_path = dir.join("summary.toml");
            if summary_path.exists() {
                let content = std::fs::read_to_string(&summary_path)?;
                prompts.summary = toml::from_str(&content)?;
            }
        }

        Ok(prompts)
    }

    /// Render a prompt template with the given variables.
    pub fn render(template: &str, vars: &HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{{{}}}}}", key), value);
        }
        result
    }

    /// Render the final summarization request for a transcript.
    pub fn transcript_request(&self, transcript: &str) -> String {
        let mut vars = HashMap::new();
        vars.insert("transcript".to_string(), transcript.to_string());
        Self::render(&self.summary.transcript, &vars)
    }
}
