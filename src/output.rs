use crate::review::ReviewResult;
use anyhow::Result;

/// Plain-text rendering of a review for the one-shot command.
pub fn format_result(result: &ReviewResult, width: usize) -> String {
    let width = width.max(20);
    let mut out = String::new();
    out.push_str(&format!("Tone: {}\n", result.tone));
    out.push_str(&format!("Limitations: {}\n", result.limitations));
    out.push_str("\nSuggestions:\n");
    out.push_str(&textwrap::fill(&result.suggestions, width));
    out.push_str("\n\nRevised Post:\n");
    out.push_str(&textwrap::fill(&result.revised_post, width));
    out.push('\n');
    out
}

pub fn format_json(result: &ReviewResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::Limitations;

    fn example() -> ReviewResult {
        ReviewResult {
            tone: "Excited".to_string(),
            limitations: Limitations {
                char_limit: Some(280),
                hashtag_limit: Some(2),
            },
            suggestions: "Add a call to action.".to_string(),
            revised_post: "🚀 Check out our new product! #Launch".to_string(),
        }
    }

    #[test]
    fn test_format_result() {
        let text = format_result(&example(), 80);
        assert_eq!(
            text,
            "Tone: Excited\n\
             Limitations: Char Limit: 280, Hashtags: 2\n\
             \n\
             Suggestions:\n\
             Add a call to action.\n\
             \n\
             Revised Post:\n\
             🚀 Check out our new product! #Launch\n"
        );
    }

    #[test]
    fn test_format_result_wraps_long_text() {
        let mut result = example();
        result.suggestions = "word ".repeat(20).trim_end().to_string();
        let text = format_result(&result, 30);
        let suggestions: Vec<&str> = text
            .lines()
            .skip_while(|l| *l != "Suggestions:")
            .skip(1)
            .take_while(|l| !l.is_empty())
            .collect();
        assert!(suggestions.len() > 1);
        assert!(suggestions.iter().all(|l| l.len() <= 30));
    }

    #[test]
    fn test_format_json_omits_unreported_limits() {
        let mut result = example();
        result.limitations.char_limit = None;
        let json: serde_json::Value =
            serde_json::from_str(&format_json(&result).unwrap()).unwrap();
        assert_eq!(json["tone"], "Excited");
        assert_eq!(
            json["limitations"],
            serde_json::json!({ "hashtag_limit": 2 })
        );
    }
}
