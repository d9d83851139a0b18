//! Prompt composition for documentation templates
//!
//! A prompt is the template's base instruction with the audience and
//! detail phrases woven in, followed by the format suffix and then the
//! language suffix.

use log::trace;
use crate::{Audience, DetailLevel, OutputFormat, Template};

pub const MARKDOWN_INSTRUCTION: &str
  = "\n\nFormat the output using proper Markdown syntax with headers, lists, code blocks, etc.";

pub const PLAIN_TEXT_INSTRUCTION: &str
  = "\n\nFormat the output as plain text without special formatting.";

/// Language that needs no override suffix
pub const DEFAULT_LANGUAGE: &str = "english";

const API_GUIDE_OUTLINE: &str = "Include:
1. Overview and purpose
2. Authentication (if applicable)
3. Key endpoints/methods
4. Request/response examples
5. Common use cases
6. Error handling

Format the output as clean, readable documentation.";

const CODE_COMMENTS_OUTLINE: &str
  = "Return the code with well-structured comments that explain:
- What the code does
- Why certain approaches are used
- Any important considerations or edge cases";

const SETUP_INSTRUCTIONS_OUTLINE: &str = "Include:
1. Prerequisites
2. Installation steps
3. Configuration
4. Verification
5. Next steps";

const TROUBLESHOOTING_OUTLINE: &str = "Include:
1. Problem description
2. Common causes
3. Diagnostic steps
4. Solutions
5. Prevention tips";

const USER_MANUAL_OUTLINE: &str = "Include:
1. What the tool is
2. Key features and benefits
3. Who should use it
4. Quick start overview
5. How to get help";

/// Compose the full instruction string from raw request labels.
///
/// Fails only when `template_id` is not a known template. Unknown
/// audience or detail labels contribute no phrase.
pub fn compose(
  template_id: &str
, raw_input: &str
, audience: &str
, detail_level: &str
, format: &str
, language: &str
) -> Result<String, crate::error::Error>
{   let template: Template = template_id.parse()?;
    Ok(compose_prompt(
      template
    , raw_input
    , Audience::from_label(audience)
    , DetailLevel::from_label(detail_level)
    , OutputFormat::from_label(format)
    , language
    ))
}

/// Typed variant of [`compose`]
pub fn compose_prompt(
  template: Template
, input: &str
, audience: Option<Audience>
, detail: Option<DetailLevel>
, format: OutputFormat
, language: &str
) -> String
{   let mut prompt = template_body(template, input, audience, detail);
    prompt.push_str(format_suffix(format));
    prompt.push_str(&language_suffix(language));
    trace!(
      "Composed {} prompt ({} bytes)", template.id(), prompt.len()
    );
    prompt
}

/// Role sentence every prompt for `template` starts with
pub fn base_instruction(template: Template) -> &'static str
{   match template
    {   Template::ApiGuide =>
          "You are a technical documentation expert."
      , Template::CodeComments =>
          "You are a code documentation expert."
      , Template::SetupInstructions =>
          "You are a technical writer."
      , Template::Troubleshooting =>
          "You are a troubleshooting expert."
      , Template::UserManual =>
          "You are a technical documentation writer."
    }
}

/// Section list closing the body of `template`
pub fn outline(template: Template) -> &'static str
{   match template
    {   Template::ApiGuide => API_GUIDE_OUTLINE
      , Template::CodeComments => CODE_COMMENTS_OUTLINE
      , Template::SetupInstructions => SETUP_INSTRUCTIONS_OUTLINE
      , Template::Troubleshooting => TROUBLESHOOTING_OUTLINE
      , Template::UserManual => USER_MANUAL_OUTLINE
    }
}

pub fn format_suffix(format: OutputFormat) -> &'static str
{   match format
    {   OutputFormat::Markdown => MARKDOWN_INSTRUCTION
      , OutputFormat::Plain => PLAIN_TEXT_INSTRUCTION
    }
}

/// Empty for english, otherwise an instruction naming the language
pub fn language_suffix(language: &str) -> String
{   if language == DEFAULT_LANGUAGE
    {   return String::new();
    }
    format!(
      "\n\nIMPORTANT: Write the entire documentation in {}.",
      capitalize(language)
    )
}

fn capitalize(label: &str) -> String
{   let mut chars = label.chars();
    match chars.next()
    {   Some(first) => first.to_uppercase().chain(chars).collect()
      , None => String::new()
    }
}

fn template_body(
  template: Template
, input: &str
, audience: Option<Audience>
, detail: Option<DetailLevel>
) -> String
{   let role = base_instruction(template);
    let outline = outline(template);
    let audience_text = spaced(audience_phrase(template, audience));
    let detail_text = spaced(detail_phrase(template, detail));

    match template
    {   Template::ApiGuide => format!(
          "{} Write a clear and professional API guide for {}{}.{}\n\n{}",
          role, input, audience_text, detail_text, outline
        )
      , Template::CodeComments => format!(
          "{} Add clear, helpful comments to the following code.{}{}\n\nCode:\n{}\n\n{}",
          role, audience_text, detail_text, input, outline
        )
      , Template::SetupInstructions => format!(
          "{} Create clear setup instructions for {}.{}{}\n\n{}",
          role, input, audience_text, detail_text, outline
        )
      , Template::Troubleshooting => format!(
          "{} Create a troubleshooting guide for: {}.{}{}\n\n{}",
          role, input, audience_text, detail_text, outline
        )
      , Template::UserManual => format!(
          "{} Write an introduction for a user manual about {}.{}{}\n\n{}",
          role, input, audience_text, detail_text, outline
        )
    }
}

fn spaced(phrase: Option<&'static str>) -> String
{   phrase.map(|p| format!(" {}", p)).unwrap_or_default()
}

fn audience_phrase(
  template: Template
, audience: Option<Audience>
) -> Option<&'static str>
{   use Audience::*;
    let audience = audience?;
    let phrase = match (template, audience)
    {   (Template::ApiGuide, Beginners) =>
          "with simple explanations and examples"
      , (Template::ApiGuide, Developers) =>
          "with practical code examples"
      , (Template::ApiGuide, Advanced) =>
          "with advanced implementation details and edge cases"
      , (Template::CodeComments, Beginners) =>
          "Explain concepts clearly for those learning."
      , (Template::CodeComments, Developers) =>
          "Write professional, maintainable comments."
      , (Template::CodeComments, Advanced) =>
          "Include architectural insights and design patterns."
      , (Template::SetupInstructions, Beginners) =>
          "Assume no prior knowledge and explain every step."
      , (Template::SetupInstructions, Developers) =>
          "Assume basic technical knowledge."
      , (Template::SetupInstructions, Advanced) =>
          "Focus on advanced configuration and optimization."
      , (Template::Troubleshooting, Beginners) =>
          "Use simple language and provide step-by-step guidance."
      , (Template::Troubleshooting, Developers) =>
          "Focus on diagnostic steps and solutions."
      , (Template::Troubleshooting, Advanced) =>
          "Include root cause analysis and preventive measures."
      , (Template::UserManual, Beginners) =>
          "Write for first-time users with clear explanations."
      , (Template::UserManual, Developers) =>
          "Focus on functionality and integration."
      , (Template::UserManual, Advanced) =>
          "Include advanced features and customization options."
    };
    Some(phrase)
}

fn detail_phrase(
  template: Template
, detail: Option<DetailLevel>
) -> Option<&'static str>
{   use DetailLevel::*;
    let detail = detail?;
    let phrase = match (template, detail)
    {   (Template::ApiGuide, Brief) =>
          "Keep it concise and focused on essentials."
      , (Template::ApiGuide, Moderate) =>
          "Provide a balanced overview with key details."
      , (Template::ApiGuide, Comprehensive) =>
          "Be comprehensive with thorough explanations and multiple examples."
      , (Template::CodeComments, Brief) =>
          "Add essential inline comments only."
      , (Template::CodeComments, Moderate) =>
          "Add inline and block comments where helpful."
      , (Template::CodeComments, Comprehensive) =>
          "Add comprehensive documentation with examples."
      , (Template::SetupInstructions, Brief) =>
          "List the essential steps only."
      , (Template::SetupInstructions, Moderate) =>
          "Include setup steps with explanations."
      , (Template::SetupInstructions, Comprehensive) =>
          "Provide detailed steps with troubleshooting tips and alternatives."
      , (Template::Troubleshooting, Brief) =>
          "Provide quick fixes only."
      , (Template::Troubleshooting, Moderate) =>
          "Include common solutions and workarounds."
      , (Template::Troubleshooting, Comprehensive) =>
          "Provide in-depth analysis with multiple solution approaches."
      , (Template::UserManual, Brief) =>
          "Provide a concise introduction."
      , (Template::UserManual, Moderate) =>
          "Include overview and key features."
      , (Template::UserManual, Comprehensive) =>
          "Write a comprehensive introduction covering all aspects."
    };
    Some(phrase)
}

#[cfg(test)]
mod tests
{   use super::*;
    use crate::error::Error;

    const AUDIENCES: [&str; 3] = ["beginners", "developers", "advanced"];
    const DETAILS: [&str; 3] = ["brief", "moderate", "comprehensive"];

    #[test]
    fn every_template_audience_and_detail_contains_base_text()
    {   for template in Template::ALL
        {   for audience in AUDIENCES
            {   for detail in DETAILS
                {   let prompt = compose(
                      template.id(), "Widget", audience, detail,
                      "markdown", "english"
                    ).unwrap();
                    assert!(!prompt.is_empty());
                    assert!(prompt.starts_with(base_instruction(template)));
                    assert!(prompt.contains(outline(template)));
                    assert!(prompt.contains("Widget"));
                }
            }
        }
    }

    #[test]
    fn setup_instructions_for_beginners_brief_markdown()
    {   let prompt = compose(
          "setup-instructions", "Docker", "beginners", "brief",
          "markdown", "english"
        ).unwrap();
        assert!(prompt.contains("Assume no prior knowledge"));
        assert!(prompt.contains("essential steps only"));
        assert!(prompt.ends_with(MARKDOWN_INSTRUCTION));
        assert!(!prompt.contains("IMPORTANT: Write the entire documentation"));
        assert!(prompt.starts_with(
          "You are a technical writer. Create clear setup instructions for Docker. \
           Assume no prior knowledge and explain every step. \
           List the essential steps only.\n\nInclude:"
        ));
    }

    #[test]
    fn api_guide_places_audience_inside_the_task_sentence()
    {   let prompt = compose(
          "api-guide", "GraphQL", "developers", "moderate",
          "plain", "english"
        ).unwrap();
        assert!(prompt.contains(
          "API guide for GraphQL with practical code examples. \
           Provide a balanced overview with key details."
        ));
    }

    #[test]
    fn code_comments_embeds_input_after_code_label()
    {   let prompt = compose(
          "code-comments", "fn main() {}", "advanced", "comprehensive",
          "markdown", "english"
        ).unwrap();
        assert!(prompt.contains("\n\nCode:\nfn main() {}\n\n"));
    }

    #[test]
    fn unknown_audience_and_detail_add_no_phrase()
    {   let prompt = compose(
          "troubleshooting", "Connection timeout", "managers", "epic",
          "markdown", "english"
        ).unwrap();
        assert!(prompt.starts_with(
          "You are a troubleshooting expert. Create a troubleshooting guide \
           for: Connection timeout.\n\nInclude:"
        ));
    }

    #[test]
    fn unknown_template_is_rejected()
    {   let result = compose(
          "not-a-template", "x", "beginners", "brief", "markdown", "english"
        );
        assert_eq!(
          result,
          Err(Error::UnknownTemplate("not-a-template".to_string()))
        );
    }

    #[test]
    fn non_markdown_format_ends_with_plain_instruction()
    {   for format in ["plain", "html", ""]
        {   let prompt = compose(
              "user-manual", "Acme", "beginners", "brief", format, "english"
            ).unwrap();
            assert!(prompt.ends_with(PLAIN_TEXT_INSTRUCTION));
        }
    }

    #[test]
    fn english_has_no_language_suffix()
    {   assert_eq!(language_suffix("english"), "");
    }

    #[test]
    fn other_languages_are_capitalized_after_format_suffix()
    {   let prompt = compose(
          "api-guide", "REST", "beginners", "brief", "markdown", "spanish"
        ).unwrap();
        let suffix
          = "\n\nIMPORTANT: Write the entire documentation in Spanish.";
        assert!(prompt.ends_with(suffix));
        let format_at = prompt.find(MARKDOWN_INSTRUCTION).unwrap();
        let language_at = prompt.find(suffix).unwrap();
        assert!(format_at < language_at);
    }

    #[test]
    fn capitalization_handles_non_ascii_first_letters()
    {   assert_eq!(
          language_suffix("ελληνικά"),
          "\n\nIMPORTANT: Write the entire documentation in Ελληνικά."
        );
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn input_is_forwarded_verbatim()
    {   let long = "x".repeat(100_000);
        let prompt = compose(
          "user-manual", &long, "advanced", "moderate", "plain", "english"
        ).unwrap();
        assert!(prompt.contains(&long));
    }
}
