//! HTML pages: input form, result and error.
//!
//! Every piece of user or model text passes through `escape_html` before it
//! lands in markup.

use crate::advisor::ProfileInput;
use crate::i18n::Language;

/// Escape the five HTML special characters
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:42rem;margin:2rem auto;padding:0 1rem;line-height:1.5}\
label{display:block;margin-top:1rem;font-weight:600}\
input,textarea{width:100%;padding:.5rem;box-sizing:border-box}\
button{margin-top:1.5rem;padding:.6rem 1.2rem}\
.suggestion{white-space:pre-wrap;background:#f6f8fa;padding:1rem;border-radius:6px}\
.error{color:#b00020}\
pre{overflow-x:auto;background:#f6f8fa;padding:1rem}";

fn layout(language: Language, body: &str) -> String {
    let strings = language.strings();
    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{title}</title>\n<style>{style}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        lang = language.code(),
        title = escape_html(strings.page_title),
        style = STYLE,
        body = body,
    )
}

/// The profile form posting to `/career-result`
pub fn index_page(language: Language) -> String {
    let s = language.strings();
    let body = format!(
        r#"<h1>{heading}</h1>
<form method="post" action="/career-result">
<label for="mbti">{mbti}</label>
<input id="mbti" name="mbti" maxlength="4" required>
<label for="holland">{holland}</label>
<input id="holland" name="holland" maxlength="2" required>
<label for="skills">{skills}</label>
<textarea id="skills" name="skills" rows="3" required></textarea>
<label for="interests">{interests}</label>
<textarea id="interests" name="interests" rows="3" required></textarea>
<button type="submit">{submit}</button>
</form>"#,
        heading = escape_html(s.form_heading),
        mbti = escape_html(s.label_mbti),
        holland = escape_html(s.label_holland),
        skills = escape_html(s.label_skills),
        interests = escape_html(s.label_interests),
        submit = escape_html(s.submit_button),
    );

    layout(language, &body)
}

/// The submitted profile followed by the model's suggestion
pub fn result_page(language: Language, profile: &ProfileInput, suggestion: &str) -> String {
    let s = language.strings();
    let body = format!(
        r#"<h1>{heading}</h1>
<dl>
<dt>{mbti_label}</dt><dd>{mbti}</dd>
<dt>{holland_label}</dt><dd>{holland}</dd>
<dt>{skills_label}</dt><dd>{skills}</dd>
<dt>{interests_label}</dt><dd>{interests}</dd>
</dl>
<h2>{suggestion_heading}</h2>
<div class="suggestion">{suggestion}</div>
<p><a href="/">{back}</a></p>"#,
        heading = escape_html(s.result_heading),
        mbti_label = escape_html(s.label_mbti),
        mbti = escape_html(&profile.mbti),
        holland_label = escape_html(s.label_holland),
        holland = escape_html(&profile.holland),
        skills_label = escape_html(s.label_skills),
        skills = escape_html(&profile.skills),
        interests_label = escape_html(s.label_interests),
        interests = escape_html(&profile.interests),
        suggestion_heading = escape_html(s.suggestion_heading),
        suggestion = escape_html(suggestion),
        back = escape_html(s.back_link),
    );

    layout(language, &body)
}

/// An error message, optionally followed by diagnostic detail in a `<pre>` block
pub fn error_page(language: Language, message: &str, detail: Option<&str>) -> String {
    let s = language.strings();
    let detail = detail
        .map(|d| format!("\n<pre>{}</pre>", escape_html(d)))
        .unwrap_or_default();
    let body = format!(
        r#"<h1>{heading}</h1>
<p class="error">{message}</p>{detail}
<p><a href="/">{back}</a></p>"#,
        heading = escape_html(s.error_heading),
        message = escape_html(message),
        detail = detail,
        back = escape_html(s.back_link),
    );

    layout(language, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_special_chars() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_passthrough() {
        assert_eq!(escape_html("Kỹ năng: lập trình"), "Kỹ năng: lập trình");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_index_page_has_all_fields() {
        let html = index_page(Language::ENGLISH);

        assert!(html.contains(r#"action="/career-result""#));
        for field in ["mbti", "holland", "skills", "interests"] {
            assert!(html.contains(&format!(r#"name="{}""#, field)));
        }
        assert!(html.contains(r#"<html lang="en">"#));
    }

    #[test]
    fn test_result_page_escapes_model_output() {
        let profile = ProfileInput::new("INFP", "AS", "<b>art</b>", "music");
        let html = result_page(Language::ENGLISH, &profile, "<script>alert(1)</script>");

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("&lt;b&gt;art&lt;/b&gt;"));
        assert!(html.contains("INFP"));
    }

    #[test]
    fn test_error_page_without_detail() {
        let html = error_page(Language::VIETNAMESE, "Vui lòng nhập kỹ năng của bạn.", None);

        assert!(html.contains("Vui lòng nhập kỹ năng của bạn."));
        assert!(!html.contains("<pre>"));
        assert!(html.contains(r#"<html lang="vi">"#));
    }

    #[test]
    fn test_error_page_with_detail() {
        let html = error_page(Language::ENGLISH, "System error: boom", Some("boom\ncaused by: <io>"));

        assert!(html.contains("<pre>boom\ncaused by: &lt;io&gt;</pre>"));
    }
}
