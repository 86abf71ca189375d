//! Syntax highlighting for fenced code blocks.
//!
//! Parsing is done by [syntect](https://docs.rs/syntect) with its bundled
//! Sublime grammars. Scopes become CSS classes prefixed with `tok-`
//! (`keyword.control.rust` → `tok-keyword tok-control tok-rust`), so the
//! stylesheet controls all colors and no theme is compiled in.
//!
//! Line numbering stays in maud: every source line is one `span.line` with a
//! leading `span.line-number`. Scopes that cross a line break (block comments,
//! template strings) are closed at the end of the line and reopened on the
//! next, so every line is balanced markup on its own:
//!
//! ```text
//! <div class="code-block"><pre><code class="language-ts">
//!   <span class="line"><span class="line-number">1</span><span class="tok-source tok-js">...</span></span>
//! ```
//!
//! Rendering never fails. An unknown language uses the plain-text grammar,
//! and a parser error falls back to escaped plain lines.

use maud::{Markup, PreEscaped, html};
use std::sync::OnceLock;
use syntect::html::{ClassStyle, line_tokens_to_classed_spans};
use syntect::parsing::{ParseState, Scope, ScopeStack, SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "tok-" };

fn syntax_set() -> &'static SyntaxSet {
    static SET: OnceLock<SyntaxSet> = OnceLock::new();
    SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

/// Grammar for a fence language tag. The bundled set has no TypeScript, so
/// TS and JSX variants use the JavaScript grammar.
fn find_syntax<'a>(set: &'a SyntaxSet, language: &str) -> &'a SyntaxReference {
    let token = match language {
        "ts" | "tsx" | "typescript" | "jsx" | "javascript" | "mjs" => "js",
        "kotlin" | "kt" => "java",
        "shell" | "zsh" | "console" => "sh",
        "yml" => "yaml",
        other => other,
    };
    if token.is_empty() {
        return set.find_syntax_plain_text();
    }
    set.find_syntax_by_token(token)
        .unwrap_or_else(|| set.find_syntax_plain_text())
}

/// Opening tag for one scope, classed the same way syntect classes spans.
fn open_scope(out: &mut String, scope: Scope) {
    out.push_str("<span class=\"");
    for (i, atom) in scope.build_string().split('.').enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str("tok-");
        out.push_str(atom);
    }
    out.push_str("\">");
}

/// Highlighted inner HTML of every line, without line breaks.
fn highlight_lines(code: &str, syntax: &SyntaxReference) -> Result<Vec<String>, syntect::Error> {
    let set = syntax_set();
    let mut state = ParseState::new(syntax);
    let mut stack = ScopeStack::new();
    let mut lines = Vec::new();

    for line in LinesWithEndings::from(code) {
        let mut out = String::new();
        let open = stack.as_slice().len();
        for scope in stack.as_slice() {
            open_scope(&mut out, *scope);
        }

        let ops = state.parse_line(line, set)?;
        let (spans, delta) = line_tokens_to_classed_spans(line, &ops, CLASS_STYLE, &mut stack)?;
        out.push_str(&spans);
        if let Some(pos) = out.rfind('\n') {
            out.remove(pos);
        }

        let unclosed = (open as isize + delta).max(0) as usize;
        out.push_str(&"</span>".repeat(unclosed));
        lines.push(out);
    }
    Ok(lines)
}

/// Renders `code` as a line-numbered, highlighted block.
pub fn render(code: &str, language: &str) -> Markup {
    let lang = language.trim().to_ascii_lowercase();
    let lang_class = if lang.is_empty() {
        "language-text".to_string()
    } else {
        format!("language-{lang}")
    };

    let syntax = find_syntax(syntax_set(), &lang);
    let highlighted = match highlight_lines(code, syntax) {
        Ok(lines) => Some(lines),
        Err(err) => {
            tracing::debug!(language = %lang, error = %err, "highlighting failed, rendering plain");
            None
        }
    };

    html! {
        div.code-block {
            pre {
                code class=(lang_class) {
                    @if let Some(lines) = &highlighted {
                        @for (i, line) in lines.iter().enumerate() {
                            span.line {
                                span.line-number { (i + 1) }
                                (PreEscaped(line))
                            }
                            "\n"
                        }
                    } @else {
                        @for (i, line) in code.lines().enumerate() {
                            span.line {
                                span.line-number { (i + 1) }
                                (line)
                            }
                            "\n"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_count(html: &str) -> usize {
        html.matches(r#"<span class="line">"#).count()
    }

    #[test]
    fn numbers_each_source_line() {
        let html = render("if a < b {\n}\n", "rust").into_string();
        assert_eq!(line_count(&html), 2);
        assert!(html.contains(r#"<span class="line-number">1</span>"#));
        assert!(html.contains(r#"<span class="line-number">2</span>"#));
        assert!(!html.contains(r#"<span class="line-number">3</span>"#));
    }

    #[test]
    fn escapes_source_text() {
        let html = render("if a < b && c > d {}", "rust").into_string();
        assert!(html.contains("&lt;"));
        assert!(html.contains("&amp;"));
        assert!(!html.contains("a < b"));
    }

    #[test]
    fn classes_come_from_scopes() {
        let html = render("// note\nfn main() { let s = \"x\"; }\n", "rust").into_string();
        assert!(html.contains("tok-comment"));
        assert!(html.contains("tok-string"));
        assert!(html.contains("tok-storage") || html.contains("tok-keyword"));
        assert!(html.contains("tok-source tok-rust"));
    }

    #[test]
    fn block_comment_spans_reopen_on_each_line() {
        let html = render("/* one\ntwo */\nlet x = 1;\n", "rust").into_string();
        for row in html.split('\n') {
            assert_eq!(
                row.matches("<span").count(),
                row.matches("</span>").count(),
                "unbalanced row: {row}"
            );
        }
        let second = html.split('\n').nth(1).unwrap();
        assert!(second.contains("tok-comment"), "{second}");
        assert!(second.contains("two "));
        assert!(!second.contains("let x"));
    }

    #[test]
    fn typescript_uses_javascript_grammar() {
        let html = render("@Injectable()\nexport class Chat {}\n", "ts").into_string();
        assert!(html.contains(r#"class="language-ts""#));
        assert!(html.contains("tok-source tok-js"));
        assert!(html.contains("tok-storage") || html.contains("tok-keyword"));
    }

    #[test]
    fn sql_keywords_are_classed() {
        let html = render("SELECT id FROM users;", "sql").into_string();
        assert!(html.contains("tok-keyword"));
    }

    #[test]
    fn unknown_language_renders_plain() {
        let html = render("a <b>\n", "brainfork").into_string();
        assert!(html.contains(r#"class="language-brainfork""#));
        assert!(html.contains("tok-text tok-plain"));
        assert!(!html.contains("tok-keyword"));
        assert!(html.contains("a &lt;b&gt;"));
    }

    #[test]
    fn missing_language_is_text() {
        let html = render("x\n", "").into_string();
        assert!(html.contains(r#"class="language-text""#));
        assert_eq!(line_count(&html), 1);
    }

    #[test]
    fn blank_lines_keep_their_number() {
        let html = render("a\n\nb", "text").into_string();
        assert_eq!(line_count(&html), 3);
        assert!(html.contains(r#"<span class="line-number">3</span>"#));
    }
}
