/// Lightweight markup for message text.
///
/// Text-only: the parser produces styled spans and nothing else. Links are
/// clickable only for http, https and mailto targets.
use eframe::egui;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { label: String, url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Inline>),
    Bullet(Vec<Inline>),
    Heading(Vec<Inline>),
}

pub fn parse(text: &str) -> Vec<Block> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if let Some(item) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
                Block::Bullet(parse_inline(item.trim_start()))
            } else if let Some(title) = heading(line) {
                Block::Heading(parse_inline(title))
            } else {
                Block::Paragraph(parse_inline(line))
            }
        })
        .collect()
}

/// `# Title` up to `###### Title`; the hashes must be followed by a space
fn heading(line: &str) -> Option<&str> {
    let title = line.trim_start_matches('#');
    let level = line.len() - title.len();
    if (1..=6).contains(&level) && title.starts_with(char::is_whitespace) {
        Some(title.trim_start())
    } else {
        None
    }
}

pub fn parse_inline(line: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = line;

    while let Some(c) = rest.chars().next() {
        let styled = match c {
            '*' if rest.starts_with("**") => {
                delimited(rest, "**").map(|(inner, len)| (Inline::Bold(inner.to_string()), len))
            }
            '*' => delimited(rest, "*").map(|(inner, len)| (Inline::Italic(inner.to_string()), len)),
            // No intraword emphasis, so snake_case survives
            '_' if !plain.chars().last().is_some_and(char::is_alphanumeric) => {
                delimited(rest, "_").map(|(inner, len)| (Inline::Italic(inner.to_string()), len))
            }
            '`' => delimited(rest, "`").map(|(inner, len)| (Inline::Code(inner.to_string()), len)),
            '[' => link(rest),
            _ => None,
        };

        match styled {
            Some((span, len)) => {
                if !plain.is_empty() {
                    spans.push(Inline::Text(std::mem::take(&mut plain)));
                }
                spans.push(span);
                rest = &rest[len..];
            }
            None => {
                plain.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    if !plain.is_empty() {
        spans.push(Inline::Text(plain));
    }
    spans
}

/// Inner text and total byte length of `marker inner marker` at the start of `rest`
fn delimited<'a>(rest: &'a str, marker: &str) -> Option<(&'a str, usize)> {
    let body = &rest[marker.len()..];
    let end = body.find(marker)?;
    let inner = &body[..end];
    if inner.is_empty() || inner.starts_with(' ') || inner.ends_with(' ') {
        return None;
    }
    Some((inner, marker.len() * 2 + end))
}

fn link(rest: &str) -> Option<(Inline, usize)> {
    let close = rest.find("](")?;
    let label = &rest[1..close];
    if label.is_empty() || label.contains('[') {
        return None;
    }
    let target = &rest[close + 2..];
    let end = closing_paren(target)?;
    let url = target[..end].trim();
    let len = close + 2 + end + 1;

    let span = if is_safe_url(url) {
        Inline::Link {
            label: label.to_string(),
            url: url.to_string(),
        }
    } else {
        Inline::Text(label.to_string())
    };
    Some((span, len))
}

/// Byte index of the `)` closing a link target, skipping balanced pairs
fn closing_paren(target: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in target.char_indices() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return Some(i),
            ')' => depth -= 1,
            _ => {}
        }
    }
    None
}

fn is_safe_url(url: &str) -> bool {
    let url = url.to_ascii_lowercase();
    ["http://", "https://", "mailto:"]
        .iter()
        .any(|scheme| url.starts_with(scheme))
}

/// Renders message text in the current layout
pub fn render(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    for block in parse(text) {
        let (prefix, spans, heading) = match &block {
            Block::Paragraph(spans) => (None, spans, false),
            Block::Bullet(spans) => (Some("• "), spans, false),
            Block::Heading(spans) => (None, spans, true),
        };

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            if let Some(prefix) = prefix {
                ui.label(egui::RichText::new(prefix).color(color));
            }
            for span in spans {
                render_inline(ui, span, color, heading);
            }
        });
    }
}

fn render_inline(ui: &mut egui::Ui, span: &Inline, color: egui::Color32, heading: bool) {
    let styled = |text: &str| {
        let rich = egui::RichText::new(text).color(color);
        if heading {
            rich.strong().size(15.0)
        } else {
            rich
        }
    };

    match span {
        Inline::Text(text) => {
            ui.label(styled(text.as_str()));
        }
        Inline::Bold(text) => {
            ui.label(styled(text.as_str()).strong());
        }
        Inline::Italic(text) => {
            ui.label(styled(text.as_str()).italics());
        }
        Inline::Code(text) => {
            ui.label(egui::RichText::new(text).code());
        }
        Inline::Link { label, url } => {
            ui.hyperlink_to(label.as_str(), url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    #[test]
    fn plain_text_is_one_span() {
        assert_eq!(parse_inline("We ship in 2 days."), vec![text("We ship in 2 days.")]);
    }

    #[test]
    fn emphasis_and_code() {
        assert_eq!(
            parse_inline("The **Widget Pro** is *fast* and `cheap`"),
            vec![
                text("The "),
                Inline::Bold("Widget Pro".to_string()),
                text(" is "),
                Inline::Italic("fast".to_string()),
                text(" and "),
                Inline::Code("cheap".to_string()),
            ]
        );
    }

    #[test]
    fn unmatched_markers_stay_literal() {
        assert_eq!(parse_inline("2 * 3 = 6"), vec![text("2 * 3 = 6")]);
        assert_eq!(parse_inline("**open"), vec![text("**open")]);
        assert_eq!(parse_inline("some_snake_case"), vec![text("some_snake_case")]);
    }

    #[test]
    fn safe_links_are_kept() {
        assert_eq!(
            parse_inline("see [our site](https://example.org)!"),
            vec![
                text("see "),
                Inline::Link {
                    label: "our site".to_string(),
                    url: "https://example.org".to_string(),
                },
                text("!"),
            ]
        );
    }

    #[test]
    fn script_links_become_text() {
        assert_eq!(
            parse_inline("[click](javascript:alert(1))"),
            vec![text("click")]
        );
        assert_eq!(
            parse_inline("<script>alert(1)</script>"),
            vec![text("<script>alert(1)</script>")]
        );
    }

    #[test]
    fn link_target_keeps_nested_parentheses() {
        assert_eq!(
            parse_inline("[x](https://en.wikipedia.org/wiki/Foo_(bar)) here"),
            vec![
                Inline::Link {
                    label: "x".to_string(),
                    url: "https://en.wikipedia.org/wiki/Foo_(bar)".to_string(),
                },
                text(" here"),
            ]
        );
        assert_eq!(parse_inline("[x](https://a.b/(c"), vec![text("[x](https://a.b/(c")]);
    }

    #[test]
    fn hash_without_space_is_not_a_heading() {
        assert_eq!(
            parse("#1 best seller this month"),
            vec![Block::Paragraph(vec![text("#1 best seller this month")])]
        );
        assert_eq!(
            parse("### Pricing\n####### too deep"),
            vec![
                Block::Heading(vec![text("Pricing")]),
                Block::Paragraph(vec![text("####### too deep")]),
            ]
        );
    }

    #[test]
    fn blocks() {
        let blocks = parse("# Plans\n\n- Basic\n* Pro\nContact us");
        assert_eq!(
            blocks,
            vec![
                Block::Heading(vec![text("Plans")]),
                Block::Bullet(vec![text("Basic")]),
                Block::Bullet(vec![text("Pro")]),
                Block::Paragraph(vec![text("Contact us")]),
            ]
        );
    }
}
