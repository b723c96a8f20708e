use regex::Regex;
use scraper::{ElementRef, Node};
use std::sync::LazyLock;

/// Characters rendered inside `<sub>` and their Unicode subscript forms
pub const SUBSCRIPTS: [(char, char); 32] = [
    ('0', '₀'),
    ('1', '₁'),
    ('2', '₂'),
    ('3', '₃'),
    ('4', '₄'),
    ('5', '₅'),
    ('6', '₆'),
    ('7', '₇'),
    ('8', '₈'),
    ('9', '₉'),
    ('+', '₊'),
    ('-', '₋'),
    ('=', '₌'),
    ('(', '₍'),
    (')', '₎'),
    ('a', 'ₐ'),
    ('e', 'ₑ'),
    ('h', 'ₕ'),
    ('i', 'ᵢ'),
    ('j', 'ⱼ'),
    ('k', 'ₖ'),
    ('l', 'ₗ'),
    ('m', 'ₘ'),
    ('n', 'ₙ'),
    ('o', 'ₒ'),
    ('p', 'ₚ'),
    ('r', 'ᵣ'),
    ('s', 'ₛ'),
    ('t', 'ₜ'),
    ('u', 'ᵤ'),
    ('v', 'ᵥ'),
    ('x', 'ₓ'),
];

/// Characters rendered inside `<sup>` and their Unicode superscript forms
pub const SUPERSCRIPTS: [(char, char); 16] = [
    ('0', '⁰'),
    ('1', '¹'),
    ('2', '²'),
    ('3', '³'),
    ('4', '⁴'),
    ('5', '⁵'),
    ('6', '⁶'),
    ('7', '⁷'),
    ('8', '⁸'),
    ('9', '⁹'),
    ('+', '⁺'),
    ('-', '⁻'),
    ('=', '⁼'),
    ('(', '⁽'),
    (')', '⁾'),
    ('n', 'ⁿ'),
];

/// Bracketed paragraph numbers such as `[0043]` or `[ 00 43 ]`
static PARAGRAPH_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\s*\d+(?:\s+\d+)*\s*\]").expect("paragraph marker pattern is valid")
});

/// Inline script a run of text is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Subscript,
    Superscript,
}

impl Script {
    /// Script implied by an element's tag name, if any
    pub fn from_tag(name: &str) -> Option<Self> {
        match name {
            "sub" => Some(Script::Subscript),
            "sup" => Some(Script::Superscript),
            _ => None,
        }
    }

    fn table(self) -> &'static [(char, char)] {
        match self {
            Script::Subscript => &SUBSCRIPTS,
            Script::Superscript => &SUPERSCRIPTS,
        }
    }

    /// Map one character; characters outside the table pass through
    pub fn map_char(self, c: char) -> char {
        self.table()
            .iter()
            .find(|(plain, _)| *plain == c)
            .map(|(_, mapped)| *mapped)
            .unwrap_or(c)
    }

    pub fn translate(self, text: &str) -> String {
        text.chars().map(|c| self.map_char(c)).collect()
    }
}

/// Flattens an element to plain text.
///
/// Text inside `<sub>`/`<sup>` is converted to Unicode sub/superscript
/// characters and kept inline; all other markup is dropped. Whitespace runs
/// collapse to single spaces and the result is trimmed. A missing element
/// yields `None`.
pub fn clean_text(element: Option<ElementRef<'_>>) -> Option<String> {
    let element = element?;
    let mut out = String::new();
    flatten_into(element, None, &mut out);
    Some(normalize_whitespace(&out))
}

/// Appends the text below `element`, translating runs inside sub/sup spans.
/// The innermost sub/sup wrapper decides the script.
fn flatten_into(element: ElementRef<'_>, script: Option<Script>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => match script {
                Some(script) => out.push_str(&script.translate(text)),
                None => out.push_str(text),
            },
            Node::Element(el) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    let inner = Script::from_tag(el.name()).or(script);
                    flatten_into(child_el, inner, out);
                }
            }
            _ => {}
        }
    }
}

/// Removes every bracketed paragraph number and tidies the remaining text
pub fn strip_paragraph_markers(text: &str) -> String {
    normalize_whitespace(&PARAGRAPH_MARKER.replace_all(text, ""))
}

/// Collapses whitespace runs into single spaces and trims the ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
