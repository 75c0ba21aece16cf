//! Pulling display-math formulas out of converted document text.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// A `$$ ... $$` block with no dollar sign inside.
static DISPLAY_MATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\$[^$]*\$\$").expect("valid regex literal")
});

/// The number of characters of surrounding text kept on each side of a formula.
pub const CONTEXT_CHARS: usize = 1000;

/// A formula found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMath {
    /// The LaTeX source of the formula, without the enclosing dollar signs.
    pub latex: String,

    /// The region of the document holding the formula, dollar signs included, in bytes.
    pub span: Range<usize>,

    /// The text around the formula, formula included, up to [`CONTEXT_CHARS`] characters on
    /// each side.
    pub context: String,
}

/// Finds every `$$ ... $$` formula in the text, in document order.
pub fn extract_display_math(text: &str) -> Vec<DisplayMath> {
    DISPLAY_MATH.find_iter(text)
        .map(|m| {
            let start = text[..m.start()]
                .char_indices()
                .rev()
                .nth(CONTEXT_CHARS - 1)
                .map_or(0, |(i, _)| i);
            let end = text[m.end()..]
                .char_indices()
                .nth(CONTEXT_CHARS)
                .map_or(text.len(), |(i, _)| m.end() + i);

            DisplayMath {
                latex: m.as_str().trim_matches('$').to_owned(),
                span: m.range(),
                context: text[start..end].to_owned(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn finds_formulas() {
        let text = "Energy is $$E = mc^2$$ and momentum is $$p = mv$$.";
        let found = extract_display_math(text);
        let latex = found.iter().map(|m| m.latex.as_str()).collect::<Vec<_>>();
        assert_eq!(latex, vec!["E = mc^2", "p = mv"]);
        assert_eq!(&text[found[0].span.clone()], "$$E = mc^2$$");
        assert_eq!(found[0].context, text);
    }

    #[test]
    fn inline_math_ignored() {
        assert!(extract_display_math("where $x$ is the distance").is_empty());
    }

    #[test]
    fn context_is_clamped() {
        let before = "α".repeat(1500);
        let after = "β".repeat(1500);
        let text = format!("{}$$x$$ {}", before, after);
        let found = extract_display_math(&text);
        assert_eq!(found.len(), 1);

        let context = &found[0].context;
        assert_eq!(context.chars().count(), CONTEXT_CHARS * 2 + "$$x$$".len());
        assert!(context.starts_with('α'));
        assert!(context.ends_with('β'));
    }
}
