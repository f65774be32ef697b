//! Transition labels: interactive actions and Markovian rates.
//!
//! A label is either an interactive action (composed chains are joined by
//! `|`) or a Markov rate, optionally carrying an abstract name prefix that
//! preceded the `rate ` token in its canonical text form.

use crate::error::LabelParseError;

/// The distinguished silent (tau) action.
pub const TAU: &str = "i";

/// A transition label: interactive action text, or a Markov rate.
#[derive(Debug, Clone, PartialEq)]
pub enum Label {
    Interactive(String),
    Markov { rate: f64, prefix: Option<String> },
}

impl Label {
    /// Parse the canonical text form of a label.
    ///
    /// `"rate <r>"` and `"<prefix>rate <r>"` are Markov; anything else is
    /// interactive (including text containing an escaped `|` composition).
    pub fn parse(text: &str) -> Result<Label, LabelParseError> {
        if let Some(rest) = text.strip_prefix("rate ") {
            return Ok(Label::Markov {
                rate: parse_rate(rest)?,
                prefix: None,
            });
        }

        if let Some(pos) = find_unescaped_rate_marker(text) {
            let (prefix, rest) = text.split_at(pos);
            let rest = &rest["rate ".len()..];
            return Ok(Label::Markov {
                rate: parse_rate(rest)?,
                prefix: Some(prefix.to_owned()),
            });
        }

        Ok(Label::Interactive(text.to_owned()))
    }

    pub fn tau() -> Label {
        Label::Interactive(TAU.to_owned())
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, Label::Interactive(_))
    }

    pub fn is_tau(&self) -> bool {
        matches!(self, Label::Interactive(t) if t == TAU)
    }

    pub fn rate(&self) -> Option<f64> {
        match self {
            Label::Markov { rate, .. } => Some(*rate),
            Label::Interactive(_) => None,
        }
    }

    /// Canonical text form, as written to text-based codecs and re-parsed
    /// by `Label::parse`.
    pub fn canonical(&self) -> String {
        match self {
            Label::Interactive(text) => text.clone(),
            Label::Markov { rate, prefix: None } => format!("rate {rate:.10}"),
            Label::Markov {
                rate,
                prefix: Some(p),
            } => format!("{p}rate {rate:.10}"),
        }
    }

    /// Escape `|` and `\` so the result can be embedded as one atomic
    /// component of a composed interactive label.
    pub fn quote(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if c == '|' || c == '\\' {
                out.push('\\');
            }
            out.push(c);
        }
        out
    }

    /// Reverse `quote`: drop the backslash before an escaped `|` or `\`.
    pub fn unquote(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                if let Some(next) = chars.next() {
                    out.push(next);
                    continue;
                }
            }
            out.push(c);
        }
        out
    }

    /// Compose `self` as the outer label of a two-step interactive chain
    /// whose inner label is `inner`. Prepending tau is a no-op.
    ///
    /// `self`'s text is assumed already in canonical (quoted-where-needed)
    /// form — quoting happens once, when raw external text is first
    /// interned, not again here.
    pub fn prepend(&self, inner: &Label) -> Label {
        if self.is_tau() {
            return inner.clone();
        }
        let Label::Interactive(outer_text) = self else {
            panic!("prepend called with non-interactive outer label");
        };
        match inner {
            Label::Interactive(inner_text) => {
                Label::Interactive(format!("{outer_text}|{inner_text}"))
            }
            Label::Markov { .. } => inner.clone(),
        }
    }
}

fn parse_rate(text: &str) -> Result<f64, LabelParseError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| LabelParseError::NotANumber(text.to_owned()))?;
    if !value.is_finite() {
        return Err(LabelParseError::NotFinite(value));
    }
    Ok(value)
}

/// Find the first unescaped occurrence of `"rate "` at position > 0, used to
/// split an abstract-name prefix from the rate text.
fn find_unescaped_rate_marker(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let marker = b"rate ";
    if bytes.len() < marker.len() {
        return None;
    }
    let mut i = 1;
    while i + marker.len() <= bytes.len() {
        if &bytes[i..i + marker.len()] == marker {
            return Some(i);
        }
        i += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_interactive() {
        assert_eq!(Label::parse("a").unwrap(), Label::Interactive("a".into()));
    }

    #[test]
    fn parses_tau() {
        let l = Label::parse("i").unwrap();
        assert!(l.is_tau());
    }

    #[test]
    fn parses_bare_rate() {
        let l = Label::parse("rate 3.5").unwrap();
        assert_eq!(
            l,
            Label::Markov {
                rate: 3.5,
                prefix: None
            }
        );
    }

    #[test]
    fn parses_prefixed_rate() {
        let l = Label::parse("start_rate 2.0").unwrap();
        assert_eq!(
            l,
            Label::Markov {
                rate: 2.0,
                prefix: Some("start_".into())
            }
        );
    }

    #[test]
    fn rejects_garbage_rate() {
        assert!(Label::parse("rate abc").is_err());
    }

    #[test]
    fn quote_escapes_pipe_and_backslash() {
        assert_eq!(Label::quote("a|b\\c"), "a\\|b\\\\c");
    }

    #[test]
    fn unquote_reverses_quote() {
        for text in ["a", "a|b", "a\\b", "plain action", ""] {
            assert_eq!(Label::unquote(&Label::quote(text)), text);
        }
    }

    #[test]
    fn prepend_tau_is_identity() {
        let outer = Label::tau();
        let inner = Label::Interactive("b".into());
        assert_eq!(outer.prepend(&inner), inner);
    }

    #[test]
    fn prepend_composes_interactive_chain() {
        let outer = Label::Interactive("a".into());
        let inner = Label::Interactive("b".into());
        assert_eq!(outer.prepend(&inner), Label::Interactive("a|b".into()));
    }

    #[test]
    fn prepend_markov_inner_wins() {
        let outer = Label::Interactive("a".into());
        let inner = Label::Markov {
            rate: 1.0,
            prefix: None,
        };
        assert_eq!(outer.prepend(&inner), inner);
    }

    #[test]
    fn canonical_round_trips_markov() {
        let l = Label::Markov {
            rate: 2.5,
            prefix: None,
        };
        assert_eq!(Label::parse(&l.canonical()).unwrap(), l);
    }
}
