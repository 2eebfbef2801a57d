//! Closed sets of pandoc option values: PDF engines, highlight styles, output formats.

use std::fmt;
use std::str::FromStr;

/// A value outside an option's allowed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValue {
    pub value: String,
    pub allowed: &'static [&'static str],
}

/// An option whose value must be one of a fixed table of names.
pub trait Choice: Sized + Copy + 'static {
    /// Every variant, in the order shown to users.
    const ALL: &'static [Self];
    /// The names matching `ALL`, element for element.
    const NAMES: &'static [&'static str];

    fn as_str(self) -> &'static str;

    /// Case-sensitive exact match against `NAMES`.
    fn parse_choice(value: &str) -> Result<Self, UnknownValue> {
        Self::ALL
            .iter()
            .copied()
            .find(|choice| choice.as_str() == value)
            .ok_or_else(|| UnknownValue {
                value: value.to_string(),
                allowed: Self::NAMES,
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PdfEngine {
    #[default]
    Xelatex,
    Lualatex,
    Tectonic,
}

impl Choice for PdfEngine {
    const ALL: &'static [Self] = &[Self::Xelatex, Self::Lualatex, Self::Tectonic];
    const NAMES: &'static [&'static str] = &["xelatex", "lualatex", "tectonic"];

    fn as_str(self) -> &'static str {
        match self {
            PdfEngine::Xelatex => "xelatex",
            PdfEngine::Lualatex => "lualatex",
            PdfEngine::Tectonic => "tectonic",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HighlightStyle {
    #[default]
    Pygments,
    Tango,
    Espresso,
    Zenburn,
    Kate,
    Monochrome,
    Breezedark,
    Haddock,
}

impl Choice for HighlightStyle {
    const ALL: &'static [Self] = &[
        Self::Pygments,
        Self::Tango,
        Self::Espresso,
        Self::Zenburn,
        Self::Kate,
        Self::Monochrome,
        Self::Breezedark,
        Self::Haddock,
    ];
    const NAMES: &'static [&'static str] = &[
        "pygments",
        "tango",
        "espresso",
        "zenburn",
        "kate",
        "monochrome",
        "breezedark",
        "haddock",
    ];

    fn as_str(self) -> &'static str {
        match self {
            HighlightStyle::Pygments => "pygments",
            HighlightStyle::Tango => "tango",
            HighlightStyle::Espresso => "espresso",
            HighlightStyle::Zenburn => "zenburn",
            HighlightStyle::Kate => "kate",
            HighlightStyle::Monochrome => "monochrome",
            HighlightStyle::Breezedark => "breezedark",
            HighlightStyle::Haddock => "haddock",
        }
    }
}

/// What pandoc should produce. Pandoc picks the writer from the output extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Pdf,
    Tex,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Tex => "tex",
        }
    }
}

macro_rules! choice_impls {
    ($($ty:ty),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse_choice(s)
            }
        }
    )*};
}

choice_impls!(PdfEngine, HighlightStyle);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_variants() {
        for (engine, name) in PdfEngine::ALL.iter().zip(PdfEngine::NAMES) {
            assert_eq!(engine.as_str(), *name);
        }
        for (style, name) in HighlightStyle::ALL.iter().zip(HighlightStyle::NAMES) {
            assert_eq!(style.as_str(), *name);
        }
        assert_eq!(PdfEngine::ALL.len(), PdfEngine::NAMES.len());
        assert_eq!(HighlightStyle::ALL.len(), HighlightStyle::NAMES.len());
    }

    #[test]
    fn every_name_parses() {
        for name in PdfEngine::NAMES {
            assert_eq!(name.parse::<PdfEngine>().unwrap().to_string(), *name);
        }
        for name in HighlightStyle::NAMES {
            assert_eq!(name.parse::<HighlightStyle>().unwrap().to_string(), *name);
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        let err = "XeLaTeX".parse::<PdfEngine>().unwrap_err();
        assert_eq!(err.value, "XeLaTeX");
        assert_eq!(err.allowed, PdfEngine::NAMES);
    }

    #[test]
    fn unknown_style_is_rejected() {
        let err = "solarized".parse::<HighlightStyle>().unwrap_err();
        assert_eq!(err.allowed.len(), 8);
    }

    #[test]
    fn defaults() {
        assert_eq!(PdfEngine::default(), PdfEngine::Xelatex);
        assert_eq!(HighlightStyle::default(), HighlightStyle::Pygments);
        assert_eq!(OutputFormat::default().extension(), "pdf");
        assert_eq!(OutputFormat::Tex.extension(), "tex");
    }
}
