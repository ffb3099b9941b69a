//! Paragraph and run-level types.

use serde::{Deserialize, Serialize};

/// A paragraph of a word-processing document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Name of the paragraph style (e.g. "Normal", "Heading 1")
    pub style_name: String,

    /// Alignment set directly on the paragraph
    pub alignment: Option<Alignment>,

    /// Text runs in document order
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Create a new empty paragraph with the given style name.
    pub fn new(style_name: impl Into<String>) -> Self {
        Self {
            style_name: style_name.into(),
            alignment: None,
            runs: Vec::new(),
        }
    }

    /// Create a "Normal" paragraph with a single unstyled run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new("Normal");
        p.add_run(Run::new(text));
        p
    }

    /// Add a run to the paragraph.
    pub fn add_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Set alignment and return self.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if the paragraph has no visible text.
    pub fn is_blank(&self) -> bool {
        self.runs.iter().all(|r| r.text.trim().is_empty())
    }
}

/// A contiguous span of text sharing one set of character properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// The text content
    pub text: String,

    /// Character formatting set directly on the run
    pub properties: RunProperties,
}

impl Run {
    /// Create a new run with no direct formatting.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            properties: RunProperties::default(),
        }
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            properties: RunProperties {
                bold: Some(true),
                ..Default::default()
            },
        }
    }

    /// Create an italic run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            properties: RunProperties {
                italic: Some(true),
                ..Default::default()
            },
        }
    }
}

/// Direct character formatting of a run.
///
/// Toggle properties are tri-state: `None` means the run inherits the
/// value from its style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunProperties {
    /// Bold toggle
    pub bold: Option<bool>,

    /// Italic toggle
    pub italic: Option<bool>,

    /// Underline (any underline style other than `none` counts as true)
    pub underline: Option<bool>,

    /// Font size in points
    pub size: Option<f32>,

    /// ASCII font name
    pub font_name: Option<String>,

    /// Text color as `RRGGBB`
    pub color: Option<String>,
}

impl RunProperties {
    /// Bold is explicitly switched on.
    pub fn is_bold(&self) -> bool {
        self.bold == Some(true)
    }

    /// Italic is explicitly switched on.
    pub fn is_italic(&self) -> bool {
        self.italic == Some(true)
    }

    /// Underline is explicitly switched on.
    pub fn is_underlined(&self) -> bool {
        self.underline == Some(true)
    }
}

/// Paragraph or cell justification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Left (or start) alignment
    Left,
    /// Center alignment
    Center,
    /// Right (or end) alignment
    Right,
    /// Justified alignment
    Justify,
    /// Distributed alignment
    Distribute,
    /// Justified with medium kashida
    JustifyMedium,
    /// Justified with high kashida
    JustifyHigh,
    /// Justified with low kashida
    JustifyLow,
    /// Thai distributed justification
    ThaiJustify,
}

impl Alignment {
    /// Map a WordprocessingML `ST_Jc` value to an alignment.
    ///
    /// `start` and `end` fold into `Left` and `Right`, so switching between
    /// those spellings is not a change. Returns `None` for values with no
    /// justification meaning (`numTab`) and for anything unrecognized.
    pub fn from_ooxml(value: &str) -> Option<Self> {
        match value {
            "left" | "start" => Some(Alignment::Left),
            "center" => Some(Alignment::Center),
            "right" | "end" => Some(Alignment::Right),
            "both" => Some(Alignment::Justify),
            "distribute" => Some(Alignment::Distribute),
            "mediumKashida" => Some(Alignment::JustifyMedium),
            "highKashida" => Some(Alignment::JustifyHigh),
            "lowKashida" => Some(Alignment::JustifyLow),
            "thaiDistribute" => Some(Alignment::ThaiJustify),
            _ => None,
        }
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
            Alignment::Distribute => "distribute",
            Alignment::JustifyMedium => "justify_medium",
            Alignment::JustifyHigh => "justify_high",
            Alignment::JustifyLow => "justify_low",
            Alignment::ThaiJustify => "thai_justify",
        };
        f.write_str(name)
    }
}
