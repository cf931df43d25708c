use serde::{Serialize, Serializer};

/// Origin of a structured error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorSource {
    #[serde(rename = "LaTeX")]
    Latex,
    #[serde(rename = "pdfTeX")]
    PdfTex,
    #[serde(rename = "Package")]
    Package,
    #[serde(rename = "Class")]
    Class,
    #[serde(rename = "Module")]
    Module,
}

impl ErrorSource {
    pub(crate) fn from_keyword(s: &str) -> Option<Self> {
        Some(match s {
            "LaTeX" => Self::Latex,
            "pdfTeX" => Self::PdfTex,
            "Package" => Self::Package,
            "Class" => Self::Class,
            "Module" => Self::Module,
            _ => return None,
        })
    }
}

/// Origin of a warning message.
///
/// `Pdf` and `MissingCharacter` are assigned by their dedicated rules rather
/// than extracted from a `<Source> Warning:` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningSource {
    #[serde(rename = "LaTeX")]
    Latex,
    #[serde(rename = "pdfTeX")]
    PdfTex,
    #[serde(rename = "LaTeX3")]
    Latex3,
    #[serde(rename = "LaTeX Font")]
    LatexFont,
    #[serde(rename = "Package")]
    Package,
    #[serde(rename = "Class")]
    Class,
    #[serde(rename = "Module")]
    Module,
    #[serde(rename = "PDF")]
    Pdf,
    #[serde(rename = "Missing Character")]
    MissingCharacter,
}

impl WarningSource {
    pub(crate) fn from_keyword(s: &str) -> Option<Self> {
        Some(match s {
            "LaTeX" => Self::Latex,
            "pdfTeX" => Self::PdfTex,
            "LaTeX3" => Self::Latex3,
            "LaTeX Font" => Self::LatexFont,
            "Package" => Self::Package,
            "Class" => Self::Class,
            "Module" => Self::Module,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BadboxKind {
    #[serde(rename = "Over")]
    Over,
    #[serde(rename = "Under")]
    Under,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BoxDirection {
    #[serde(rename = "h")]
    Horizontal,
    #[serde(rename = "v")]
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MissingRefKind {
    #[serde(rename = "Missing Citation")]
    Citation,
    #[serde(rename = "Missing Reference")]
    Reference,
}

/// An `! ...` error line.
///
/// `source` is absent for bare errors (`! message` with no recognized
/// `<Source> Error:` shape).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
    pub message: String,
}

/// A `<Source> Warning:` line, a PDF backend notice, or a missing character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarningRecord {
    #[serde(rename = "type")]
    pub source: WarningSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
    pub message: String,
}

/// An over/underfull box notice.
///
/// `by` holds the badness count or the point measurement, whichever the
/// notice carries. `lines` is the `(start, end)` pair of source line numbers;
/// both ends are equal for single-line and output-routine notices, and the
/// field is absent when the output-routine marker carries no page number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadboxRecord {
    #[serde(rename = "type")]
    pub kind: BadboxKind,
    pub direction: BoxDirection,
    pub by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<(String, String)>,
}

/// An undefined citation or cross-reference notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingRefRecord {
    #[serde(rename = "type")]
    pub kind: MissingRefKind,
    pub key: String,
    pub page: String,
    pub line: String,
}

/// One classified message: typed fields plus the surrounding raw lines.
///
/// `context` keeps the raw log lines in original order; the first element is
/// the line that triggered the match. It serializes as a single joined block
/// of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message<R> {
    pub fields: R,
    #[serde(serialize_with = "join_lines")]
    pub context: Vec<String>,
}

impl<R> Message<R> {
    /// The context window as one block of text.
    pub fn context_text(&self) -> String {
        self.context.join("\n")
    }
}

fn join_lines<S>(lines: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&lines.join("\n"))
}

/// Immutable result of one scan: the four category collections in encounter
/// order, their counts, and the derived status booleans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub errors: Vec<Message<ErrorRecord>>,
    pub warnings: Vec<Message<WarningRecord>>,
    pub badboxes: Vec<Message<BadboxRecord>>,
    pub missing_refs: Vec<Message<MissingRefRecord>>,
    pub errors_count: usize,
    pub warnings_count: usize,
    pub badboxes_count: usize,
    pub has_errors: bool,
    pub has_warnings: bool,
}

impl Report {
    pub(crate) fn new(
        errors: Vec<Message<ErrorRecord>>,
        warnings: Vec<Message<WarningRecord>>,
        badboxes: Vec<Message<BadboxRecord>>,
        missing_refs: Vec<Message<MissingRefRecord>>,
    ) -> Self {
        Self {
            errors_count: errors.len(),
            warnings_count: warnings.len(),
            badboxes_count: badboxes.len(),
            has_errors: !errors.is_empty(),
            has_warnings: !warnings.is_empty(),
            errors,
            warnings,
            badboxes,
            missing_refs,
        }
    }
}
