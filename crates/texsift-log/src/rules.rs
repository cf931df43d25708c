use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::record::{
    BadboxKind, BadboxRecord, BoxDirection, ErrorRecord, ErrorSource, MissingRefKind,
    MissingRefRecord, WarningRecord, WarningSource,
};

/// Outcome of matching one line against the rule list.
///
/// `Info` marks a recognized informational line; the scan engine drops it
/// instead of collecting a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    MissingRef(MissingRefRecord),
    Badbox(BadboxRecord),
    Warning(WarningRecord),
    Error(ErrorRecord),
    Info,
}

static MISSING_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^LaTeX Warning: (Citation|Reference) [`']([^']+)' on page (\d+) undefined on input line (\d+)\.",
    )
    .unwrap()
});

static BADBOX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(Over|Under)full \\([hv])box \((?:badness (\d+)|(\d+(?:\.\d+)?pt) too \w+)\) (?:(?:in paragraph|in alignment|detected) (?:at lines (\d+)--(\d+)|at line (\d+))|has occurred while \\output is active \[(\d+)?\])",
    )
    .unwrap()
});

static WARNING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^((?:La|pdf)TeX|LaTeX3|LaTeX Font|Package|Class|Module)(?: (\w+))? [wW]arning(?: \((\\?\w+)\))?: (.*)",
    )
    .unwrap()
});

static ERROR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:! ((?:La|pdf)TeX|Package|Class|Module)(?: (\w+))? [eE]rror(?: \((\\?\w+)\))?: (.*)|! (.*))",
    )
    .unwrap()
});

static INFO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^((?:La|pdf)TeX|LaTeX3|Package|Class|Module)(?: (\w+))? [iI]nfo(?: \((\\?\w+)\))?: (.*)",
    )
    .unwrap()
});

static PDF_WARNING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:pdfTeX warning|warning \(pdf backend\)): (.*)").unwrap());

static MISSING_CHAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Missing character: (.*)").unwrap());

struct Rule {
    pattern: &'static Lazy<Regex>,
    extract: fn(&Captures) -> Option<Classification>,
}

/// Priority order. Missing references and badboxes come first because the
/// generic warning pattern would otherwise capture them; warnings come before
/// errors because some `!`-free prefixes read like errors but are not.
/// `pdfTeX warning (...)` lines are already caught by the generic warning
/// rule, so the PDF backend rule only sees the lowercase `warning (pdf
/// backend)` shape.
static RULES: &[Rule] = &[
    Rule {
        pattern: &MISSING_REF,
        extract: missing_ref,
    },
    Rule {
        pattern: &BADBOX,
        extract: badbox,
    },
    Rule {
        pattern: &WARNING,
        extract: warning,
    },
    Rule {
        pattern: &ERROR,
        extract: error,
    },
    Rule {
        pattern: &INFO,
        extract: info,
    },
    Rule {
        pattern: &PDF_WARNING,
        extract: pdf_warning,
    },
    Rule {
        pattern: &MISSING_CHAR,
        extract: missing_char,
    },
];

/// Runs the rules in priority order against one line.
///
/// The first rule whose pattern matches wins and short-circuits the rest;
/// `None` means the line is unclassified and should be ignored.
pub fn classify_line(line: &str) -> Option<Classification> {
    for rule in RULES {
        if let Some(caps) = rule.pattern.captures(line) {
            return (rule.extract)(&caps);
        }
    }
    None
}

fn missing_ref(caps: &Captures) -> Option<Classification> {
    let kind = match caps.get(1)?.as_str() {
        "Citation" => MissingRefKind::Citation,
        "Reference" => MissingRefKind::Reference,
        _ => return None,
    };
    Some(Classification::MissingRef(MissingRefRecord {
        kind,
        key: caps.get(2)?.as_str().to_string(),
        page: caps.get(3)?.as_str().to_string(),
        line: caps.get(4)?.as_str().to_string(),
    }))
}

fn badbox(caps: &Captures) -> Option<Classification> {
    let kind = match caps.get(1)?.as_str() {
        "Over" => BadboxKind::Over,
        "Under" => BadboxKind::Under,
        _ => return None,
    };
    let direction = match caps.get(2)?.as_str() {
        "h" => BoxDirection::Horizontal,
        "v" => BoxDirection::Vertical,
        _ => return None,
    };
    let by = caps.get(3).or(caps.get(4))?.as_str().to_string();
    let lines = if let Some(single) = caps.get(7) {
        let n = single.as_str().to_string();
        Some((n.clone(), n))
    } else if let Some(page) = caps.get(8) {
        let n = page.as_str().to_string();
        Some((n.clone(), n))
    } else if let (Some(start), Some(end)) = (caps.get(5), caps.get(6)) {
        Some((start.as_str().to_string(), end.as_str().to_string()))
    } else {
        // `\output is active []` with no page number yet
        None
    };
    Some(Classification::Badbox(BadboxRecord {
        kind,
        direction,
        by,
        lines,
    }))
}

fn warning(caps: &Captures) -> Option<Classification> {
    let source = WarningSource::from_keyword(caps.get(1)?.as_str())?;
    let mut record = WarningRecord {
        source,
        package: None,
        class: None,
        component: None,
        extra: caps.get(3).map(|m| m.as_str().to_string()),
        message: caps.get(4)?.as_str().to_string(),
    };
    if let Some(name) = caps.get(2) {
        let name = name.as_str().to_string();
        match source {
            WarningSource::Package => record.package = Some(name),
            WarningSource::Class => record.class = Some(name),
            _ => record.component = Some(name),
        }
    }
    Some(Classification::Warning(record))
}

fn error(caps: &Captures) -> Option<Classification> {
    let record = if let Some(keyword) = caps.get(1) {
        let source = ErrorSource::from_keyword(keyword.as_str())?;
        let mut record = ErrorRecord {
            source: Some(source),
            package: None,
            class: None,
            component: None,
            extra: caps.get(3).map(|m| m.as_str().to_string()),
            message: caps.get(4)?.as_str().to_string(),
        };
        if let Some(name) = caps.get(2) {
            let name = name.as_str().to_string();
            match source {
                ErrorSource::Package => record.package = Some(name),
                ErrorSource::Class => record.class = Some(name),
                _ => record.component = Some(name),
            }
        }
        record
    } else {
        ErrorRecord {
            source: None,
            package: None,
            class: None,
            component: None,
            extra: None,
            message: caps.get(5)?.as_str().to_string(),
        }
    };
    Some(Classification::Error(record))
}

fn info(_caps: &Captures) -> Option<Classification> {
    Some(Classification::Info)
}

fn pdf_warning(caps: &Captures) -> Option<Classification> {
    Some(Classification::Warning(WarningRecord {
        source: WarningSource::Pdf,
        package: None,
        class: None,
        component: None,
        extra: None,
        message: caps.get(1)?.as_str().to_string(),
    }))
}

fn missing_char(caps: &Captures) -> Option<Classification> {
    Some(Classification::Warning(WarningRecord {
        source: WarningSource::MissingCharacter,
        package: None,
        class: None,
        component: None,
        extra: None,
        message: caps.get(1)?.as_str().to_string(),
    }))
}
