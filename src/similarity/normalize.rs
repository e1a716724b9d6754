use super::diagnostics::{Diagnostic, DiagnosticSink};

/// Operands ready for matching: `s1` is never shorter than `s2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Normalized {
    pub s1: Vec<char>,
    pub s2: Vec<char>,
}

impl Normalized {
    #[inline]
    pub fn l1(&self) -> usize {
        self.s1.len()
    }

    #[inline]
    pub fn l2(&self) -> usize {
        self.s2.len()
    }
}

/// Remove every occurrence of each `strip` entry, in the order given.
pub(crate) fn strip_all<S: AsRef<str>>(s: &str, strip: &[S]) -> String {
    let mut out = s.to_string();
    for pattern in strip {
        let pattern = pattern.as_ref();
        // `str::replace` with an empty pattern inserts between every character
        if pattern.is_empty() {
            continue;
        }
        out = out.replace(pattern, "");
    }
    out
}

// Characters whose upper-case form is not a single char (`ß` -> `SS`) are kept
// so lengths measured before folding still index the folded text.
fn fold_case(chars: &mut [char], sink: &dyn DiagnosticSink) {
    for ch in chars.iter_mut() {
        let mut upper = ch.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(u), None) => *ch = u,
            _ => sink.record(&Diagnostic::CaseFoldSkipped { ch: *ch }),
        }
    }
}

pub(crate) fn normalize<S: AsRef<str>>(
    s1: &str,
    s2: &str,
    strip: &[S],
    keep_case: bool,
    sink: &dyn DiagnosticSink,
) -> Normalized {
    let p1 = strip_all(s1, strip);
    let p2 = strip_all(s2, strip);

    let mut a: Vec<char> = p1.chars().collect();
    let mut b: Vec<char> = p2.chars().collect();

    // Longest first. Equal lengths are ordered by content so that the result
    // does not depend on argument order.
    if a.len() < b.len() || (a.len() == b.len() && a > b) {
        std::mem::swap(&mut a, &mut b);
    }

    if !keep_case {
        fold_case(&mut a, sink);
        fold_case(&mut b, sink);
    }

    let normalized = Normalized { s1: a, s2: b };
    sink.record(&Diagnostic::Normalized {
        s1: &normalized.s1,
        s2: &normalized.s2,
        l1: normalized.l1(),
        l2: normalized.l2(),
    });
    normalized
}
