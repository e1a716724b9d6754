#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic<'a> {
    Normalized {
        s1: &'a [char],
        s2: &'a [char],
        l1: usize,
        l2: usize,
    },
    CaseFoldSkipped { ch: char },
    ExactMatch,
    ShortString { l2: usize, ignore_short: i64 },
    MatchDistance(usize),
    Matches {
        matched1: &'a [usize],
        matched2: &'a [usize],
    },
    Transposes(usize),
}

pub trait DiagnosticSink: Sync {
    fn record(&self, event: &Diagnostic<'_>);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&Diagnostic<'_>) + Sync,
{
    fn record(&self, event: &Diagnostic<'_>) {
        self(event)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    #[inline]
    fn record(&self, _event: &Diagnostic<'_>) {}
}

/// Forwards events to `tracing`. Case fold fallbacks log at warn, the rest at debug.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, event: &Diagnostic<'_>) {
        match event {
            Diagnostic::Normalized { s1, s2, l1, l2 } => {
                let s1: String = s1.iter().collect();
                let s2: String = s2.iter().collect();
                tracing::debug!(l1, s1 = %s1, "normalized");
                tracing::debug!(l2, s2 = %s2, "normalized");
            }
            Diagnostic::CaseFoldSkipped { ch } => {
                tracing::warn!(ch = %ch, "upper-case form changes length, character kept as is");
            }
            Diagnostic::ExactMatch => tracing::debug!("exact match"),
            Diagnostic::ShortString { l2, ignore_short } => {
                tracing::debug!(l2, ignore_short, "short string");
            }
            Diagnostic::MatchDistance(mdist) => tracing::debug!(mdist, "match dist"),
            Diagnostic::Matches { matched1, matched2 } => {
                tracing::debug!(?matched1, ?matched2, matches = matched2.len(), "matches");
            }
            Diagnostic::Transposes(transposes) => tracing::debug!(transposes, "transposes"),
        }
    }
}
