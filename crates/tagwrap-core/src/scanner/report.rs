use serde::Serialize;

/// One tagged method that was wrapped and invoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    pub method: &'static str,
    pub label: String,
}

/// Summary of a completed scan, in invocation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScanReport(Vec<Invocation>);

impl ScanReport {
    pub(crate) fn push(&mut self, method: &'static str, label: &str) {
        self.0.push(Invocation {
            method,
            label: label.to_string(),
        });
    }

    /// `true` when the target had no tagged methods.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Invocation> {
        self.0.iter()
    }

    /// Labels in invocation order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|i| i.label.as_str())
    }
}
