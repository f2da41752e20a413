// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Encode-time diagnostics.  Attributes dropped because no tag could be
// resolved are collected here and handed back to the caller with the
// encoded message, so a silent drop is always visible in the result.

use std::fmt;

use presswire_core::types::GroupKind;
use tracing::warn;

/// An attribute that contributed no bytes because its tag was unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedAttribute {
    pub group: GroupKind,
    pub name: String,
}

impl fmt::Display for SkippedAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.group.as_str(), self.name)
    }
}

/// Collector threaded through one message encode.
#[derive(Debug, Default)]
pub struct Diagnostics {
    skipped: Vec<SkippedAttribute>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a dropped attribute.
    pub fn skip(&mut self, group: GroupKind, name: &str) {
        warn!(group = group.as_str(), attribute = name, "no tag for attribute, skipped");
        self.skipped.push(SkippedAttribute {
            group,
            name: name.to_owned(),
        });
    }

    pub fn skipped(&self) -> &[SkippedAttribute] {
        &self.skipped
    }

    pub fn into_skipped(self) -> Vec<SkippedAttribute> {
        self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_are_kept_in_order() {
        let mut diag = Diagnostics::new();
        diag.skip(GroupKind::Operation, "x-first");
        diag.skip(GroupKind::Printer, "x-second");

        let names: Vec<String> = diag.skipped().iter().map(ToString::to_string).collect();
        assert_eq!(names, ["operation/x-first", "printer/x-second"]);
        assert_eq!(diag.into_skipped().len(), 2);
    }
}
