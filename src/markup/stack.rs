//! The active tag stack and its close-with-reordering procedure
//!
//! Entries are kept outermost first. Closing a tag that is not the innermost
//! one closes everything above it, drops it, then reopens the survivors in
//! their original order, so the emitted stream stays properly nested.

use super::kind::{MarkupKind, Tag};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagStack {
    open: Vec<MarkupKind>,
}

impl TagStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently open kinds, outermost first
    pub fn kinds(&self) -> &[MarkupKind] {
        &self.open
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn contains(&self, kind: MarkupKind) -> bool {
        self.open.contains(&kind)
    }

    fn position(&self, kind: MarkupKind) -> Option<usize> {
        self.open.iter().position(|k| *k == kind)
    }

    /// Open `kind`, restarting it first if it is already open
    pub fn open(&mut self, kind: MarkupKind, out: &mut String) {
        if self.contains(kind) {
            log::trace!("duplicate <{}> restarts the open tag", kind.name());
            self.close(kind, out);
        }
        self.open.push(kind);
        out.push_str(kind.open_tag());
    }

    /// Close `kind` wherever it sits in the stack
    ///
    /// Returns false, emitting nothing, when `kind` is not open.
    pub fn close(&mut self, kind: MarkupKind, out: &mut String) -> bool {
        let Some(idx) = self.position(kind) else {
            log::trace!("dropping stray </{}>", kind.name());
            return false;
        };
        for k in self.open[idx..].iter().rev() {
            out.push_str(k.close_tag());
        }
        self.open.remove(idx);
        for k in &self.open[idx..] {
            out.push_str(k.open_tag());
        }
        true
    }

    /// Apply a tag token, emitting the resulting markup
    pub fn emit(&mut self, tag: Tag, out: &mut String) {
        match tag {
            Tag::Open(kind) => self.open(kind, out),
            Tag::Close(kind) => {
                self.close(kind, out);
            }
        }
    }

    /// Apply a tag token to the stack state without emitting anything
    pub fn apply(&mut self, tag: Tag) {
        match tag {
            Tag::Open(kind) => {
                if let Some(idx) = self.position(kind) {
                    self.open.remove(idx);
                }
                self.open.push(kind);
            }
            Tag::Close(kind) => {
                if let Some(idx) = self.position(kind) {
                    self.open.remove(idx);
                }
            }
        }
    }

    /// Emit open tags for every entry, outermost first
    pub fn write_opens(&self, out: &mut String) {
        for kind in &self.open {
            out.push_str(kind.open_tag());
        }
    }

    /// Emit close tags for every entry, innermost first, keeping the state
    pub fn write_closes(&self, out: &mut String) {
        for kind in self.open.iter().rev() {
            out.push_str(kind.close_tag());
        }
    }

    /// Emit close tags for every entry and empty the stack
    pub fn close_all(&mut self, out: &mut String) {
        if !self.open.is_empty() {
            log::trace!("auto-closing {} unterminated tag(s)", self.open.len());
        }
        self.write_closes(out);
        self.open.clear();
    }

    pub fn into_kinds(self) -> Vec<MarkupKind> {
        self.open
    }
}
