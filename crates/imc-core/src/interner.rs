//! Label interning: canonical label text is deduplicated and handed out as
//! cheap `LabelId` handles.
//!
//! Comparing two labels is then O(1) integer comparison. Each `Graph` owns
//! its own interner; there is no process-wide label table.

use std::collections::HashMap;

use crate::error::LabelParseError;
use crate::label::Label;

/// A lightweight handle to an interned label.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct LabelId(u32);

impl LabelId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }
}

/// Label interner. Deduplicates by canonical string form.
#[derive(Debug, Clone, Default)]
pub struct Interner {
    map: HashMap<String, LabelId>,
    labels: Vec<Label>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `text`, returning its handle. When `quote` is true, `text` is
    /// raw external action text and is escaped before classification, so a
    /// literal `|` or `\` in it can't be misread as a composition separator
    /// or its escape. Pass `quote: false` for text already in canonical
    /// form (e.g. re-reading a label this crate itself wrote out).
    pub fn get_or_intern(&mut self, text: &str, quote: bool) -> Result<LabelId, LabelParseError> {
        let prepared = if quote { Label::quote(text) } else { text.to_owned() };
        let label = Label::parse(&prepared)?;
        Ok(self.intern(label))
    }

    /// Intern an already-constructed label, returning its handle. If the
    /// canonical form was already interned, returns the existing handle.
    pub fn intern(&mut self, label: Label) -> LabelId {
        let canonical = label.canonical();
        if let Some(&id) = self.map.get(&canonical) {
            return id;
        }
        let id = LabelId(self.labels.len() as u32);
        self.labels.push(label);
        self.map.insert(canonical, id);
        id
    }

    /// Resolve a handle back to its label.
    ///
    /// # Panics
    /// Panics if the handle was not created by this interner.
    #[inline]
    pub fn resolve(&self, id: LabelId) -> &Label {
        &self.labels[id.0 as usize]
    }

    #[inline]
    pub fn try_resolve(&self, id: LabelId) -> Option<&Label> {
        self.labels.get(id.0 as usize)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (LabelId, &Label)> {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, l)| (LabelId(i as u32), l))
    }

    /// Emit every label's canonical text as one concatenated blob plus an
    /// offset table, for binary codecs that want a compact label table.
    ///
    /// The offsets array has `len() + 1` entries; the last is the total blob
    /// size.
    pub fn to_blob(&self) -> (Vec<u8>, Vec<u32>) {
        let mut blob = Vec::new();
        let mut offsets = Vec::with_capacity(self.labels.len() + 1);

        for l in &self.labels {
            offsets.push(blob.len() as u32);
            blob.extend_from_slice(l.canonical().as_bytes());
        }
        offsets.push(blob.len() as u32);

        (blob, offsets)
    }
}
