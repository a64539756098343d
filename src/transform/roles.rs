//! Role matching for the children of the modal body.

use crate::parse::types::DocumentNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionRole {
    Header,
    Content,
    Footer,
}

impl SectionRole {
    /// Checked in this order; the first marker found in a name decides its role.
    const MARKERS: [(&'static str, SectionRole); 3] = [
        ("header", SectionRole::Header),
        ("content", SectionRole::Content),
        ("action", SectionRole::Footer),
    ];

    /// Role of a body child by case-insensitive substring match on its name.
    pub fn of(node: &DocumentNode) -> Option<SectionRole> {
        let name = node.lowercase_name();
        Self::MARKERS
            .iter()
            .find(|(marker, _)| name.contains(marker))
            .map(|(_, role)| *role)
    }
}

/// Index of the child chosen for each role. When several children share a
/// role the last one wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sections {
    pub header: Option<usize>,
    pub content: Option<usize>,
    pub footer: Option<usize>,
}

impl Sections {
    pub fn assign(&mut self, role: SectionRole, index: usize) {
        let slot = match role {
            SectionRole::Header => &mut self.header,
            SectionRole::Content => &mut self.content,
            SectionRole::Footer => &mut self.footer,
        };
        *slot = Some(index);
    }
}
