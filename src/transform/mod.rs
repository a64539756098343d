//! Transform phase: modal `DocumentNode` tree → `ModalBlock`.
//!
//! The modal's sections live at a fixed depth below the input root:
//!
//! ```text
//! root
//! └── children[0]
//!     └── children[0]            modal component (size, radius, padding)
//!         └── children[0]        body container (itemSpacing)
//!             └── children[..]   header / content / action sections
//! ```
//!
//! The input tree is never mutated. Body children are cloned before padding
//! back-fill and the adjusted copies are returned with the block.

pub mod appearance;
pub mod backfill;
pub mod roles;

use crate::block::types::*;
use crate::ids::{DocumentIds, IdGenerator};
use crate::parse::types::DocumentNode;

pub use roles::{SectionRole, Sections};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    #[error("Modal component structure invalid")]
    InvalidStructure,
    #[error("Unknown Element Found!! Cannot Transform {name}")]
    UnrecognizedChild { name: String },
}

/// A converted modal together with the ids and sections it was built from.
#[derive(Debug, Clone)]
pub struct ModalTransform {
    pub block: ModalBlock,
    pub ids: DocumentIds,
    /// Body children in source order, padding back-filled where applicable.
    pub body: Vec<DocumentNode>,
    pub sections: Sections,
}

impl ModalTransform {
    pub fn header(&self) -> Option<&DocumentNode> {
        self.sections.header.and_then(|i| self.body.get(i))
    }

    pub fn content(&self) -> Option<&DocumentNode> {
        self.sections.content.and_then(|i| self.body.get(i))
    }

    pub fn footer(&self) -> Option<&DocumentNode> {
        self.sections.footer.and_then(|i| self.body.get(i))
    }

    /// The single block definition of the record.
    pub fn modal(&self) -> Option<&BlockDefinition> {
        self.block.get(&self.ids.modal_id)
    }
}

/// Convert a modal node tree into a block record.
pub fn transform(
    root: &DocumentNode,
    ids: &mut impl IdGenerator,
) -> Result<ModalTransform, TransformError> {
    let component = root
        .child(0)
        .and_then(|n| n.child(0))
        .ok_or(TransformError::InvalidStructure)?;
    let body_container = component.child(0).ok_or(TransformError::InvalidStructure)?;
    let source_children = body_container
        .children
        .as_deref()
        .ok_or(TransformError::InvalidStructure)?;

    let sections = locate_sections(source_children)?;

    let mut body = source_children.to_vec();
    if backfill::needs_backfill(&body) {
        backfill::backfill_padding(&mut body, body_container, component);
    }

    let ids = DocumentIds::generate(ids);
    let block = ModalBlock::single(build_definition(&ids, &sections, component));

    Ok(ModalTransform {
        block,
        ids,
        body,
        sections,
    })
}

/// Assign every body child a role. Fails on the first child with none.
fn locate_sections(children: &[DocumentNode]) -> Result<Sections, TransformError> {
    let mut sections = Sections::default();
    for (idx, child) in children.iter().enumerate() {
        let role = SectionRole::of(child).ok_or_else(|| TransformError::UnrecognizedChild {
            name: child.name_or_empty().to_string(),
        })?;
        sections.assign(role, idx);
    }
    Ok(sections)
}

fn build_definition(ids: &DocumentIds, sections: &Sections, component: &DocumentNode) -> BlockDefinition {
    let slots = Slots {
        header: sections.header.map(|_| SlotConfig::wrapped(&ids.header_id)),
        body: sections.content.map(|_| SlotConfig::wrapped(&ids.body_id)),
        footer: sections.footer.map(|_| SlotConfig::wrapped(&ids.footer_id)),
    };

    BlockDefinition {
        id: ids.modal_id.clone(),
        dp_on: vec![],
        display_name: MODAL_DISPLAY_NAME.to_string(),
        data_source_ids: vec![],
        parent_id: ids.parent_id.clone(),
        visibility: Visibility { value: true },
        component: ModalComponent {
            component_type: ComponentType::Modal,
            slots,
            content: ModalContent::default(),
            appearance: appearance::derive_appearance(component),
        },
    }
}
