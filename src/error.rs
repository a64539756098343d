//! Error reported by the conversion pipeline, tagged with the phase it came from.

use crate::block::validate::BlockValidationError;
use crate::transform::TransformError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Parse,
    Transform,
    Validate,
    Render,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Parse => "Parse",
            Phase::Transform => "Transform",
            Phase::Validate => "Validate",
            Phase::Render => "Render",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an error points at: a source design node or an output block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    Node(String),
    Block(String),
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Subject::Node(name) => write!(f, "node '{}'", name),
            Subject::Block(id) => write!(f, "block '{}'", id),
        }
    }
}

fn subject_suffix(subject: &Option<Subject>) -> String {
    subject
        .as_ref()
        .map(|s| format!(" ({})", s))
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[{phase}:{code}] {message}{}", subject_suffix(.subject))]
pub struct ConverterError {
    pub code: &'static str,
    pub phase: Phase,
    pub message: String,
    pub subject: Option<Subject>,
}

impl ConverterError {
    pub fn new(phase: Phase, code: &'static str, message: impl Into<String>) -> Self {
        ConverterError {
            code,
            phase,
            message: message.into(),
            subject: None,
        }
    }

    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subject = Some(subject);
        self
    }

    /// Name of the design node this error refers to, if any.
    pub fn node_name(&self) -> Option<&str> {
        match &self.subject {
            Some(Subject::Node(name)) => Some(name),
            _ => None,
        }
    }

    /// Id of the output block this error refers to, if any.
    pub fn block_id(&self) -> Option<&str> {
        match &self.subject {
            Some(Subject::Block(id)) => Some(id),
            _ => None,
        }
    }
}

impl From<TransformError> for ConverterError {
    fn from(e: TransformError) -> Self {
        let message = e.to_string();
        match e {
            TransformError::InvalidStructure => ConverterError::new(Phase::Transform, "T001", message),
            TransformError::UnrecognizedChild { name } => {
                ConverterError::new(Phase::Transform, "T002", message).with_subject(Subject::Node(name))
            }
        }
    }
}

impl From<BlockValidationError> for ConverterError {
    fn from(e: BlockValidationError) -> Self {
        let error = ConverterError::new(Phase::Validate, e.code, e.message);
        match e.block_id {
            Some(id) => error.with_subject(Subject::Block(id)),
            None => error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_subject() {
        let e = ConverterError::new(Phase::Parse, "P001", "bad json");
        assert_eq!(e.to_string(), "[Parse:P001] bad json");
        assert_eq!(e.node_name(), None);
    }

    #[test]
    fn unrecognized_child_points_at_node() {
        let e = ConverterError::from(TransformError::UnrecognizedChild {
            name: "Weird Thing".into(),
        });
        assert_eq!(e.code, "T002");
        assert_eq!(e.node_name(), Some("Weird Thing"));
        assert_eq!(e.block_id(), None);
    }

    #[test]
    fn validation_error_points_at_block() {
        let e = ConverterError::from(BlockValidationError {
            code: "B004",
            message: "Modal parent must be 'root_id', found 'x'".into(),
            block_id: Some("b_00001".into()),
        });
        assert_eq!(e.phase, Phase::Validate);
        assert_eq!(e.block_id(), Some("b_00001"));
        assert_eq!(
            e.to_string(),
            "[Validate:B004] Modal parent must be 'root_id', found 'x' (block 'b_00001')"
        );
    }
}
