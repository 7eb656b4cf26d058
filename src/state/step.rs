//! Wizard steps

use super::draft::FieldId;

/// Position in the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    BasicInfo,
    Address,
    Documents,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::BasicInfo, Step::Address, Step::Documents];

    /// 1-based step number
    pub fn index(&self) -> usize {
        match self {
            Self::BasicInfo => 1,
            Self::Address => 2,
            Self::Documents => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Information",
            Self::Address => "Address Details",
            Self::Documents => "Document Upload",
        }
    }

    pub fn next(&self) -> Option<Step> {
        match self {
            Self::BasicInfo => Some(Self::Address),
            Self::Address => Some(Self::Documents),
            Self::Documents => None,
        }
    }

    pub fn prev(&self) -> Option<Step> {
        match self {
            Self::BasicInfo => None,
            Self::Address => Some(Self::BasicInfo),
            Self::Documents => Some(Self::Address),
        }
    }

    pub fn is_first(&self) -> bool {
        self.prev().is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    /// Inputs shown on this step, in focus order
    pub fn fields(&self) -> &'static [FieldId] {
        match self {
            Self::BasicInfo => &[FieldId::Title, FieldId::Description, FieldId::Phone],
            Self::Address => &[
                FieldId::Street,
                FieldId::City,
                FieldId::StateProv,
                FieldId::Zip,
                FieldId::Country,
            ],
            Self::Documents => &[FieldId::File],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_step() {
        assert_eq!(Step::default(), Step::BasicInfo);
        assert_eq!(Step::default().index(), 1);
    }

    #[test]
    fn test_transitions_are_linear() {
        assert_eq!(Step::BasicInfo.next(), Some(Step::Address));
        assert_eq!(Step::Address.next(), Some(Step::Documents));
        assert_eq!(Step::Documents.next(), None);
        assert_eq!(Step::Documents.prev(), Some(Step::Address));
        assert_eq!(Step::BasicInfo.prev(), None);
    }

    #[test]
    fn test_indices_follow_order() {
        let indices: Vec<usize> = Step::ALL.iter().map(Step::index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn test_first_and_last() {
        assert!(Step::BasicInfo.is_first());
        assert!(!Step::Address.is_first());
        assert!(Step::Documents.is_last());
    }

    #[test]
    fn test_every_field_belongs_to_one_step() {
        let total: usize = Step::ALL.iter().map(|s| s.fields().len()).sum();
        assert_eq!(total, 9);
        assert!(Step::Address.fields().contains(&FieldId::Country));
    }
}
