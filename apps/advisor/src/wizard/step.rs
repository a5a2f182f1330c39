use std::fmt;

/// Wizard step. Navigation moves one step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Upload,
    Review,
    Predict,
}

impl Step {
    /// 1-based position shown to the user.
    pub fn number(self) -> u8 {
        match self {
            Step::Upload => 1,
            Step::Review => 2,
            Step::Predict => 3,
        }
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Step::Upload => Some(Step::Review),
            Step::Review => Some(Step::Predict),
            Step::Predict => None,
        }
    }

    pub fn previous(self) -> Option<Step> {
        match self {
            Step::Upload => None,
            Step::Review => Some(Step::Upload),
            Step::Predict => Some(Step::Review),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Upload => "Upload resume",
            Step::Review => "Review skills",
            Step::Predict => "Career prediction",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: {}", self.number(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_chain() {
        assert_eq!(Step::Upload.next(), Some(Step::Review));
        assert_eq!(Step::Review.next(), Some(Step::Predict));
        assert_eq!(Step::Predict.next(), None);
    }

    #[test]
    fn test_backward_chain() {
        assert_eq!(Step::Predict.previous(), Some(Step::Review));
        assert_eq!(Step::Review.previous(), Some(Step::Upload));
        assert_eq!(Step::Upload.previous(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Step::Review.to_string(), "Step 2: Review skills");
    }
}
