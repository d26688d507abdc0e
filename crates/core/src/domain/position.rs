use super::{PositionId, PositionTitle};

/// A named job role. Its skill requirements live in their own repository and
/// are removed together with the position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub id: PositionId,
    pub title: PositionTitle,
}

impl Position {
    pub fn new(title: PositionTitle) -> Self {
        Self {
            id: PositionId::new(),
            title,
        }
    }

    pub fn with_title(self, title: PositionTitle) -> Self {
        Self { title, ..self }
    }
}
