use super::DomainError;

/// Zero-based page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: u64,
    page_size: u64,
}

impl PageRequest {
    pub fn new(page_number: u64, page_size: u64) -> Result<Self, DomainError> {
        if page_size == 0 {
            return Err(DomainError::InvalidPageSize(page_size));
        }

        Ok(Self {
            page_number,
            page_size,
        })
    }

    /// Paging applies only when both numbers are present.
    pub fn from_parts(
        page_number: Option<u64>,
        page_size: Option<u64>,
    ) -> Result<Option<Self>, DomainError> {
        match (page_number, page_size) {
            (Some(number), Some(size)) => Self::new(number, size).map(Some),
            _ => Ok(None),
        }
    }

    pub fn page_number(self) -> u64 {
        self.page_number
    }

    pub fn page_size(self) -> u64 {
        self.page_size
    }

    pub fn offset(self) -> u64 {
        self.page_number.saturating_mul(self.page_size)
    }

    /// Applies the page to an already ordered sequence.
    pub fn slice<T>(self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        items
            .into_iter()
            .skip(usize::try_from(self.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(self.page_size).unwrap_or(usize::MAX))
            .collect()
    }
}
