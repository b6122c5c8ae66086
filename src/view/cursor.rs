//! Cursor positions and how they follow projection edits.
//!
//! A position is a logical index into a projection, never a slot address:
//! edits to the projection rebase positions explicitly.

use super::policy::Edit;
use crate::error::{Result, ViewStoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Position {
    /// Denotes the element at this index.
    At(usize),
    /// One past the last element.
    End,
    /// The denoted element was deleted.
    Stale,
}

impl Position {
    pub(crate) const fn first(len: usize) -> Self {
        if len == 0 { Self::End } else { Self::At(0) }
    }

    pub(crate) fn next(self, len: usize) -> Result<Self> {
        match self {
            Self::At(index) if index + 1 < len => Ok(Self::At(index + 1)),
            Self::At(_) => Ok(Self::End),
            Self::End => Err(ViewStoreError::ExhaustedCursor),
            Self::Stale => Err(ViewStoreError::StaleCursor),
        }
    }

    /// The index this position denotes, or the error explaining why none.
    pub(crate) const fn index(self) -> Result<usize> {
        match self {
            Self::At(index) => Ok(index),
            Self::End => Err(ViewStoreError::ExhaustedCursor),
            Self::Stale => Err(ViewStoreError::StaleCursor),
        }
    }

    /// Follows `edit` so the position keeps denoting the same element.
    ///
    /// `projection` is the projection after the edit.
    pub(crate) fn rebase(self, edit: &Edit, projection: &[i32]) -> Self {
        let Self::At(index) = self else {
            return self;
        };
        match edit {
            Edit::Unchanged => self,
            Edit::Inserted(at) if index >= *at => Self::At(index + 1),
            Edit::Inserted(_) => self,
            Edit::Removed(at) if index == *at => Self::Stale,
            Edit::Removed(at) if index > *at => Self::At(index - 1),
            Edit::Removed(_) => self,
            Edit::Rebuilt(previous) => previous
                .get(index)
                .and_then(|denoted| projection.iter().position(|value| value == denoted))
                .map_or(Self::Stale, Self::At),
        }
    }
}
