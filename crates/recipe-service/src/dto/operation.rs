//! Recipe endpoint output shapes
//!
//! Each endpoint fixes its `OperationKind` when it is routed; the kind alone
//! decides which representation a recipe is rendered in.

use recipe_core::{Page, RecipeDetail, RecipeSummary};

use crate::services::{ServiceError, ServiceResult};

use super::responses::{RecipeDetailResponse, RecipeSummaryResponse, RecipeUpdateResponse};

/// Recipe endpoint being served
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Read a single recipe
    List,
    Create,
    Update,
    Delete,
    /// The viewer's favorites listing
    Favorites,
    /// Title search over every recipe
    Search,
}

/// Representation produced for an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeShape {
    Detail,
    Update,
    Summary,
    Empty,
}

impl OperationKind {
    pub const fn shape(self) -> RecipeShape {
        match self {
            Self::List | Self::Create => RecipeShape::Detail,
            Self::Update => RecipeShape::Update,
            Self::Favorites | Self::Search => RecipeShape::Summary,
            Self::Delete => RecipeShape::Empty,
        }
    }
}

/// Data loaded by a recipe operation, before rendering
#[derive(Debug)]
pub enum RecipePayload {
    One(RecipeDetail),
    Many(Page<RecipeSummary>),
    Nothing,
}

/// Rendered result of a recipe operation
#[derive(Debug)]
pub enum RecipeOutput {
    Detail(RecipeDetailResponse),
    Update(RecipeUpdateResponse),
    Summaries(Page<RecipeSummaryResponse>),
    Empty,
}

impl RecipePayload {
    fn name(&self) -> &'static str {
        match self {
            Self::One(_) => "one",
            Self::Many(_) => "many",
            Self::Nothing => "nothing",
        }
    }
}

impl RecipeOutput {
    /// Render `payload` in the shape `kind` calls for
    ///
    /// # Errors
    /// `ServiceError::Internal` when the payload does not carry what the
    /// shape needs.
    pub fn render(kind: OperationKind, payload: RecipePayload) -> ServiceResult<Self> {
        match (kind.shape(), payload) {
            (RecipeShape::Detail, RecipePayload::One(detail)) => Ok(Self::Detail(detail.into())),
            (RecipeShape::Update, RecipePayload::One(detail)) => {
                Ok(Self::Update(RecipeUpdateResponse::from(&detail.recipe)))
            }
            (RecipeShape::Summary, RecipePayload::Many(page)) => {
                Ok(Self::Summaries(page.map(RecipeSummaryResponse::from)))
            }
            (RecipeShape::Empty, RecipePayload::Nothing) => Ok(Self::Empty),
            (shape, payload) => Err(ServiceError::internal(format!(
                "{kind:?} renders {shape:?} but was given a {} payload",
                payload.name()
            ))),
        }
    }
}
