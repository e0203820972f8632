//! Movie field validation and list ordering.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a movie title in characters.
pub const MAX_TITLE_LENGTH: usize = 150;

/// Maximum length of a movie description in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// Lowest accepted rating.
pub const MIN_RATING: f64 = 0.0;

/// Highest accepted rating.
pub const MAX_RATING: f64 = 10.0;

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

/// Validate a title: not blank and at most [`MAX_TITLE_LENGTH`] characters.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title is required".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a description: at most [`MAX_DESCRIPTION_LENGTH`] characters.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "Description must be at most {MAX_DESCRIPTION_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a rating is within `[0, 10]`. NaN is rejected.
pub fn validate_rating(rating: f64) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// Column a movie listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovieSortField {
    Title,
    #[default]
    Rating,
    ReleaseDate,
}

impl MovieSortField {
    /// Parse the `sortBy` query value. Unknown or missing values fall back to
    /// [`MovieSortField::Rating`].
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("title") => MovieSortField::Title,
            Some("release_date") => MovieSortField::ReleaseDate,
            _ => MovieSortField::Rating,
        }
    }

    /// SQL column name. Only these fixed identifiers ever reach a query string.
    pub fn column(self) -> &'static str {
        match self {
            MovieSortField::Title => "title",
            MovieSortField::Rating => "rating",
            MovieSortField::ReleaseDate => "release_date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn keyword(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Resolved ordering for a movie listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieOrdering {
    pub field: MovieSortField,
    pub direction: SortDirection,
}

impl MovieOrdering {
    /// Resolve `sortBy` / `sortOrder` query values.
    ///
    /// Descending when `sortOrder=desc`, or when sorting by rating and
    /// `sortOrder` is anything but `asc`. Ascending otherwise. With no
    /// parameters this yields rating descending.
    pub fn from_params(sort_by: Option<&str>, sort_order: Option<&str>) -> Self {
        let field = MovieSortField::parse(sort_by);
        let descending = sort_order == Some("desc")
            || (field == MovieSortField::Rating && sort_order != Some("asc"));
        let direction = if descending {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Self { field, direction }
    }

    /// `ORDER BY` clause body, e.g. `"rating DESC, id ASC"`.
    pub fn to_sql(self) -> String {
        format!(
            "{} {}, id ASC",
            self.field.column(),
            self.direction.keyword()
        )
    }
}

impl Default for MovieOrdering {
    fn default() -> Self {
        Self::from_params(None, None)
    }
}

/// Escape `%`, `_` and `\` so `term` matches literally inside an `ILIKE`
/// pattern, and wrap it for substring matching.
pub fn title_search_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
