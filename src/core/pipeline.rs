//! Filter/sort pipeline shared by every listing.
//!
//! A listing is a pure function of (raw records, search text, facet filters,
//! sort order). Both the search and the facet filters are evaluated against
//! the full raw set and ANDed; the raw slice is never touched.

use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_timestamp;
use chrono::NaiveDateTime;
use clap::ValueEnum;
use std::cmp::Ordering;

/// Filter value meaning "no constraint on this dimension".
pub const ALL: &str = "All";

/// A record type that can go through the pipeline.
pub trait Listing: Clone {
    /// Text fields scanned by the free-text search.
    fn search_fields(&self) -> Vec<&str>;

    /// Names of the categorical dimensions this entity can be filtered on.
    fn facets() -> &'static [&'static str] {
        &[]
    }

    /// Value of the given facet, `None` when the entity has no such facet.
    fn facet_value(&self, _facet: &str) -> Option<&str> {
        None
    }

    /// Raw date-like field used for chronological ordering.
    fn sort_key(&self) -> Option<&str> {
        None
    }

    /// Order used when the caller asks for none. Dated entities list newest
    /// first.
    fn default_order() -> Option<SortOrder> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetFilter {
    pub facet: String,
    pub value: String,
}

impl FacetFilter {
    pub fn new(facet: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            facet: facet.into(),
            value: value.into(),
        }
    }

    /// Parse a `facet=value` expression.
    pub fn parse(expr: &str) -> AppResult<Self> {
        let (facet, value) = expr
            .split_once('=')
            .ok_or_else(|| AppError::InvalidFilter(expr.to_string()))?;
        let facet = facet.trim();
        if facet.is_empty() {
            return Err(AppError::InvalidFilter(expr.to_string()));
        }
        Ok(Self::new(facet, value.trim()))
    }

    pub fn is_all(&self) -> bool {
        self.value == ALL
    }

    fn accepts<T: Listing>(&self, item: &T) -> bool {
        self.is_all() || item.facet_value(&self.facet).unwrap_or("") == self.value
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub search: String,
    pub filters: Vec<FacetFilter>,
    pub order: Option<SortOrder>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn filter(mut self, facet: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push(FacetFilter::new(facet, value));
        self
    }

    pub fn sorted(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Fill in the entity's default order unless one was asked for.
    pub fn or_default_order<T: Listing>(mut self) -> Self {
        if self.order.is_none() {
            self.order = T::default_order();
        }
        self
    }

    /// Reject filters on facets the entity does not expose.
    /// An `All` filter constrains nothing and is accepted for any facet.
    pub fn validate<T: Listing>(&self) -> AppResult<()> {
        for f in self.filters.iter().filter(|f| !f.is_all()) {
            if !T::facets().contains(&f.facet.as_str()) {
                let available = if T::facets().is_empty() {
                    "none".to_string()
                } else {
                    T::facets().join(", ")
                };
                return Err(AppError::UnknownFacet {
                    facet: f.facet.clone(),
                    available,
                });
            }
        }
        Ok(())
    }
}

/// Case-insensitive substring match over the entity's search fields.
pub fn matches_search<T: Listing>(item: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    item.search_fields()
        .iter()
        .any(|f| f.to_lowercase().contains(&needle))
}

/// Run the full pipeline and return the displayed records.
pub fn apply<T: Listing>(raw: &[T], query: &Query) -> Vec<T> {
    let mut out: Vec<T> = raw
        .iter()
        .filter(|item| matches_search(*item, &query.search))
        .filter(|item| query.filters.iter().all(|f| f.accepts(*item)))
        .cloned()
        .collect();

    if let Some(order) = query.order {
        sort_chronologically(&mut out, order);
    }

    out
}

/// Unparseable timestamps always go last, whatever the direction.
pub fn compare_timestamps(
    a: Option<NaiveDateTime>,
    b: Option<NaiveDateTime>,
    order: SortOrder,
) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => match order {
            SortOrder::Desc => y.cmp(&x),
            SortOrder::Asc => x.cmp(&y),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort on the entity's date-like field.
pub fn sort_chronologically<T: Listing>(items: &mut Vec<T>, order: SortOrder) {
    let mut keyed: Vec<(Option<NaiveDateTime>, T)> = items
        .drain(..)
        .map(|item| (item.sort_key().and_then(parse_timestamp), item))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| compare_timestamps(*a, *b, order));

    items.extend(keyed.into_iter().map(|(_, item)| item));
}

/// Options for a facet selector: `All` followed by the distinct non-empty
/// values in first-seen order.
pub fn facet_options<T: Listing>(raw: &[T], facet: &str) -> Vec<String> {
    let mut out = vec![ALL.to_string()];
    for item in raw {
        if let Some(v) = item.facet_value(facet)
            && !v.is_empty()
            && !out.iter().skip(1).any(|seen| seen == v)
        {
            out.push(v.to_string());
        }
    }
    out
}
