//! Beer entity and its value types.
//!
//! A beer only gains an identity once the store persists it, so the model is
//! split in two: [`NewBeer`] carries the name of a beer that has not been
//! saved yet, and [`Beer`] is the persisted record with its store-assigned
//! [`BeerId`].

use std::fmt;

/// Validation errors returned by [`BeerName::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeerValidationError {
    EmptyName,
}

impl fmt::Display for BeerValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "beer name must not be empty"),
        }
    }
}

impl std::error::Error for BeerValidationError {}

/// Store-assigned beer identifier.
///
/// Identifiers are generated by the store on insertion and never change.
///
/// # Examples
/// ```
/// use beers_backend::domain::BeerId;
///
/// let id = BeerId::new(7);
/// assert_eq!(id.get(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BeerId(i64);

impl BeerId {
    /// Wrap a raw identifier produced by a store adapter.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Return the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<BeerId> for i64 {
    fn from(value: BeerId) -> Self {
        value.0
    }
}

/// Name of a beer.
///
/// ## Invariants
/// - Must not be empty once trimmed of whitespace.
/// - Stored verbatim; comparisons are exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BeerName(String);

impl BeerName {
    /// Validate and construct a [`BeerName`].
    ///
    /// # Errors
    /// Returns [`BeerValidationError::EmptyName`] when the name is blank.
    ///
    /// # Examples
    /// ```
    /// use beers_backend::domain::BeerName;
    ///
    /// let name = BeerName::new("Very Hazy").expect("valid name");
    /// assert_eq!(name.as_ref(), "Very Hazy");
    /// assert!(BeerName::new("  ").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, BeerValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BeerValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for BeerName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BeerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for BeerName {
    type Error = BeerValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BeerName> for String {
    fn from(value: BeerName) -> Self {
        value.0
    }
}

/// A beer that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBeer {
    name: BeerName,
}

impl NewBeer {
    #[must_use]
    pub const fn new(name: BeerName) -> Self {
        Self { name }
    }

    /// Name to persist.
    #[must_use]
    pub const fn name(&self) -> &BeerName {
        &self.name
    }

    /// Attach a store-assigned identifier, producing the persisted record.
    #[must_use]
    pub fn into_persisted(self, id: BeerId) -> Beer {
        Beer::new(id, self.name)
    }
}

/// A persisted beer.
///
/// # Examples
/// ```
/// use beers_backend::domain::{Beer, BeerId, BeerName};
///
/// let beer = Beer::new(BeerId::new(1), BeerName::new("PBR").expect("valid name"));
/// assert_eq!(beer.id().get(), 1);
/// assert_eq!(beer.name().as_ref(), "PBR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beer {
    id: BeerId,
    name: BeerName,
}

impl Beer {
    #[must_use]
    pub const fn new(id: BeerId, name: BeerName) -> Self {
        Self { id, name }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> BeerId {
        self.id
    }

    /// Beer name.
    #[must_use]
    pub const fn name(&self) -> &BeerName {
        &self.name
    }
}
