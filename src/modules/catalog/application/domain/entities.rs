// src/modules/catalog/application/domain/entities.rs
use serde::de::DeserializeOwned;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::shared::domain::Language;

/// A shape stored as one bundled JSON document per language, or once in
/// `commons/` when it is not localized.
pub trait Document: DeserializeOwned + Clone + Send + Sync + 'static {
    /// Resource name used in not-found errors and logs (e.g. `Education`).
    const RESOURCE: &'static str;
    /// File stem under the language directory (e.g. `education`).
    const DOCUMENT: &'static str;
    const LOCALIZED: bool = true;

    fn location(language: Language) -> String {
        if Self::LOCALIZED {
            format!("{}/{}.json", language.dir(), Self::DOCUMENT)
        } else {
            format!("commons/{}.json", Self::DOCUMENT)
        }
    }
}

/// An item of a listed resource kind, identified by a unique key.
pub trait CatalogItem: Document {
    type Key: Clone + Eq + Hash + Display + Debug + Send + Sync + 'static;

    fn key(&self) -> &Self::Key;

    /// Sort policy applied after loading. Defaults to document order.
    fn order(_items: &mut [Self]) {}
}
