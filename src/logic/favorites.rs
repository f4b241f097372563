//! Session favorites: a set-like list of currency pairs kept in insertion order.

use crate::state::types::CurrencyPair;

/// Failure when a favorite cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FavoriteError {
    /// No favorite matches the given pair, label, or index.
    #[error("favorite not found: {0}")]
    NotFound(String),
}

/// Ordered favorites without duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Favorites {
    /// Pairs in insertion order.
    pairs: Vec<CurrencyPair>,
}

impl Favorites {
    /// What: Add a pair unless it is already present.
    ///
    /// Inputs:
    /// - `pair`: Pair to add.
    ///
    /// Output:
    /// - `true` when the pair was appended, `false` when it already existed.
    pub fn add(&mut self, pair: CurrencyPair) -> bool {
        if self.contains(&pair) {
            return false;
        }
        tracing::debug!(pair = %pair, "favorite added");
        self.pairs.push(pair);
        true
    }

    /// What: Remove a pair by structural equality.
    ///
    /// Inputs:
    /// - `pair`: Pair to remove.
    ///
    /// Output:
    /// - `Ok(pair)` with the removed entry, or `FavoriteError::NotFound` leaving the list unchanged.
    ///
    /// # Errors
    /// - Returns `NotFound` when the pair is not a favorite.
    pub fn remove(&mut self, pair: &CurrencyPair) -> Result<CurrencyPair, FavoriteError> {
        let idx = self
            .pairs
            .iter()
            .position(|p| p == pair)
            .ok_or_else(|| FavoriteError::NotFound(pair.label()))?;
        Ok(self.pairs.remove(idx))
    }

    /// What: Remove the favorite at a list index passed from the UI.
    ///
    /// # Errors
    /// - Returns `NotFound` when the index is out of range (e.g. stale selection).
    pub fn remove_at(&mut self, index: usize) -> Result<CurrencyPair, FavoriteError> {
        if index >= self.pairs.len() {
            return Err(FavoriteError::NotFound(format!("#{index}")));
        }
        Ok(self.pairs.remove(index))
    }

    /// Favorite at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CurrencyPair> {
        self.pairs.get(index)
    }

    /// What: Resolve a display label (`"{from} → {to}"`) back to its pair.
    ///
    /// Inputs:
    /// - `label`: Label as shown in the favorites list.
    ///
    /// Output:
    /// - The matching pair, or `NotFound` for empty or stale labels.
    ///
    /// # Errors
    /// - Returns `NotFound` when no favorite carries this label.
    pub fn select_by_label(&self, label: &str) -> Result<&CurrencyPair, FavoriteError> {
        let wanted = label.trim();
        self.pairs
            .iter()
            .find(|p| !wanted.is_empty() && p.label() == wanted)
            .ok_or_else(|| FavoriteError::NotFound(wanted.to_string()))
    }

    /// Whether `pair` is a favorite.
    #[must_use]
    pub fn contains(&self, pair: &CurrencyPair) -> bool {
        self.pairs.contains(pair)
    }

    /// Number of favorites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there are no favorites.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate favorites in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CurrencyPair> {
        self.pairs.iter()
    }

    /// Display labels in insertion order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.pairs.iter().map(CurrencyPair::label).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd_eur() -> CurrencyPair {
        CurrencyPair::new("USD", "EUR")
    }

    #[test]
    /// What: Adding the same pair twice keeps a single occurrence.
    ///
    /// Inputs:
    /// - `USD → EUR` added twice, built from separate strings.
    ///
    /// Output:
    /// - Second add reports `false`; list length is 1.
    fn favorites_add_is_idempotent() {
        let mut favs = Favorites::default();
        assert!(favs.add(usd_eur()));
        assert!(!favs.add(CurrencyPair::new(String::from("USD"), String::from("EUR"))));
        assert_eq!(favs.len(), 1);
    }

    #[test]
    /// What: Removing an absent pair signals not found without changing the list.
    ///
    /// Inputs:
    /// - Favorites containing `USD → EUR`; removal of `GBP → JPY`.
    ///
    /// Output:
    /// - `NotFound` error; list unchanged.
    fn favorites_remove_missing_reports_not_found() {
        let mut favs = Favorites::default();
        favs.add(usd_eur());
        let before = favs.clone();
        let err = favs
            .remove(&CurrencyPair::new("GBP", "JPY"))
            .expect_err("pair is absent");
        assert_eq!(err, FavoriteError::NotFound("GBP → JPY".to_string()));
        assert_eq!(favs, before);
    }

    #[test]
    fn favorites_remove_present_pair() {
        let mut favs = Favorites::default();
        favs.add(usd_eur());
        favs.add(CurrencyPair::new("EUR", "GBP"));
        assert_eq!(favs.remove(&usd_eur()), Ok(usd_eur()));
        assert_eq!(favs.labels(), vec!["EUR → GBP".to_string()]);
    }

    #[test]
    /// What: Label resolution handles matches, stale labels, and empty selection.
    ///
    /// Inputs:
    /// - Labels `"USD → EUR"`, `"CHF → CNY"`, and `""`.
    ///
    /// Output:
    /// - First resolves, the others yield `NotFound`.
    fn favorites_select_by_label() {
        let mut favs = Favorites::default();
        favs.add(usd_eur());
        assert_eq!(favs.select_by_label("USD → EUR"), Ok(&usd_eur()));
        assert!(favs.select_by_label("CHF → CNY").is_err());
        assert!(favs.select_by_label("").is_err());
    }

    #[test]
    fn favorites_remove_at_rejects_stale_index() {
        let mut favs = Favorites::default();
        favs.add(usd_eur());
        assert!(favs.remove_at(3).is_err());
        assert_eq!(favs.remove_at(0), Ok(usd_eur()));
        assert!(favs.is_empty());
        assert!(favs.get(0).is_none());
    }
}
