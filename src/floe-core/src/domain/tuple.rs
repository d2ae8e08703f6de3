//! Multi-column constraint maps.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::Domain;

/// Conjunction of per-key domains describing which rows a source must
/// produce.
///
/// Two sentinels bracket the lattice: the accept-all constraint carries an
/// empty map (no key is restricted), and the accept-none constraint carries
/// no map at all (no row can satisfy it). `from_domains` normalizes towards
/// these sentinels, so unconstrained keys never appear in the map and any
/// key with an empty domain collapses the whole constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TupleDomain<K: Ord> {
    domains: Option<BTreeMap<K, Domain>>,
}

impl<K: Ord + Clone> TupleDomain<K> {
    /// Constraint satisfied by every row.
    pub fn all() -> Self {
        Self {
            domains: Some(BTreeMap::new()),
        }
    }

    /// Constraint satisfied by no row.
    pub fn none() -> Self {
        Self { domains: None }
    }

    /// Build a constraint from per-key domains.
    ///
    /// `All` entries are dropped as unconstrained; any `None` entry makes
    /// the whole constraint accept-none.
    pub fn from_domains(domains: impl IntoIterator<Item = (K, Domain)>) -> Self {
        let mut map = BTreeMap::new();
        for (key, domain) in domains {
            if domain.is_none() {
                return Self::none();
            }
            if domain.is_all() {
                continue;
            }
            match map.entry(key) {
                std::collections::btree_map::Entry::Vacant(entry) => {
                    entry.insert(domain);
                }
                std::collections::btree_map::Entry::Occupied(mut entry) => {
                    let meet = entry.get().intersect(&domain);
                    if meet.is_none() {
                        return Self::none();
                    }
                    entry.insert(meet);
                }
            }
        }
        Self { domains: Some(map) }
    }

    pub fn is_all(&self) -> bool {
        self.domains.as_ref().is_some_and(|map| map.is_empty())
    }

    pub fn is_none(&self) -> bool {
        self.domains.is_none()
    }

    /// Per-key domains, absent for the accept-none constraint.
    pub fn column_domains(&self) -> Option<&BTreeMap<K, Domain>> {
        self.domains.as_ref()
    }

    /// Keys restricted by this constraint.
    ///
    /// Empty for both sentinels; accept-none restricts everything but
    /// names nothing.
    pub fn constrained_keys(&self) -> Vec<&K> {
        match &self.domains {
            Some(map) => map.keys().collect(),
            None => Vec::new(),
        }
    }

    /// Conjoin two constraints key by key.
    pub fn intersect(&self, other: &Self) -> Self {
        let (Some(left), Some(right)) = (&self.domains, &other.domains) else {
            return Self::none();
        };
        Self::from_domains(
            left.iter()
                .chain(right.iter())
                .map(|(k, d)| (k.clone(), d.clone())),
        )
    }

    /// Re-key the constraint, dropping entries the mapping does not cover.
    ///
    /// Dropping an entry weakens the constraint, never strengthens it.
    /// When two source keys map to the same target the domains are
    /// intersected, since both restrictions apply to the target.
    pub fn transform_keys<K2, F>(&self, mapper: F) -> TupleDomain<K2>
    where
        K2: Ord + Clone,
        F: Fn(&K) -> Option<K2>,
    {
        let Some(map) = &self.domains else {
            return TupleDomain::none();
        };
        TupleDomain::from_domains(
            map.iter()
                .filter_map(|(key, domain)| mapper(key).map(|k2| (k2, domain.clone()))),
        )
    }
}
