//! Name-keyed collections of bodies.
//!
//! A [`Catalog`] owns a set of [`Body`] instances (behind [`Arc`]) and keeps
//! two invariants: names are unique, and every parent reference points at a
//! body that is itself resident in the catalog. Together with the
//! construction rules of [`Body`] this makes every catalog a closed forest:
//! acyclic, fully resolvable, iterated in insertion order.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::body::Body;
use crate::error::{Error, Result};
use crate::records::BodyRecord;

/// An insertion-ordered, name-keyed collection of bodies.
///
/// # Examples
///
/// ```rust
/// use orrery_core::{Body, Catalog};
/// use qtty::{Kilograms, Meters};
///
/// let mut catalog = Catalog::new();
/// let sun = catalog.insert(Body::new("Sun", Kilograms::new(1.98847e30), Meters::new(6.957e8)))?;
/// catalog.insert(
///     Body::builder("Earth", Kilograms::new(5.9722e24), Meters::new(6.371e6))
///         .sma(Meters::new(1.496e11))
///         .parent(sun)
///         .build(),
/// )?;
///
/// assert_eq!(catalog.len(), 2);
/// assert!(catalog.get("Earth").is_some());
/// # Ok::<(), orrery_core::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    bodies: Vec<Arc<Body>>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a body and returns the shared handle to it.
    ///
    /// Fails with [`Error::DuplicateBody`] when a body of the same name is
    /// already present, and with [`Error::UnknownParent`] when the body's
    /// parent is not the catalog-resident instance of that name.
    pub fn insert(&mut self, body: Body) -> Result<Arc<Body>> {
        if self.index.contains_key(body.name()) {
            return Err(Error::DuplicateBody {
                name: body.name().to_owned(),
            });
        }
        if let Some(parent) = body.parent() {
            let resident = self
                .get(parent.name())
                .is_some_and(|resident| Arc::ptr_eq(resident, parent));
            if !resident {
                return Err(Error::UnknownParent {
                    child: body.name().to_owned(),
                    parent: parent.name().to_owned(),
                });
            }
        }
        Ok(self.insert_unchecked(body))
    }

    /// Inserts without the uniqueness and parent-residency checks.
    ///
    /// Callers guarantee both; used where they hold by construction.
    pub(crate) fn insert_unchecked(&mut self, body: Body) -> Arc<Body> {
        let body = Arc::new(body);
        self.index.insert(body.name().to_owned(), self.bodies.len());
        self.bodies.push(Arc::clone(&body));
        log::debug!("catalog: inserted body '{}'", body.name());
        body
    }

    /// Looks a body up by name.
    pub fn get(&self, name: &str) -> Option<&Arc<Body>> {
        self.index.get(name).map(|&i| &self.bodies[i])
    }

    /// Number of bodies in the catalog.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the catalog holds no bodies.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Iterates over all bodies in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Body>> {
        self.bodies.iter()
    }

    /// Iterates over the bodies that orbit nothing.
    pub fn roots(&self) -> impl Iterator<Item = &Arc<Body>> {
        self.bodies.iter().filter(|body| body.is_root())
    }

    /// The direct satellites of the named body, in insertion order.
    ///
    /// Returns an empty list for unknown names as well as for childless
    /// bodies.
    pub fn satellites_of(&self, name: &str) -> Vec<&Arc<Body>> {
        let Some(parent) = self.get(name) else {
            return Vec::new();
        };
        self.bodies
            .iter()
            .filter(|body| {
                body.parent()
                    .is_some_and(|candidate| Arc::ptr_eq(candidate, parent))
            })
            .collect()
    }

    /// Assembles a catalog from flat records, resolving parent names.
    ///
    /// Records may appear in any order; resolution is iterative, inserting
    /// whatever has become resolvable until nothing is left. Every record is
    /// validated first. Failure modes: [`Error::DuplicateBody`],
    /// [`Error::InvalidRecord`], [`Error::UnknownParent`] when a parent name
    /// appears nowhere in the set, and [`Error::ParentCycle`], naming the
    /// bodies on the cycle, when parent references loop.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orrery_core::{BodyRecord, Catalog};
    ///
    /// // Child listed before its parent: order does not matter.
    /// let records = vec![
    ///     BodyRecord {
    ///         name: "Earth".into(),
    ///         mass: 5.9722e24,
    ///         radius: 6.371e6,
    ///         sma: Some(1.496e11),
    ///         eccentricity: Some(0.0167),
    ///         soi: Some(9.24e8),
    ///         parent: Some("Sun".into()),
    ///     },
    ///     BodyRecord {
    ///         name: "Sun".into(),
    ///         mass: 1.98847e30,
    ///         radius: 6.957e8,
    ///         sma: None,
    ///         eccentricity: None,
    ///         soi: None,
    ///         parent: None,
    ///     },
    /// ];
    ///
    /// let catalog = Catalog::from_records(records)?;
    /// assert_eq!(catalog.roots().count(), 1);
    /// # Ok::<(), orrery_core::Error>(())
    /// ```
    pub fn from_records(records: Vec<BodyRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.name.clone()) {
                return Err(Error::DuplicateBody {
                    name: record.name.clone(),
                });
            }
            record.validate()?;
        }

        let mut catalog = Catalog::new();
        let mut pending = records;
        while !pending.is_empty() {
            let before = pending.len();
            let mut deferred = Vec::new();
            for record in pending {
                match record.parent.as_deref().map(|name| catalog.get(name).cloned()) {
                    None => {
                        catalog.insert_unchecked(record.into_body(None));
                    }
                    Some(Some(parent)) => {
                        catalog.insert_unchecked(record.into_body(Some(parent)));
                    }
                    Some(None) => deferred.push(record),
                }
            }
            if deferred.len() == before {
                return Err(Self::classify_unresolved(deferred));
            }
            pending = deferred;
        }
        Ok(catalog)
    }

    /// Projects the catalog back to flat records, parents by name, insertion
    /// order preserved.
    pub fn to_records(&self) -> Vec<BodyRecord> {
        self.bodies
            .iter()
            .map(|body| BodyRecord::from_body(body))
            .collect()
    }

    // No record in `unresolved` made progress: either a parent name exists
    // nowhere, or parent references loop. Only the bodies on a loop are
    // reported; records that merely descend from one stay out of the list.
    fn classify_unresolved(unresolved: Vec<BodyRecord>) -> Error {
        let names: HashSet<&str> = unresolved.iter().map(|r| r.name.as_str()).collect();
        for record in &unresolved {
            if let Some(parent) = record.parent.as_deref() {
                if !names.contains(parent) {
                    return Error::UnknownParent {
                        child: record.name.clone(),
                        parent: parent.to_owned(),
                    };
                }
            }
        }

        // Every unresolved record now has its parent inside the set, so each
        // parent chain eventually enters a cycle. A record is on one exactly
        // when the chain leads back to itself.
        let parent_of: HashMap<&str, &str> = unresolved
            .iter()
            .filter_map(|r| r.parent.as_deref().map(|parent| (r.name.as_str(), parent)))
            .collect();
        let cyclic = unresolved
            .iter()
            .filter(|record| Self::chain_returns_to(&record.name, &parent_of))
            .map(|record| record.name.clone())
            .collect();
        Error::ParentCycle { names: cyclic }
    }

    fn chain_returns_to(name: &str, parent_of: &HashMap<&str, &str>) -> bool {
        let mut current = name;
        for _ in 0..parent_of.len() {
            match parent_of.get(current) {
                Some(&parent) if parent == name => return true,
                Some(&parent) => current = parent,
                None => return false,
            }
        }
        false
    }
}
