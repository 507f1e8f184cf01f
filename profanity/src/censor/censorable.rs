//! Types that hold user-submitted text.
//!
//! Strings are the leaves: they are handed to the [`TextMapper`]. Containers
//! forward to their elements. Map keys are never censored, since rewriting a
//! key could merge two entries.

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    hash::{BuildHasher, Hash},
};

use super::TextMapper;

/// A value whose text can be censored.
///
/// Derive it with `#[derive(Censor)]` and mark text fields with `#[censor]`.
///
/// ```ignore
/// use profanity::{Censor, ProfanityFilter, StaticWordLists};
///
/// #[derive(Censor)]
/// struct Question {
///     #[censor]
///     body: String,
///     votes: u32,
/// }
///
/// let filter = ProfanityFilter::new(StaticWordLists::new().with_locale("en", ["darn"]));
/// let question = filter.censor(Question { body: "darn slides".into(), votes: 3 });
/// assert_eq!(question.body, "d*** slides");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Censorable`",
    label = "this type cannot be walked for text",
    note = "use `#[derive(Censor)]` on the type definition",
    note = "or remove `#[censor]` from fields that hold no user text"
)]
pub trait Censorable: Sized {
    /// Returns `self` with every reachable text censored by `mapper`.
    #[must_use]
    fn censor_with<M: TextMapper>(self, mapper: &M) -> Self;

    /// Returns `true` if any reachable text would be censored by `mapper`.
    fn contains_match<M: TextMapper>(&self, mapper: &M) -> bool;
}

impl Censorable for String {
    fn censor_with<M: TextMapper>(self, mapper: &M) -> Self {
        mapper.map_text(self)
    }

    fn contains_match<M: TextMapper>(&self, mapper: &M) -> bool {
        mapper.matches_text(self)
    }
}

// Masking decides the result, so a borrowed value only stays borrowed when the
// mapper leaves its text unchanged.
impl Censorable for Cow<'_, str> {
    fn censor_with<M: TextMapper>(self, mapper: &M) -> Self {
        let censored = mapper.map_text(self.to_string());
        if censored == *self {
            self
        } else {
            Cow::Owned(censored)
        }
    }

    fn contains_match<M: TextMapper>(&self, mapper: &M) -> bool {
        mapper.matches_text(self)
    }
}

impl<T: Censorable> Censorable for Option<T> {
    fn censor_with<M: TextMapper>(self, mapper: &M) -> Self {
        self.map(|value| value.censor_with(mapper))
    }

    fn contains_match<M: TextMapper>(&self, mapper: &M) -> bool {
        self.as_ref().is_some_and(|value| value.contains_match(mapper))
    }
}

impl<T: Censorable> Censorable for Box<T> {
    fn censor_with<M: TextMapper>(self, mapper: &M) -> Self {
        Box::new((*self).censor_with(mapper))
    }

    fn contains_match<M: TextMapper>(&self, mapper: &M) -> bool {
        (**self).contains_match(mapper)
    }
}

impl<T: Censorable> Censorable for Vec<T> {
    fn censor_with<M: TextMapper>(self, mapper: &M) -> Self {
        self.into_iter()
            .map(|value| value.censor_with(mapper))
            .collect()
    }

    fn contains_match<M: TextMapper>(&self, mapper: &M) -> bool {
        self.iter().any(|value| value.contains_match(mapper))
    }
}

impl<T: Censorable> Censorable for VecDeque<T> {
    fn censor_with<M: TextMapper>(self, mapper: &M) -> Self {
        self.into_iter()
            .map(|value| value.censor_with(mapper))
            .collect()
    }

    fn contains_match<M: TextMapper>(&self, mapper: &M) -> bool {
        self.iter().any(|value| value.contains_match(mapper))
    }
}

impl<K, V, S> Censorable for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: Censorable,
    S: BuildHasher + Clone,
{
    fn censor_with<M: TextMapper>(self, mapper: &M) -> Self {
        let mut result = HashMap::with_hasher(self.hasher().clone());
        result.extend(self.into_iter().map(|(k, v)| (k, v.censor_with(mapper))));
        result
    }

    fn contains_match<M: TextMapper>(&self, mapper: &M) -> bool {
        self.values().any(|value| value.contains_match(mapper))
    }
}

impl<K: Ord, V: Censorable> Censorable for BTreeMap<K, V> {
    fn censor_with<M: TextMapper>(self, mapper: &M) -> Self {
        self.into_iter()
            .map(|(k, v)| (k, v.censor_with(mapper)))
            .collect()
    }

    fn contains_match<M: TextMapper>(&self, mapper: &M) -> bool {
        self.values().any(|value| value.contains_match(mapper))
    }
}

// Sets are rebuilt: two distinct entries may censor to the same value.
impl<T, S> Censorable for HashSet<T, S>
where
    T: Censorable + Hash + Eq,
    S: BuildHasher + Clone,
{
    fn censor_with<M: TextMapper>(self, mapper: &M) -> Self {
        let mut result = HashSet::with_hasher(self.hasher().clone());
        result.extend(self.into_iter().map(|value| value.censor_with(mapper)));
        result
    }

    fn contains_match<M: TextMapper>(&self, mapper: &M) -> bool {
        self.iter().any(|value| value.contains_match(mapper))
    }
}

impl<T: Censorable + Ord> Censorable for BTreeSet<T> {
    fn censor_with<M: TextMapper>(self, mapper: &M) -> Self {
        self.into_iter()
            .map(|value| value.censor_with(mapper))
            .collect()
    }

    fn contains_match<M: TextMapper>(&self, mapper: &M) -> bool {
        self.iter().any(|value| value.contains_match(mapper))
    }
}
