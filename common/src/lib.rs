//! Intermediate representation and shared services for the function
//! parameter pruning passes

use {core::hash::BuildHasherDefault, twox_hash::XxHash64};

pub mod dialect;
pub mod intern;
pub mod ir;
pub mod names;

pub type Hasher = XxHash64;

/// HashMap with non-default hasher
pub type HashMap<K, V> = hashbrown::HashMap<K, V, BuildHasherDefault<Hasher>>;

/// HashSet with non-default hasher
pub type HashSet<T> = hashbrown::HashSet<T, BuildHasherDefault<Hasher>>;
