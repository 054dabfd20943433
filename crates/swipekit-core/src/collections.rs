#[cfg(feature = "std-hash")]
pub mod map {
    pub use std::collections::hash_map::Entry;
    pub use std::collections::{HashMap, HashSet};
}

#[cfg(not(feature = "std-hash"))]
pub mod map {
    pub use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
    pub use std::collections::hash_map::Entry;
}

/// Creates an empty map with the crate-selected hasher.
pub fn new_map<K, V>() -> map::HashMap<K, V> {
    map::HashMap::default()
}

/// Creates an empty set with the crate-selected hasher.
pub fn new_set<T>() -> map::HashSet<T> {
    map::HashSet::default()
}
