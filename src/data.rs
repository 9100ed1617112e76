//! The property model: typed vertex/edge property bags with a declared
//! default, the edge cost/weight-function abstraction built on top of
//! them, and the numeric trait family weighted algorithms are generic
//! over.

use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Sub};

use hashbrown::HashMap;

use crate::visit::{EdgeRef, IntoEdges};

/// A property key: a phantom type identifying one property slot, carrying
/// its value type `V` and its default.
pub trait PropertyKey {
    type Value: Clone;
    fn default_value() -> Self::Value;
}

/// A typed key/value store attached to a set of ids (vertices or edges).
/// Lookup is total: an id with no explicit value reports
/// `K::default_value()`.
#[derive(Clone, Debug)]
pub struct PropertyMap<Id, K: PropertyKey> {
    values: HashMap<Id, K::Value>,
    _key: PhantomData<K>,
}

impl<Id, K> Default for PropertyMap<Id, K>
where
    Id: core::hash::Hash + Eq,
    K: PropertyKey,
{
    fn default() -> Self {
        PropertyMap {
            values: HashMap::new(),
            _key: PhantomData,
        }
    }
}

impl<Id, K> PropertyMap<Id, K>
where
    Id: core::hash::Hash + Eq + Clone,
    K: PropertyKey,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Total lookup: returns the stored value, or `K::default_value()`.
    pub fn get(&self, id: &Id) -> K::Value {
        self.values
            .get(id)
            .cloned()
            .unwrap_or_else(K::default_value)
    }

    pub fn set(&mut self, id: Id, value: K::Value) {
        self.values.insert(id, value);
    }

    pub fn unset(&mut self, id: &Id) -> Option<K::Value> {
        self.values.remove(id)
    }

    pub fn is_set(&self, id: &Id) -> bool {
        self.values.contains_key(id)
    }
}

/// A weight/cost function mapping an edge reference to a numeric weight —
/// storage-agnostic so weighted algorithms never need to know whether the
/// weight came from an edge property, a closure, or a constant.
pub enum EdgeCost<G, K>
where
    G: IntoEdges,
{
    /// Read a typed property off the edge.
    Property(fn(&G::EdgeWeight) -> K),
    /// Call a supplied function of the edge reference.
    Closure(std::rc::Rc<dyn Fn(G::EdgeRef) -> K>),
    /// Always return the same constant.
    Uniform(K),
}

impl<G, K> EdgeCost<G, K>
where
    G: IntoEdges,
    K: Clone,
{
    pub fn property(read: fn(&G::EdgeWeight) -> K) -> Self {
        EdgeCost::Property(read)
    }

    pub fn closure<F>(f: F) -> Self
    where
        F: Fn(G::EdgeRef) -> K + 'static,
    {
        EdgeCost::Closure(std::rc::Rc::new(f))
    }

    pub fn uniform(c: K) -> Self {
        EdgeCost::Uniform(c)
    }

    pub fn weight(&self, edge: G::EdgeRef) -> K {
        match self {
            EdgeCost::Property(read) => read(edge.weight()),
            EdgeCost::Closure(f) => f(edge),
            EdgeCost::Uniform(c) => c.clone(),
        }
    }
}

/// A measure: any totally-ordered type supporting `+` and a default
/// (zero). The baseline bound every weighted algorithm needs.
pub trait Measure: PartialOrd + Add<Self, Output = Self> + Default + Copy {}

impl<M> Measure for M where M: PartialOrd + Add<M, Output = M> + Default + Copy {}

/// A measure with a representable infinity sentinel, for the
/// Bellman-Ford-family algorithms (Bellman-Ford, SPFA, Floyd-Warshall)
/// that need "unreached" to compare larger than every finite distance.
pub trait FloatMeasure: Measure {
    fn zero() -> Self;
    fn infinite() -> Self;
}

impl FloatMeasure for f32 {
    fn zero() -> Self {
        0.0
    }
    fn infinite() -> Self {
        f32::INFINITY
    }
}

impl FloatMeasure for f64 {
    fn zero() -> Self {
        0.0
    }
    fn infinite() -> Self {
        f64::INFINITY
    }
}

/// A measure with a subtractable, bounded representation — used by
/// Johnson's potential reweighting and by flow capacities, where
/// `infinity` is approximated by the type's maximum representable value
/// rather than a float sentinel.
pub trait BoundedMeasure: Measure + Sub<Self, Output = Self> {
    fn min() -> Self;
    fn max() -> Self;
}

macro_rules! impl_bounded_measure_integer {
    ($($t:ident),*) => {
        $(
            impl BoundedMeasure for $t {
                fn min() -> Self { $t::MIN }
                fn max() -> Self { $t::MAX }
            }
        )*
    };
}

impl_bounded_measure_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl BoundedMeasure for f32 {
    fn min() -> Self {
        f32::MIN
    }
    fn max() -> Self {
        f32::MAX
    }
}

impl BoundedMeasure for f64 {
    fn min() -> Self {
        f64::MIN
    }
    fn max() -> Self {
        f64::MAX
    }
}

/// A measure supporting the full arithmetic used by centrality and
/// community-detection scores (PageRank, modularity, closeness): `+`,
/// `-`, `*`, `/`, plus conversions from small integers/floats.
pub trait UnitMeasure: Measure + Sub<Self, Output = Self> + Mul<Self, Output = Self> + Div<Self, Output = Self> {
    fn zero() -> Self;
    fn one() -> Self;
    fn from_usize(n: usize) -> Self;
    fn from_f64(v: f64) -> Self;
}

macro_rules! impl_unit_measure_float {
    ($($t:ident),*) => {
        $(
            impl UnitMeasure for $t {
                fn zero() -> Self { 0.0 }
                fn one() -> Self { 1.0 }
                fn from_usize(n: usize) -> Self { n as $t }
                fn from_f64(v: f64) -> Self { v as $t }
            }
        )*
    };
}

impl_unit_measure_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    struct Label;
    impl PropertyKey for Label {
        type Value = i32;
        fn default_value() -> i32 {
            0
        }
    }

    #[test]
    fn property_map_is_total() {
        let mut map: PropertyMap<u32, Label> = PropertyMap::new();
        assert_eq!(map.get(&7), 0);
        map.set(7, 42);
        assert_eq!(map.get(&7), 42);
        assert!(map.is_set(&7));
        assert!(!map.is_set(&8));
    }
}
