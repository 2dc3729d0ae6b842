//! Typed indices into the catalogue arenas and the stop graph.
//!
//! Stops and buses live in `Vec`s owned by the catalogue and are referenced
//! by position; graph vertices and edges are numbered the same way.  The
//! inner integer is `pub`, but callers should prefer `.index()` when
//! indexing and `from_index` when turning a position back into an id.

use std::fmt;

/// Generate a `u32`-backed index type.  `$label` prefixes the `Display`
/// form, e.g. `stop#3`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $label:literal $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Marks "no id", e.g. the predecessor edge of a search source.
            pub const INVALID: $name = $name(u32::MAX);

            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Id of arena position `i`.
            ///
            /// # Panics
            ///
            /// If `i` does not fit in `u32`.  Arenas check their length when
            /// they grow, so positions read back from them always fit.
            #[inline]
            pub fn from_index(i: usize) -> Self {
                match Self::try_from(i) {
                    Ok(id) => id,
                    Err(_) => panic!("{} {i} exceeds the u32 id range", stringify!($name)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", $label, self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                u32::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Position of a stop in the catalogue's stop arena.
    "stop" pub struct StopId;
}

typed_id! {
    /// Position of a bus in the catalogue's bus arena.
    "bus" pub struct BusId;
}

typed_id! {
    /// Index of a vertex in a `WeightedGraph`.
    "vertex" pub struct VertexId;
}

typed_id! {
    /// Index of a directed edge, assigned in insertion order.
    "edge" pub struct EdgeId;
}

impl StopId {
    /// The "waiting at the stop" vertex: `2 * index`.
    #[inline]
    pub fn wait_vertex(self) -> VertexId {
        VertexId(self.0 * 2)
    }

    /// The "boarded a bus at the stop" vertex: `2 * index + 1`.
    #[inline]
    pub fn board_vertex(self) -> VertexId {
        VertexId(self.0 * 2 + 1)
    }
}
