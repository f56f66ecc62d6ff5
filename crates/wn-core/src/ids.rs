//! Strongly typed identifier wrappers.
//!
//! Tasks and workers carry backend-assigned numeric ids; these newtypes stop
//! the two id spaces from being mixed up in function signatures and map keys.
//! Unlike a dense array index there is no `INVALID` sentinel; an id either
//! came from a record or it does not exist.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw backend id.
            #[inline(always)]
            pub fn raw(self) -> $inner {
                self.0
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> Self {
                $name(raw)
            }
        }

        impl From<$name> for $inner {
            #[inline(always)]
            fn from(id: $name) -> $inner {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Backend id of a reported issue / work-order task.
    pub struct TaskId(u64);
}

typed_id! {
    /// Backend id of a municipal field worker.
    pub struct WorkerId(u64);
}
