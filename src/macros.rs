//! Internal indexing helpers shared by the big-integer module.

/// Index a buffer without bounds checking in release builds.
macro_rules! index_unchecked {
    ($x:ident[$i:expr]) => {
        *$x.get_unchecked($i)
    };
}

/// Index a buffer mutably without bounds checking in release builds.
macro_rules! index_unchecked_mut {
    ($x:ident[$i:expr]) => {
        *$x.get_unchecked_mut($i)
    };
}
