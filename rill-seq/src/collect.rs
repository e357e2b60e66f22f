// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Collect operator - materialize a sequence into a container.
//!
//! The `size_hint` parameter is a capacity optimization only; the actual
//! element count may differ in either direction without consequence.
//!
//! # Examples
//!
//! ```rust
//! use rill_seq::prelude::*;
//!
//! let collected = from_vec(vec![1, 2, 3]).filter(|n| *n > 1).collect_vec(2);
//! assert_eq!(collected, vec![2, 3]);
//! ```

use rill_core::{Cursor, Sequence};

/// Extension trait providing `collect_vec`.
pub trait CollectExt: Sequence {
    /// Materializes the sequence into a `Vec`, in sequence order.
    fn collect_vec(&self, size_hint: usize) -> Vec<Self::Item>;
}

impl<S: Sequence> CollectExt for S {
    fn collect_vec(&self, size_hint: usize) -> Vec<Self::Item> {
        let mut out = Vec::with_capacity(size_hint);
        let mut cursor = self.cursor();
        while let Some(element) = cursor.advance() {
            out.push(element);
        }
        out
    }
}
