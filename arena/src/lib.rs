//! Bump allocation for transient parse results.
//!
//! Every string, array, and pointed-to structure produced while parsing a
//! Vulkan SC JSON document lives in a [`BumpArena`]. Allocation is a cursor
//! bump; memory is released all at once with [`BumpArena::clear`] or when
//! the arena is dropped.
//!
//! ```
//! use vksc_json_arena::BumpArena;
//!
//! let mut arena = BumpArena::new();
//! let priorities = arena.alloc_slice_copy(&[1.0f32, 0.5]);
//! assert_eq!(priorities.len(), 2);
//! arena.clear();
//! assert_eq!(arena.allocated_bytes(), 0);
//! ```

pub mod bump;
pub mod local;

pub use bump::*;
pub use local::with_thread_arena;
