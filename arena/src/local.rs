use crate::bump::BumpArena;
use std::cell::{RefCell, RefMut};

thread_local! {
    static THREAD_ARENA: RefCell<BumpArena> = RefCell::new(BumpArena::new());
}

/// Runs `f` against this thread's arena and clears the arena afterwards.
///
/// Nothing borrowed from the arena can escape `f`, so results must be copied
/// out (or serialized) before returning. A nested call from inside `f` gets
/// a temporary arena of its own.
pub fn with_thread_arena<R>(f: impl FnOnce(&BumpArena) -> R) -> R {
    THREAD_ARENA.with(|cell| match cell.try_borrow_mut() {
        Ok(arena) => {
            let guard = ClearOnDrop(arena);
            f(&guard.0)
        }
        Err(_) => f(&BumpArena::new()),
    })
}

/// Clears the borrowed arena on the way out, unwinding included.
struct ClearOnDrop<'c>(RefMut<'c, BumpArena>);

impl Drop for ClearOnDrop<'_> {
    fn drop(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_arena_is_cleared_between_uses() {
        let used = with_thread_arena(|arena| {
            arena.alloc_str("VK_STRUCTURE_TYPE_APPLICATION_INFO");
            arena.allocated_bytes()
        });
        assert!(used > 0);
        assert_eq!(with_thread_arena(|arena| arena.allocated_bytes()), 0);
    }

    #[test]
    fn nested_use_gets_its_own_arena() {
        let lengths = with_thread_arena(|outer| {
            let name = outer.alloc_str("outer");
            let inner = with_thread_arena(|inner| inner.alloc_str("inner!").len());
            (name.len(), inner)
        });
        assert_eq!(lengths, (5, 6));
    }

    #[test]
    fn each_thread_has_its_own_arena() {
        with_thread_arena(|arena| {
            arena.allocate(128);
            let other = std::thread::spawn(|| with_thread_arena(|arena| arena.allocated_bytes()))
                .join()
                .unwrap();
            assert_eq!(other, 0);
            assert_eq!(arena.allocated_bytes(), 128);
        });
    }

    #[test]
    fn thread_arena_is_cleared_after_a_panic() {
        let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            with_thread_arena(|arena| {
                arena.allocate(256);
                panic!("conversion failed");
            })
        }));
        assert!(caught.is_err());
        assert_eq!(with_thread_arena(|arena| arena.allocated_bytes()), 0);
    }
}
