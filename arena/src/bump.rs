use std::alloc::{alloc_zeroed, dealloc, handle_alloc_error, Layout};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::mem::{align_of, size_of};
use std::ptr::{self, NonNull};
use std::slice;
use std::str;

/// Alignment of every pointer returned by [`BumpArena::allocate`]. This is
/// `alignof(max_align_t)` on every platform Vulkan SC runs on.
pub const MAX_ALIGNMENT: usize = 16;

/// Size of the blocks the arena appends when it runs out of room.
pub const DEFAULT_BLOCK_SIZE: usize = 1024 * 1024;

/// One zero-initialised backing allocation.
struct Block {
    ptr:    NonNull<u8>,
    layout: Layout,
}

impl Block {
    fn new(size: usize) -> Block {
        let layout = match Layout::from_size_align(size, MAX_ALIGNMENT) {
            Ok(layout) => layout,
            Err(_) => panic!("arena block of {} bytes is too large", size),
        };
        // SAFETY: callers never request an empty block (see `with_block_size`
        // and `allocate`), so `layout` has a non-zero size.
        let raw = unsafe { alloc_zeroed(layout) };
        let ptr = match NonNull::new(raw) {
            Some(ptr) => ptr,
            None => handle_alloc_error(layout),
        };
        Block { ptr, layout }
    }

    fn size(&self) -> usize {
        self.layout.size()
    }
}

impl Drop for Block {
    fn drop(&mut self) {
        // SAFETY: `ptr` came from `alloc_zeroed` with exactly this layout.
        unsafe { dealloc(self.ptr.as_ptr(), self.layout) }
    }
}

/// A growable slab allocator with no individual deallocation.
///
/// Memory is carved out of large zeroed blocks by bumping a cursor. When the
/// current block is exhausted a new one is appended; blocks are only released
/// by [`clear`](BumpArena::clear) (which keeps the first block for reuse) or
/// when the arena is dropped.
///
/// The typed helpers hand out references whose lifetime is tied to the
/// arena, and `clear` needs `&mut self`, so nothing allocated here can be
/// observed after the memory is recycled. The arena is neither `Send` nor
/// `Sync`: every thread parses into its own arena.
///
/// ```
/// use vksc_json_arena::BumpArena;
///
/// let arena = BumpArena::with_block_size(64);
/// let numbers = arena.alloc_slice_copy(&[1u32, 2, 3]);
/// let name = arena.alloc_str("main");
/// assert_eq!(numbers, &[1, 2, 3]);
/// assert_eq!(name, "main");
/// ```
pub struct BumpArena {
    blocks:     RefCell<Vec<Block>>,
    cursor:     Cell<usize>,
    allocated:  Cell<usize>,
    block_size: usize,
}

impl BumpArena {
    /// Creates an arena with [`DEFAULT_BLOCK_SIZE`] blocks.
    pub fn new() -> BumpArena {
        BumpArena::with_block_size(DEFAULT_BLOCK_SIZE)
    }

    /// Creates an arena whose blocks hold at least `block_size` bytes. The
    /// first block is allocated eagerly.
    pub fn with_block_size(block_size: usize) -> BumpArena {
        let block_size = round_up(block_size.max(MAX_ALIGNMENT));
        BumpArena {
            blocks:     RefCell::new(vec![Block::new(block_size)]),
            cursor:     Cell::new(0),
            allocated:  Cell::new(0),
            block_size,
        }
    }

    /// The minimum size of a block appended by this arena.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of backing blocks currently held.
    pub fn block_count(&self) -> usize {
        self.blocks.borrow().len()
    }

    /// Bytes handed out since creation or the last `clear`, including the
    /// padding that keeps every allocation aligned to [`MAX_ALIGNMENT`].
    pub fn allocated_bytes(&self) -> usize {
        self.allocated.get()
    }

    /// Total size of all backing blocks.
    pub fn capacity(&self) -> usize {
        self.blocks.borrow().iter().map(Block::size).sum()
    }

    /// Returns a pointer to `size` bytes aligned to [`MAX_ALIGNMENT`].
    ///
    /// The memory stays valid until the arena is cleared or dropped. If the
    /// current block cannot hold the request a block of
    /// `max(size, block_size)` bytes is appended. Running out of memory
    /// aborts through [`handle_alloc_error`].
    pub fn allocate(&self, size: usize) -> NonNull<u8> {
        let size = round_up(size);
        let mut blocks = self.blocks.borrow_mut();
        let mut cursor = self.cursor.get();

        let fits = blocks.last().map_or(false, |block| block.size() - cursor >= size);
        if !fits {
            blocks.push(Block::new(size.max(self.block_size)));
            cursor = 0;
        }

        let block = &blocks[blocks.len() - 1];
        // SAFETY: `cursor + size <= block.size()`, so the offset pointer is
        // inside the block or one past its end (only for `size == 0`).
        let ptr = unsafe { NonNull::new_unchecked(block.ptr.as_ptr().add(cursor)) };

        self.cursor.set(cursor + size);
        self.allocated.set(self.allocated.get() + size);
        ptr
    }

    /// Returns a pointer to `count * size` bytes, see [`allocate`](Self::allocate).
    pub fn allocate_array(&self, count: usize, size: usize) -> NonNull<u8> {
        match count.checked_mul(size) {
            Some(total) => self.allocate(total),
            None => panic!("arena allocation of {} x {} bytes overflows", count, size),
        }
    }

    /// Moves `value` into the arena.
    pub fn alloc<T: Copy>(&self, value: T) -> &mut T {
        check_alignment::<T>();
        let ptr = self.allocate(size_of::<T>()).cast::<T>();
        // SAFETY: the region is fresh, large enough, and suitably aligned.
        unsafe {
            ptr.as_ptr().write(value);
            &mut *ptr.as_ptr()
        }
    }

    /// Copies `src` into the arena.
    pub fn alloc_slice_copy<T: Copy>(&self, src: &[T]) -> &mut [T] {
        check_alignment::<T>();
        let ptr = self.allocate_array(src.len(), size_of::<T>()).cast::<T>();
        // SAFETY: the destination is fresh, holds `src.len()` elements, and
        // cannot overlap `src`.
        unsafe {
            ptr::copy_nonoverlapping(src.as_ptr(), ptr.as_ptr(), src.len());
            slice::from_raw_parts_mut(ptr.as_ptr(), src.len())
        }
    }

    /// Builds a slice of `len` elements by calling `f` with each index in
    /// order. `f` may allocate from this arena itself. When `f` fails the
    /// reserved space is abandoned and the error is returned.
    pub fn alloc_slice_try_fill_with<T, E, F>(&self, len: usize, mut f: F) -> Result<&mut [T], E>
    where
        T: Copy,
        F: FnMut(usize) -> Result<T, E>,
    {
        check_alignment::<T>();
        let ptr = self.allocate_array(len, size_of::<T>()).cast::<T>();
        for index in 0..len {
            let value = f(index)?;
            // SAFETY: `index < len` and the region was reserved above.
            unsafe { ptr.as_ptr().add(index).write(value) };
        }
        // SAFETY: every element in `0..len` has been written.
        Ok(unsafe { slice::from_raw_parts_mut(ptr.as_ptr(), len) })
    }

    /// Copies `src` into the arena.
    pub fn alloc_str(&self, src: &str) -> &str {
        let bytes = self.alloc_slice_copy(src.as_bytes());
        // SAFETY: the bytes were copied verbatim from a `str`.
        unsafe { str::from_utf8_unchecked(bytes) }
    }

    /// Releases every block except the first and rewinds the cursor.
    pub fn clear(&mut self) {
        self.blocks.get_mut().truncate(1);
        self.cursor.set(0);
        self.allocated.set(0);
    }
}

impl Default for BumpArena {
    fn default() -> BumpArena {
        BumpArena::new()
    }
}

impl fmt::Debug for BumpArena {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BumpArena")
            .field("block_size", &self.block_size)
            .field("block_count", &self.block_count())
            .field("allocated_bytes", &self.allocated_bytes())
            .finish()
    }
}

fn round_up(size: usize) -> usize {
    match size.checked_add(MAX_ALIGNMENT - 1) {
        Some(padded) => padded & !(MAX_ALIGNMENT - 1),
        None => panic!("arena allocation of {} bytes overflows", size),
    }
}

fn check_alignment<T>() {
    assert!(
        align_of::<T>() <= MAX_ALIGNMENT,
        "type alignment {} exceeds the arena alignment of {}",
        align_of::<T>(),
        MAX_ALIGNMENT
    );
}

#[test]
fn allocate_is_aligned() {
    let arena = BumpArena::with_block_size(256);
    for size in [1, 3, 16, 17, 40] {
        let ptr = arena.allocate(size);
        assert_eq!(ptr.as_ptr() as usize % MAX_ALIGNMENT, 0);
    }
    assert_eq!(arena.allocated_bytes(), 16 + 16 + 16 + 32 + 48);
}

#[test]
fn allocate_returns_zeroed_memory() {
    let arena = BumpArena::with_block_size(64);
    let ptr = arena.allocate(32);
    let bytes = unsafe { slice::from_raw_parts(ptr.as_ptr(), 32) };
    assert!(bytes.iter().all(|&b| b == 0));
}

#[test]
fn allocate_grows_when_block_is_full() {
    let arena = BumpArena::with_block_size(64);
    assert_eq!(arena.block_count(), 1);
    arena.allocate(48);
    assert_eq!(arena.block_count(), 1);
    arena.allocate(32);
    assert_eq!(arena.block_count(), 2);
    assert_eq!(arena.capacity(), 128);
}

#[test]
fn allocate_larger_than_block() {
    let arena = BumpArena::with_block_size(64);
    arena.allocate(1000);
    assert_eq!(arena.block_count(), 2);
    assert_eq!(arena.capacity(), 64 + 1008);
}

#[test]
fn allocate_array_multiplies() {
    let arena = BumpArena::with_block_size(64);
    arena.allocate_array(4, 8);
    assert_eq!(arena.allocated_bytes(), 32);
}

#[test]
#[should_panic]
fn allocate_array_overflow_is_fatal() {
    let arena = BumpArena::with_block_size(64);
    arena.allocate_array(usize::MAX, 2);
}

#[test]
fn earlier_allocations_survive_growth() {
    let arena = BumpArena::with_block_size(32);
    let first = arena.alloc(0xdead_beefu32);
    let others: Vec<&mut u64> = (0..64).map(|i| arena.alloc(i as u64)).collect();
    assert!(arena.block_count() > 1);
    assert_eq!(*first, 0xdead_beef);
    for (i, value) in others.iter().enumerate() {
        assert_eq!(**value, i as u64);
    }
}

#[test]
fn alloc_slice_and_str() {
    let arena = BumpArena::new();
    let words = arena.alloc_slice_copy(&[0x0723_0203u32, 0x0001_0000]);
    words[1] = 7;
    assert_eq!(words, &[0x0723_0203, 7]);
    assert_eq!(arena.alloc_str("VK_KHR_surface"), "VK_KHR_surface");
    assert_eq!(arena.alloc_str(""), "");
    let empty: &mut [u8] = arena.alloc_slice_copy(&[]);
    assert!(empty.is_empty());
}

#[test]
fn alloc_slice_try_fill_with_nested_allocations() {
    let arena = BumpArena::with_block_size(32);
    let names = arena
        .alloc_slice_try_fill_with(3, |i| Ok::<_, ()>(arena.alloc_str(&format!("stage{}", i))))
        .unwrap();
    assert_eq!(names, &["stage0", "stage1", "stage2"]);

    let failed = arena.alloc_slice_try_fill_with(4, |i| if i < 2 { Ok(i as u32) } else { Err(i) });
    assert_eq!(failed, Err(2));
}

#[test]
fn clear_keeps_first_block() {
    let mut arena = BumpArena::with_block_size(64);
    arena.allocate(40);
    arena.allocate(40);
    arena.allocate(200);
    assert_eq!(arena.block_count(), 3);

    arena.clear();
    assert_eq!(arena.block_count(), 1);
    assert_eq!(arena.allocated_bytes(), 0);
    assert_eq!(arena.capacity(), 64);

    let value = arena.alloc(5u16);
    assert_eq!(*value, 5);
    assert_eq!(arena.block_count(), 1);
}
