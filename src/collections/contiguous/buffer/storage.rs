use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::collections::alloc::{AllocPolicy, RawPolicy};
use crate::collections::error::AllocationLimitExceeded;

/// A run of `cap` slots allocated by `P`, without any knowledge of which slots are live.
///
/// This is the part of every contiguous collection that owns memory: dropping a Storage releases
/// the allocation, but never touches the elements. It is up to the owner to leave every slot
/// vacant before that happens.
pub(crate) struct Storage<T, P: AllocPolicy<T> = RawPolicy> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<(T, fn() -> P)>,
}

impl<T, P: AllocPolicy<T>> Storage<T, P> {
    /// Creates a Storage with no slots. Nothing is allocated.
    pub(crate) const fn new() -> Storage<T, P> {
        Storage {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates `cap` vacant slots.
    pub(crate) fn try_with_cap(cap: usize) -> Result<Storage<T, P>, AllocationLimitExceeded> {
        if cap == 0 {
            return Ok(Storage::new());
        }

        Ok(Storage {
            ptr: P::array_allocate(cap)?,
            cap,
            _phantom: PhantomData,
        })
    }

    /// Allocates `cap` slots, each live with a clone of `fill`.
    pub(crate) fn try_filled(cap: usize, fill: &T) -> Result<Storage<T, P>, AllocationLimitExceeded>
    where
        T: Clone,
    {
        if cap == 0 {
            return Ok(Storage::new());
        }

        Ok(Storage {
            ptr: P::array_allocate_filled(cap, fill)?,
            cap,
            _phantom: PhantomData,
        })
    }

    /// Returns a pointer to the slot at `index`.
    ///
    /// # Safety
    /// `index` must be less than or equal to the capacity. (Equal only to produce an end pointer.)
    pub(crate) const unsafe fn slot(&self, index: usize) -> NonNull<T> {
        debug_assert!(index <= self.cap);
        // SAFETY: The caller guarantees that index is within the allocation, which can't exceed
        // isize::MAX bytes.
        unsafe { self.ptr.add(index) }
    }

    /// Moves the allocation to one with `new_cap` slots, keeping the first `live` values.
    ///
    /// # Safety
    /// Exactly the first `live` slots must be live, and `live <= new_cap`.
    pub(crate) unsafe fn try_realloc(
        &mut self,
        new_cap: usize,
        live: usize,
    ) -> Result<(), AllocationLimitExceeded> {
        // SAFETY: Forwarded to the caller. P allocated ptr with cap slots.
        self.ptr = unsafe { P::array_reallocate(self.ptr, self.cap, new_cap, live)? };

        log::trace!(
            "reallocated {} from {} to {} slots",
            std::any::type_name::<T>(),
            self.cap,
            new_cap,
        );

        self.cap = new_cap;
        Ok(())
    }
}

impl<T, P: AllocPolicy<T>> Drop for Storage<T, P> {
    fn drop(&mut self) {
        if self.cap != 0 {
            // SAFETY: The owner leaves all slots vacant before dropping the Storage, and ptr was
            // allocated by P with cap slots.
            unsafe { P::array_deallocate(self.ptr, self.cap); }
        }
    }
}

// SAFETY: Storage uniquely owns its allocation, so it is safe to send when T: Send.
unsafe impl<T: Send, P: AllocPolicy<T>> Send for Storage<T, P> {}
// SAFETY: Storage provides no interior mutability, shared access is read-only.
unsafe impl<T: Sync, P: AllocPolicy<T>> Sync for Storage<T, P> {}
