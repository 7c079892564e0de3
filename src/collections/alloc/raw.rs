use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use super::{AllocPolicy, MAX_LIMIT, Policy, SizeType, effective_limit};
use crate::collections::error::{AllocationLimitExceeded, CapacityOverflow};
use crate::util::result::ResultExtension;

/// A policy that constructs and destroys elements in place over raw memory from the global
/// allocator. Vacant slots are uninitialized, and zero-sized types never allocate at all.
///
/// `S` is the size type of positions and `MAX` the element limit. The limit is clamped to fit in
/// `S` without colliding with its sentinel.
///
/// # Examples
/// ```
/// # use policy_collections::collections::alloc::{Policy, RawPolicy};
/// assert_eq!(<RawPolicy<u32, 50> as Policy>::LIMIT, 50);
/// assert_eq!(<RawPolicy<u8> as Policy>::LIMIT, 254);
/// ```
pub struct RawPolicy<S = usize, const MAX: usize = MAX_LIMIT>(PhantomData<fn() -> S>);

impl<S: SizeType, const MAX: usize> Policy for RawPolicy<S, MAX> {
    type Size = S;

    const LIMIT: usize = effective_limit::<S>(MAX);
}

impl<S, const MAX: usize> RawPolicy<S, MAX> {
    /// A helper function to create a [`Layout`] for use during allocation, containing `count`
    /// number of elements of type `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    fn make_layout<T>(count: usize) -> Layout {
        Layout::array::<T>(count).map_err(|_| CapacityOverflow).throw()
    }

    /// A helper function to allocate the provided [`Layout`]. Returns a dangling pointer for a
    /// zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    fn make_ptr<T>(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

// SAFETY: All pointers come from the global allocator with an array layout of the requested size,
// or are dangling for zero-sized layouts, which are never read from or deallocated.
unsafe impl<T, S: SizeType, const MAX: usize> AllocPolicy<T> for RawPolicy<S, MAX> {
    fn allocate(value: T) -> Result<NonNull<T>, AllocationLimitExceeded> {
        Self::check_limit(1)?;

        let ptr = Self::make_ptr::<T>(Layout::new::<T>());
        // SAFETY: ptr is valid for a write of one T.
        unsafe { ptr.write(value); }
        Ok(ptr)
    }

    unsafe fn deallocate(ptr: NonNull<T>) -> T {
        // SAFETY: The caller guarantees that ptr holds a live value from allocate.
        let value = unsafe { ptr.read() };

        let layout = Layout::new::<T>();
        if layout.size() != 0 {
            // SAFETY: ptr was allocated in the global allocator with the same layout.
            unsafe { alloc::dealloc(ptr.as_ptr().cast(), layout); }
        }
        value
    }

    fn array_allocate(count: usize) -> Result<NonNull<T>, AllocationLimitExceeded> {
        Self::check_limit(count)?;

        Ok(Self::make_ptr(Self::make_layout::<T>(count)))
    }

    fn array_allocate_filled(count: usize, fill: &T) -> Result<NonNull<T>, AllocationLimitExceeded>
    where
        T: Clone,
    {
        let ptr = <Self as AllocPolicy<T>>::array_allocate(count)?;

        for i in 0..count {
            // SAFETY: The allocation holds count slots, so all offsets are in bounds and vacant.
            unsafe { ptr.add(i).write(fill.clone()); }
        }
        Ok(ptr)
    }

    unsafe fn array_reallocate(
        ptr: NonNull<T>,
        old_cap: usize,
        new_cap: usize,
        old_count: usize,
    ) -> Result<NonNull<T>, AllocationLimitExceeded> {
        Self::check_limit(new_cap)?;
        debug_assert!(old_count <= new_cap, "Reallocation would lose live elements!");

        let new_ptr = match (old_cap, new_cap) {
            (_, _) if size_of::<T>() == 0 => {
                // Nothing is ever allocated for zero-sized types, the dangling pointer is already
                // valid for any number of them.
                ptr
            },
            (old, new) if old == new => ptr,
            (0, _) => Self::make_ptr(Self::make_layout::<T>(new_cap)),
            (_, 0) => {
                // SAFETY: The caller guarantees that ptr was allocated with old_cap slots, and
                // old_count <= new_cap = 0, so nothing needs to be moved.
                unsafe { <Self as AllocPolicy<T>>::array_deallocate(ptr, old_cap); }
                NonNull::dangling()
            },
            (_, _) => {
                let old_layout = Self::make_layout::<T>(old_cap);
                let new_layout = Self::make_layout::<T>(new_cap);

                // SAFETY: The same layout and allocator are used for the allocation, and the new
                // layout size is > 0 and <= isize::MAX. realloc moves the live values bitwise.
                let raw_ptr: *mut T = unsafe {
                    alloc::realloc(ptr.as_ptr().cast(), old_layout, new_layout.size()).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        Ok(new_ptr)
    }

    unsafe fn array_deallocate(ptr: NonNull<T>, cap: usize) {
        let layout = Self::make_layout::<T>(cap);

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe { alloc::dealloc(ptr.as_ptr().cast(), layout); }
        }
    }

    unsafe fn construct(slot: NonNull<T>, value: T) {
        // SAFETY: The slot is vacant, so it is uninitialized memory valid for writes.
        unsafe { slot.write(value); }
    }

    unsafe fn destroy(slot: NonNull<T>) {
        // SAFETY: The slot is live, properly aligned and ready to drop.
        unsafe { ptr::drop_in_place(slot.as_ptr()); }
    }

    unsafe fn take(slot: NonNull<T>) -> T {
        // SAFETY: The slot is live. Reading it makes a bitwise copy and the slot is treated as
        // uninitialized from here on, which is as close as we can get to moving off of the heap.
        unsafe { slot.read() }
    }
}

impl<S, const MAX: usize> Debug for RawPolicy<S, MAX> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "RawPolicy<{}, {MAX}>", std::any::type_name::<S>())
    }
}

impl<S, const MAX: usize> Default for RawPolicy<S, MAX> {
    fn default() -> Self {
        RawPolicy(PhantomData)
    }
}

impl<S, const MAX: usize> Clone for RawPolicy<S, MAX> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, const MAX: usize> Copy for RawPolicy<S, MAX> {}
