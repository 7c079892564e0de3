use std::fmt::{self, Debug, Formatter};
use std::iter;
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

use super::{AllocPolicy, MAX_LIMIT, Policy, SizeType, effective_limit};
use crate::collections::error::AllocationLimitExceeded;

/// A policy that delegates to boxed slices, keeping every vacant slot default-constructed.
///
/// Because each allocation is a whole `Box<[T]>`, memory is always released by [`Box`] itself,
/// even while unwinding. The price is the `T: Default` bound and a default value being built for
/// every spare slot.
///
/// # Examples
/// ```
/// # use policy_collections::collections::alloc::DefaultPolicy;
/// # use policy_collections::collections::contiguous::Array;
/// let mut arr: Array<String, DefaultPolicy<u16, 100>> = Array::new();
/// arr.push(String::from("a"));
/// assert_eq!(arr.len(), 1);
/// assert_eq!(arr.cap(), 8);
/// ```
pub struct DefaultPolicy<S = usize, const MAX: usize = MAX_LIMIT>(PhantomData<fn() -> S>);

impl<S: SizeType, const MAX: usize> Policy for DefaultPolicy<S, MAX> {
    type Size = S;

    const LIMIT: usize = effective_limit::<S>(MAX);
}

impl<S, const MAX: usize> DefaultPolicy<S, MAX> {
    /// Builds a boxed slice of `count` values produced by `f`, returning its leaked pointer.
    fn leak_with<T>(count: usize, f: impl FnMut() -> T) -> NonNull<T> {
        let boxed: Box<[T]> = iter::repeat_with(f).take(count).collect();
        NonNull::from(Box::leak(boxed)).cast()
    }

    /// Rebuilds the boxed slice leaked by [`leak_with`](DefaultPolicy::leak_with).
    ///
    /// # Safety
    /// `ptr` must have been leaked from a boxed slice of exactly `cap` elements.
    unsafe fn reclaim<T>(ptr: NonNull<T>, cap: usize) -> Box<[T]> {
        // SAFETY: The caller guarantees that ptr and cap describe a leaked Box<[T]>.
        unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(ptr.as_ptr(), cap)) }
    }
}

// SAFETY: Every array allocation is a leaked Box<[T]> of exactly the requested length, with each
// element initialized. Single allocations are leaked Box<T>s.
unsafe impl<T: Default, S: SizeType, const MAX: usize> AllocPolicy<T> for DefaultPolicy<S, MAX> {
    fn allocate(value: T) -> Result<NonNull<T>, AllocationLimitExceeded> {
        Self::check_limit(1)?;

        Ok(NonNull::from(Box::leak(Box::new(value))))
    }

    unsafe fn deallocate(ptr: NonNull<T>) -> T {
        // SAFETY: The caller guarantees that ptr came from allocate, which leaks a Box<T>.
        *unsafe { Box::from_raw(ptr.as_ptr()) }
    }

    fn array_allocate(count: usize) -> Result<NonNull<T>, AllocationLimitExceeded> {
        Self::check_limit(count)?;

        Ok(Self::leak_with(count, T::default))
    }

    fn array_allocate_filled(count: usize, fill: &T) -> Result<NonNull<T>, AllocationLimitExceeded>
    where
        T: Clone,
    {
        Self::check_limit(count)?;

        Ok(Self::leak_with(count, || fill.clone()))
    }

    unsafe fn array_reallocate(
        ptr: NonNull<T>,
        old_cap: usize,
        new_cap: usize,
        old_count: usize,
    ) -> Result<NonNull<T>, AllocationLimitExceeded> {
        Self::check_limit(new_cap)?;
        debug_assert!(old_count <= new_cap, "Reallocation would lose live elements!");

        if old_cap == new_cap {
            return Ok(ptr);
        }

        // Build the new slice first, so that a panicking T::default leaves the old one intact.
        let new_ptr = Self::leak_with(new_cap, T::default);

        // SAFETY: The caller guarantees that ptr was allocated by this policy with old_cap slots.
        let mut old = unsafe { Self::reclaim(ptr, old_cap) };
        // SAFETY: new_ptr was just leaked with new_cap slots.
        let mut new = unsafe { Self::reclaim(new_ptr, new_cap) };

        // Swapping can't panic, and leaves the default values behind to be dropped with old.
        for (old_slot, new_slot) in old[..old_count].iter_mut().zip(new.iter_mut()) {
            mem::swap(old_slot, new_slot);
        }

        Ok(NonNull::from(Box::leak(new)).cast())
    }

    unsafe fn array_deallocate(ptr: NonNull<T>, cap: usize) {
        // SAFETY: The caller guarantees that ptr was allocated by this policy with cap slots.
        drop(unsafe { Self::reclaim(ptr, cap) });
    }

    unsafe fn construct(slot: NonNull<T>, value: T) {
        // SAFETY: Vacant slots hold a valid default value, which is dropped by the assignment.
        unsafe { *slot.as_ptr() = value; }
    }

    unsafe fn destroy(slot: NonNull<T>) {
        // SAFETY: The slot is live and valid for writes, the old value is dropped by the
        // assignment and replaced with the vacant default.
        unsafe { *slot.as_ptr() = T::default(); }
    }

    unsafe fn take(slot: NonNull<T>) -> T {
        // SAFETY: The slot is live, valid for reads and writes and not aliased during this call.
        mem::take(unsafe { &mut *slot.as_ptr() })
    }
}

impl<S, const MAX: usize> Debug for DefaultPolicy<S, MAX> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "DefaultPolicy<{}, {MAX}>", std::any::type_name::<S>())
    }
}

impl<S, const MAX: usize> Default for DefaultPolicy<S, MAX> {
    fn default() -> Self {
        DefaultPolicy(PhantomData)
    }
}

impl<S, const MAX: usize> Clone for DefaultPolicy<S, MAX> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, const MAX: usize> Copy for DefaultPolicy<S, MAX> {}
