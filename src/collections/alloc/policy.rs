use std::ptr::NonNull;

use super::SizeType;
use crate::collections::error::AllocationLimitExceeded;

/// The largest limit that any policy supports. Collections can't hold more than [`isize::MAX`]
/// elements anyway, because no layout may exceed [`isize::MAX`] bytes.
pub const MAX_LIMIT: usize = isize::MAX as usize;

/// The limit and size type shared by every [`AllocPolicy<T>`] implementation of a policy.
pub trait Policy {
    /// The unsigned type used to store positions.
    type Size: SizeType;

    /// The maximum number of elements any single allocation may contain. Always less than
    /// [`Size::NPOS`](SizeType::NPOS) so that a valid position never equals the sentinel.
    const LIMIT: usize;

    /// Returns the sentinel position of this policy.
    fn npos() -> Self::Size {
        Self::Size::NPOS
    }

    /// Checks `count` against the limit of this policy.
    ///
    /// # Errors
    /// Returns [`AllocationLimitExceeded`] carrying [`LIMIT`](Policy::LIMIT) when
    /// `count > LIMIT`.
    fn check_limit(count: usize) -> Result<(), AllocationLimitExceeded> {
        if count > Self::LIMIT {
            Err(AllocationLimitExceeded {
                limit: Self::LIMIT,
            })
        } else {
            Ok(())
        }
    }
}

/// The position type of policy `P`, used by collections to store indices into allocations made
/// by the same policy.
pub type Position<P> = <P as Policy>::Size;

/// A strategy for acquiring and releasing memory for elements of type `T`, as well as
/// constructing and destroying those elements.
///
/// Every slot handed out by a policy is either *live*, holding a value owned by the collection, or
/// *vacant*. What a vacant slot contains is up to the policy: uninitialized memory for
/// [`RawPolicy`](super::RawPolicy), a default-constructed value for
/// [`DefaultPolicy`](super::DefaultPolicy). Collections only ever move slots between the two
/// states through [`construct`](AllocPolicy::construct), [`destroy`](AllocPolicy::destroy) and
/// [`take`](AllocPolicy::take).
///
/// Every array operation checks the requested count against [`Policy::LIMIT`] before any memory
/// is touched.
///
/// # Safety
/// Collections rely on implementors for memory safety. A pointer returned by an allocating
/// function must be non-null, aligned and valid for reads and writes of the requested number of
/// `T`s until it is passed back to the matching deallocating function, and all of its slots must
/// be vacant unless stated otherwise.
pub unsafe trait AllocPolicy<T>: Policy {
    /// Allocates a single slot and constructs `value` in it.
    ///
    /// # Errors
    /// Fails if the policy's limit is 0.
    fn allocate(value: T) -> Result<NonNull<T>, AllocationLimitExceeded>;

    /// Moves the value out of a slot created by [`allocate`](AllocPolicy::allocate) and releases
    /// the slot.
    ///
    /// # Safety
    /// `ptr` must have been returned by [`allocate`](AllocPolicy::allocate) of the same policy
    /// and not deallocated since.
    unsafe fn deallocate(ptr: NonNull<T>) -> T;

    /// Allocates `count` vacant slots.
    ///
    /// # Errors
    /// Fails before allocating if `count` exceeds the policy's limit.
    fn array_allocate(count: usize) -> Result<NonNull<T>, AllocationLimitExceeded>;

    /// Allocates `count` slots, each live and holding a clone of `fill`.
    ///
    /// # Errors
    /// Fails before allocating if `count` exceeds the policy's limit.
    fn array_allocate_filled(count: usize, fill: &T) -> Result<NonNull<T>, AllocationLimitExceeded>
    where
        T: Clone;

    /// Moves an allocation of `old_cap` slots to one of `new_cap` slots. The first `old_count`
    /// slots are live and keep their values, all other slots of the result are vacant.
    ///
    /// # Errors
    /// Fails if `new_cap` exceeds the policy's limit, in which case the old allocation is left
    /// untouched.
    ///
    /// # Safety
    /// `ptr` must have been allocated by this policy with `old_cap` slots, of which exactly the
    /// first `old_count` are live. `old_count` must not exceed `new_cap`. On success, `ptr` is
    /// invalidated.
    unsafe fn array_reallocate(
        ptr: NonNull<T>,
        old_cap: usize,
        new_cap: usize,
        old_count: usize,
    ) -> Result<NonNull<T>, AllocationLimitExceeded>;

    /// Releases an allocation of `cap` slots.
    ///
    /// # Safety
    /// `ptr` must have been allocated by this policy with `cap` slots, all of which are vacant
    /// (or hold values without drop glue). `ptr` is invalidated.
    unsafe fn array_deallocate(ptr: NonNull<T>, cap: usize);

    /// Constructs `value` in a vacant slot, making it live.
    ///
    /// # Safety
    /// `slot` must point to a vacant slot of an allocation made by this policy.
    unsafe fn construct(slot: NonNull<T>, value: T);

    /// Destroys the value in a live slot, making it vacant.
    ///
    /// # Safety
    /// `slot` must point to a live slot of an allocation made by this policy.
    unsafe fn destroy(slot: NonNull<T>);

    /// Moves the value out of a live slot, making it vacant.
    ///
    /// # Safety
    /// `slot` must point to a live slot of an allocation made by this policy.
    unsafe fn take(slot: NonNull<T>) -> T;
}

/// Clamps the requested limit of a policy so that it fits in both [`MAX_LIMIT`] and the
/// positions of size type `S`.
pub(crate) const fn effective_limit<S: SizeType>(requested: usize) -> usize {
    let mut limit = requested;
    if limit > S::MAX_POSITION {
        limit = S::MAX_POSITION;
    }
    if limit > MAX_LIMIT {
        limit = MAX_LIMIT;
    }
    limit
}
