//! `GhostCell` — safe interior mutability via branded tokens.
//!
//! A thin, token-gated wrapper over `core::cell::UnsafeCell`. In optimized
//! builds the token arguments compile away, yielding code equivalent to raw
//! `UnsafeCell` access while preserving aliasing invariants.
//!
//! ## Safety invariant (informal but precise)
//!
//! For a fixed brand `'brand`, every safe method that can produce `&mut T`
//! requires `&mut GhostToken<'brand>`. Since the token is linear (not
//! `Copy`/`Clone`), Rust's borrow rules ensure there cannot exist two
//! simultaneous mutable borrows of the same token, and therefore safe code
//! cannot create overlapping mutable borrows of the same cell.

use core::cell::UnsafeCell;
use core::marker::PhantomData;
use core::mem;

use crate::GhostToken;

/// A branded cell that can only be accessed with a token of the same brand.
#[repr(transparent)]
#[derive(Debug)]
pub struct GhostCell<'brand, T> {
    value: UnsafeCell<T>,
    _brand: PhantomData<&'brand mut ()>,
}

impl<'brand, T> GhostCell<'brand, T> {
    /// Creates a new `GhostCell` containing `value`.
    pub const fn new(value: T) -> Self {
        Self {
            value: UnsafeCell::new(value),
            _brand: PhantomData,
        }
    }

    /// Borrows the cell immutably.
    #[inline(always)]
    pub fn borrow<'a>(&'a self, _token: &'a GhostToken<'brand>) -> &'a T {
        // SAFETY: safe code cannot obtain `&mut T` without `&mut GhostToken<'brand>`,
        // and that exclusive token borrow cannot coexist with `_token` here.
        unsafe { &*self.value.get() }
    }

    /// Borrows the cell mutably.
    #[inline(always)]
    pub fn borrow_mut<'a>(&'a self, _token: &'a mut GhostToken<'brand>) -> &'a mut T {
        // SAFETY: the caller proves exclusivity via `&mut GhostToken<'brand>`.
        unsafe { &mut *self.value.get() }
    }

    /// Replaces the contained value, returning the old one.
    #[inline]
    pub fn replace(&self, token: &mut GhostToken<'brand>, value: T) -> T {
        mem::replace(self.borrow_mut(token), value)
    }

    /// Consumes the cell and returns the contained value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }
}

impl<'brand, T: Copy> GhostCell<'brand, T> {
    /// Copies the contained value.
    #[inline(always)]
    pub fn get(&self, token: &GhostToken<'brand>) -> T {
        *self.borrow(token)
    }

    /// Overwrites the contained value.
    #[inline(always)]
    pub fn set(&self, token: &mut GhostToken<'brand>, value: T) {
        *self.borrow_mut(token) = value;
    }
}

impl<'brand, T: Default> Default for GhostCell<'brand, T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<'brand, T> From<T> for GhostCell<'brand, T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

// SAFETY: moving the cell by value does not grant interior access; safe access
// is token-gated, so the usual `Send`/`Sync` bounds on `T` carry over.
unsafe impl<'brand, T: Send> Send for GhostCell<'brand, T> {}
unsafe impl<'brand, T: Sync> Sync for GhostCell<'brand, T> {}
