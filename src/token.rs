//! GhostToken - the permission controller for branded cells.
//!
//! A `GhostToken<'brand>` is a zero-sized capability that gates access to every
//! cell created inside the same branding scope. Phantom lifetimes plus rank-2
//! polymorphism guarantee that cells from one scope can never be accessed with
//! a token from another.
//!
//! ## Core invariant (linearity)
//!
//! `GhostToken<'brand>` is intentionally **not** `Copy`/`Clone`.
//! This makes it a *linear* capability: any safe API that can produce `&mut T`
//! requires `&mut GhostToken<'brand>`, and Rust guarantees you cannot have two
//! live mutable borrows of the same token simultaneously.

use core::marker::PhantomData;

/// A zero-sized token that controls access to branded cells.
///
/// The phantom lifetime parameter brands the token, ensuring type-level
/// separation between different token scopes.
#[derive(Debug)]
pub struct GhostToken<'brand>(PhantomData<&'brand mut ()>);

impl<'brand> GhostToken<'brand> {
    /// Creates a new token and executes a closure with it.
    ///
    /// This is the only way to obtain a token. The closure receives the token
    /// by value; everything branded with its lifetime lives inside the scope.
    ///
    /// # Example
    ///
    /// ```rust
    /// use aura::{GhostToken, GhostCell};
    ///
    /// let result = GhostToken::new(|mut token| {
    ///     let cell = GhostCell::new(42);
    ///     *cell.borrow_mut(&mut token) = 100;
    ///     *cell.borrow(&token)
    /// });
    /// assert_eq!(result, 100);
    /// ```
    pub fn new<F, R>(f: F) -> R
    where
        F: for<'new_brand> FnOnce(GhostToken<'new_brand>) -> R,
    {
        f(GhostToken(PhantomData))
    }

    // NOTE: the public surface is intentionally tiny. If a pipeline needs a
    // `&mut GhostToken<'brand>`, take a mutable borrow inside the `new` closure.
}

// NOTE:
// `GhostToken` is intentionally NOT `Copy`/`Clone`.
//
// Duplicating the token would allow two simultaneous `&mut GhostToken<'brand>`
// values (by taking `&mut` of two copies), which would break the exclusivity
// invariant needed to safely hand out `&mut T` from `&GhostCell<T>`.

// Concurrency notes:
// - The token carries no data; it exists only as a compile-time capability.
// - Sharing `&GhostToken<'brand>` across threads only enables immutable,
//   token-gated reads (`&T`), which remain constrained by `T: Sync` on the
//   cells themselves.
// - Exclusive mutation still requires `&mut GhostToken<'brand>`, which the
//   borrow checker prevents from coexisting with any shared token borrow.
unsafe impl<'brand> Sync for GhostToken<'brand> {}
