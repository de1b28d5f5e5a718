//! Partial bidirectional conversions between two vocabularies.
//!
//! A [`Translate`] converts values between a source vocabulary `S` and a
//! view vocabulary `A` in both directions. Unlike an isomorphism, either
//! direction may decline a particular input by returning `None`, which
//! reads as "this value is not representable on the other side". Declining
//! is the sole filtering mechanism used by transformed views: there is no
//! separate predicate.
//!
//! # Laws
//!
//! A `Translate` used as the key transform of a view must satisfy one law:
//!
//! 1. **Round-trip Law**: every source value the forward direction accepts
//!    must come back unchanged in meaning.
//!    ```text
//!    if translate.forward(source) == Some(value) then
//!        translate.backward(value) resolves to the same source entry
//!    ```
//!
//! The two directions need not be exact inverses over the whole source
//! domain; only the accepted values round-trip.
//!
//! # Examples
//!
//! ```
//! use transmap::translate::{FunctionTranslate, Translate};
//!
//! // HTTP_USER_AGENT <-> user-agent
//! let header_names = FunctionTranslate::new(
//!     |raw: String| {
//!         raw.strip_prefix("HTTP_")
//!             .map(|rest| rest.to_ascii_lowercase().replace('_', "-"))
//!     },
//!     |name: String| Some(format!("HTTP_{}", name.to_ascii_uppercase().replace('-', "_"))),
//! );
//!
//! assert_eq!(
//!     header_names.forward("HTTP_USER_AGENT".to_string()),
//!     Some("user-agent".to_string())
//! );
//! assert_eq!(header_names.forward("wsgi.input".to_string()), None);
//! assert_eq!(
//!     header_names.backward("user-agent".to_string()),
//!     Some("HTTP_USER_AGENT".to_string())
//! );
//! ```

use std::marker::PhantomData;

/// A partial bidirectional conversion between a source type and a view type.
///
/// # Type Parameters
///
/// - `S`: The source vocabulary
/// - `A`: The view vocabulary
///
/// Both directions are total-or-declining: `None` means the input has no
/// representation on the other side, never that something went transiently
/// wrong.
pub trait Translate<S, A> {
    /// Converts a source value into the view vocabulary.
    ///
    /// Returns `None` if the source value is not representable in the view.
    fn forward(&self, source: S) -> Option<A>;

    /// Converts a view value back into the source vocabulary.
    ///
    /// Returns `None` if the view value has no source representation.
    fn backward(&self, value: A) -> Option<S>;

    /// Returns the reversed Translate (swaps the two directions).
    ///
    /// # Example
    ///
    /// ```
    /// use transmap::translate::{FunctionTranslate, Translate};
    ///
    /// let doubling = FunctionTranslate::new(
    ///     |n: i32| n.checked_mul(2),
    ///     |n: i32| (n % 2 == 0).then(|| n / 2),
    /// );
    /// let halving = doubling.reverse();
    ///
    /// assert_eq!(halving.forward(10), Some(5));
    /// assert_eq!(halving.forward(7), None);
    /// ```
    fn reverse(self) -> ReversedTranslate<Self>
    where
        Self: Sized,
    {
        ReversedTranslate::new(self)
    }

    /// Composes this Translate with another, converting through an
    /// intermediate vocabulary.
    ///
    /// The composed forward direction declines whenever either stage
    /// declines, and likewise backward.
    ///
    /// # Example
    ///
    /// ```
    /// use transmap::translate::{FunctionTranslate, Translate};
    ///
    /// let widen = FunctionTranslate::new(
    ///     |n: i32| Some(i64::from(n)),
    ///     |n: i64| i32::try_from(n).ok(),
    /// );
    /// let stringify = FunctionTranslate::new(
    ///     |n: i64| Some(n.to_string()),
    ///     |s: String| s.parse::<i64>().ok(),
    /// );
    ///
    /// let composed = widen.compose(stringify);
    /// assert_eq!(composed.forward(42), Some("42".to_string()));
    /// assert_eq!(composed.backward("42".to_string()), Some(42));
    /// assert_eq!(composed.backward("not a number".to_string()), None);
    /// ```
    fn compose<B, T>(self, other: T) -> ComposedTranslate<Self, T, A>
    where
        Self: Sized,
        T: Translate<A, B>,
    {
        ComposedTranslate::new(self, other)
    }
}

impl<S, A, T> Translate<S, A> for &T
where
    T: Translate<S, A> + ?Sized,
{
    fn forward(&self, source: S) -> Option<A> {
        (**self).forward(source)
    }

    fn backward(&self, value: A) -> Option<S> {
        (**self).backward(value)
    }
}

/// A Translate implemented using a pair of declining functions.
///
/// This is the most common way to create a Translate. The `translate!`
/// macro generates a `FunctionTranslate` internally.
///
/// # Type Parameters
///
/// - `S`: The source vocabulary
/// - `A`: The view vocabulary
/// - `F`: The forward function type
/// - `B`: The backward function type
///
/// # Example
///
/// ```
/// use transmap::translate::{FunctionTranslate, Translate};
///
/// let lowercase_only = FunctionTranslate::new(
///     |s: String| (s == s.to_lowercase()).then_some(s),
///     |s: String| Some(s.to_lowercase()),
/// );
///
/// assert_eq!(lowercase_only.forward("animal".to_string()), Some("animal".to_string()));
/// assert_eq!(lowercase_only.forward("IGNORED".to_string()), None);
/// ```
pub struct FunctionTranslate<S, A, F, B>
where
    F: Fn(S) -> Option<A>,
    B: Fn(A) -> Option<S>,
{
    forward_function: F,
    backward_function: B,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, F, B> FunctionTranslate<S, A, F, B>
where
    F: Fn(S) -> Option<A>,
    B: Fn(A) -> Option<S>,
{
    /// Creates a new `FunctionTranslate` from forward and backward functions.
    ///
    /// Each function returns `None` to decline an input.
    #[must_use]
    pub const fn new(forward_function: F, backward_function: B) -> Self {
        Self {
            forward_function,
            backward_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, F, B> Translate<S, A> for FunctionTranslate<S, A, F, B>
where
    F: Fn(S) -> Option<A>,
    B: Fn(A) -> Option<S>,
{
    fn forward(&self, source: S) -> Option<A> {
        (self.forward_function)(source)
    }

    fn backward(&self, value: A) -> Option<S> {
        (self.backward_function)(value)
    }
}

impl<S, A, F, B> Clone for FunctionTranslate<S, A, F, B>
where
    F: Fn(S) -> Option<A> + Clone,
    B: Fn(A) -> Option<S> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            forward_function: self.forward_function.clone(),
            backward_function: self.backward_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, F, B> std::fmt::Debug for FunctionTranslate<S, A, F, B>
where
    F: Fn(S) -> Option<A>,
    B: Fn(A) -> Option<S>,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionTranslate")
            .finish_non_exhaustive()
    }
}

/// A reversed Translate that swaps the two directions.
pub struct ReversedTranslate<T> {
    inner: T,
}

impl<T> ReversedTranslate<T> {
    /// Creates a new `ReversedTranslate` from a Translate.
    #[must_use]
    pub const fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<S, A, T> Translate<A, S> for ReversedTranslate<T>
where
    T: Translate<S, A>,
{
    fn forward(&self, source: A) -> Option<S> {
        self.inner.backward(source)
    }

    fn backward(&self, value: S) -> Option<A> {
        self.inner.forward(value)
    }
}

impl<T: Clone> Clone for ReversedTranslate<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ReversedTranslate<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ReversedTranslate")
            .field("inner", &self.inner)
            .finish()
    }
}

/// A composed Translate that chains two Translates through an intermediate
/// vocabulary.
///
/// # Type Parameters
///
/// - `T1`: The first Translate
/// - `T2`: The second Translate
/// - `A`: The intermediate vocabulary (view side of `T1`, source side of `T2`)
pub struct ComposedTranslate<T1, T2, A> {
    first: T1,
    second: T2,
    _marker: PhantomData<A>,
}

impl<T1, T2, A> ComposedTranslate<T1, T2, A> {
    /// Creates a new `ComposedTranslate` from two Translates.
    #[must_use]
    pub const fn new(first: T1, second: T2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, T1, T2> Translate<S, B> for ComposedTranslate<T1, T2, A>
where
    T1: Translate<S, A>,
    T2: Translate<A, B>,
{
    fn forward(&self, source: S) -> Option<B> {
        self.first
            .forward(source)
            .and_then(|intermediate| self.second.forward(intermediate))
    }

    fn backward(&self, value: B) -> Option<S> {
        self.second
            .backward(value)
            .and_then(|intermediate| self.first.backward(intermediate))
    }
}

impl<T1: Clone, T2: Clone, A> Clone for ComposedTranslate<T1, T2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T1: std::fmt::Debug, T2: std::fmt::Debug, A> std::fmt::Debug for ComposedTranslate<T1, T2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedTranslate")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// The identity Translate: both directions accept every input unchanged.
///
/// This is the default for every view axis the caller does not customize;
/// a view configured entirely with identities behaves like direct access
/// to the underlying mapping.
pub struct IdentityTranslate<T> {
    _marker: PhantomData<T>,
}

impl<T> IdentityTranslate<T> {
    /// Creates a new identity Translate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Translate<T, T> for IdentityTranslate<T> {
    fn forward(&self, source: T) -> Option<T> {
        Some(source)
    }

    fn backward(&self, value: T) -> Option<T> {
        Some(value)
    }
}

impl<T> Default for IdentityTranslate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for IdentityTranslate<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for IdentityTranslate<T> {}

impl<T> std::fmt::Debug for IdentityTranslate<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("IdentityTranslate").finish()
    }
}

/// Creates an identity Translate.
///
/// # Example
///
/// ```
/// use transmap::translate::{Translate, identity_translate};
///
/// let identity = identity_translate::<i32>();
/// assert_eq!(identity.forward(42), Some(42));
/// assert_eq!(identity.backward(42), Some(42));
/// ```
#[must_use]
pub const fn identity_translate<T>() -> IdentityTranslate<T> {
    IdentityTranslate::new()
}

/// Creates a Translate from a pair of conversions that cannot decline.
///
/// # Example
///
/// ```
/// use transmap::translate::{Translate, total_translate};
///
/// let celsius_fahrenheit = total_translate(
///     |celsius: f64| celsius * 9.0 / 5.0 + 32.0,
///     |fahrenheit: f64| (fahrenheit - 32.0) * 5.0 / 9.0,
/// );
///
/// assert_eq!(celsius_fahrenheit.forward(0.0), Some(32.0));
/// ```
pub fn total_translate<S, A, F, B>(forward: F, backward: B) -> impl Translate<S, A> + Clone
where
    F: Fn(S) -> A + Clone,
    B: Fn(A) -> S + Clone,
{
    FunctionTranslate::new(
        move |source| Some(forward(source)),
        move |value| Some(backward(value)),
    )
}

/// Creates a Translate from forward and backward functions.
///
/// # Syntax
///
/// ```text
/// translate!(forward_function, backward_function)
/// ```
///
/// # Example
///
/// ```
/// use transmap::translate::Translate;
/// use transmap::translate;
///
/// let digits = translate!(
///     |n: u32| Some(n.to_string()),
///     |s: String| s.parse::<u32>().ok()
/// );
///
/// assert_eq!(digits.forward(7), Some("7".to_string()));
/// assert_eq!(digits.backward("oops".to_string()), None);
/// ```
#[macro_export]
macro_rules! translate {
    ($forward:expr, $backward:expr) => {
        $crate::translate::FunctionTranslate::new($forward, $backward)
    };
}
