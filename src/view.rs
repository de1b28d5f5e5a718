//! Transformed views over key-value mappings.
//!
//! A transformed view wraps a borrowed [`Mapping`] and exposes it through a
//! different key/value vocabulary, translated on every access by a pair of
//! [`Translate`] bundles. The view copies nothing and caches nothing: each
//! operation re-derives its result from the live underlying mapping at call
//! time, so mutations of the mapping are observable through the view on the
//! very next call.
//!
//! An underlying entry is *visible* through the view exactly when the
//! forward direction of the key translate accepts its key. Declining is the
//! sole filtering mechanism; there is no separate predicate.
//!
//! Two flavors are provided:
//!
//! - [`TransformedView`] borrows the mapping immutably and offers the read
//!   surface: [`get`](TransformedView::get), strict
//!   [`lookup`](TransformedView::lookup), [`contains`](TransformedView::contains),
//!   and lazy traversal via [`keys`](TransformedView::keys),
//!   [`values`](TransformedView::values), and
//!   [`entries`](TransformedView::entries).
//! - [`TransformedViewMut`] borrows the mapping exclusively and adds the
//!   write-through operations [`set`](TransformedViewMut::set) and
//!   [`delete`](TransformedViewMut::delete).
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use transmap::translate::FunctionTranslate;
//! use transmap::view::TransformedView;
//!
//! let mut environ = BTreeMap::new();
//! environ.insert("HTTP_USER_AGENT".to_string(), "Example User Agent".to_string());
//! environ.insert("HTTP_FOO_BAR".to_string(), "Example value".to_string());
//! environ.insert("wsgi.not_important".to_string(), "ignored".to_string());
//!
//! let header_names = FunctionTranslate::new(
//!     |raw: String| {
//!         raw.strip_prefix("HTTP_")
//!             .map(|rest| rest.to_ascii_lowercase().replace('_', "-"))
//!     },
//!     |name: String| Some(format!("HTTP_{}", name.to_ascii_uppercase().replace('-', "_"))),
//! );
//!
//! let headers = TransformedView::new(&environ, header_names, transmap::translate::identity_translate());
//!
//! assert_eq!(
//!     headers.get("user-agent".to_string()),
//!     Some("Example User Agent".to_string())
//! );
//! assert!(!headers.contains("wsgi.not_important".to_string()));
//!
//! let visible: Vec<_> = headers.entries().collect();
//! assert_eq!(
//!     visible,
//!     vec![
//!         ("foo-bar".to_string(), "Example value".to_string()),
//!         ("user-agent".to_string(), "Example User Agent".to_string()),
//!     ]
//! );
//! ```

use std::marker::PhantomData;

use crate::error::ViewError;
use crate::mapping::{Mapping, MappingMut};
use crate::translate::{IdentityTranslate, Translate};

/// A read-only transformed view over a borrowed mapping.
///
/// # Type Parameters
///
/// - `M`: The underlying mapping type
/// - `KT`: The key translate, converting `M::Key` to and from `K`
/// - `VT`: The value translate, converting `M::Value` to and from `V`
/// - `K`: The view-side key type
/// - `V`: The view-side value type
///
/// The view holds only the borrow and the two translates; it is stateless
/// beyond that binding, and dropping it has no effect on the mapping. The
/// borrow checker bounds the view's lifetime by the mapping's.
///
/// All multi-entry operations are O(n) over the mapping's current size,
/// applying the key translate to every entry to determine visibility. There
/// is no index or precomputed filter, so the view always reflects live
/// mutations of the underlying mapping.
pub struct TransformedView<'a, M, KT, VT, K, V> {
    source: &'a M,
    key_translate: KT,
    value_translate: VT,
    _marker: PhantomData<(K, V)>,
}

impl<'a, M, KT, VT, K, V> TransformedView<'a, M, KT, VT, K, V>
where
    M: Mapping,
    M::Key: Clone,
    M::Value: Clone,
    KT: Translate<M::Key, K>,
    VT: Translate<M::Value, V>,
{
    /// Creates a view over `source` with the given key and value translates.
    ///
    /// Use [`identity_translate`](crate::translate::identity_translate) for
    /// any axis whose vocabulary should pass through unchanged.
    #[must_use]
    pub const fn new(source: &'a M, key_translate: KT, value_translate: VT) -> Self {
        Self {
            source,
            key_translate,
            value_translate,
            _marker: PhantomData,
        }
    }

    /// Looks up a view key, returning `None` when it is absent.
    ///
    /// The key is backward-translated into the source vocabulary; a
    /// declined translation, a missing source key, and a source value the
    /// value translate declines all normalize to `None`.
    #[must_use]
    pub fn get(&self, key: K) -> Option<V> {
        let source_key = self.key_translate.backward(key)?;
        let source_value = self.source.lookup(&source_key)?;
        self.value_translate.forward(source_value.clone())
    }

    /// Looks up a view key, strict form.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::KeyNotFound`] where [`get`](Self::get) would
    /// return `None`; a failed backward translation and a genuinely missing
    /// source key are reported identically.
    pub fn lookup(&self, key: K) -> Result<V, ViewError> {
        self.get(key).ok_or(ViewError::KeyNotFound)
    }

    /// Returns `true` if the view key backward-translates to a source key
    /// that is present in the underlying mapping.
    ///
    /// Presence is a key-level question: an entry whose *value* the value
    /// translate declines is still `contains`-visible.
    #[must_use]
    pub fn contains(&self, key: K) -> bool {
        self.key_translate
            .backward(key)
            .is_some_and(|source_key| self.source.contains_key(&source_key))
    }

    /// Counts the entries currently visible through the view.
    ///
    /// O(n) over the underlying mapping, by design.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys().count()
    }

    /// Returns `true` if no entry is currently visible through the view.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys().next().is_none()
    }

    /// Iterates over the view keys of the currently visible entries.
    ///
    /// The traversal walks the underlying mapping's current contents in its
    /// own iteration order, skipping entries whose key the forward
    /// translation declines. It is a one-pass lazy sequence, not a
    /// snapshot; call again to observe the mapping's current state.
    pub fn keys(&self) -> Keys<'_, M, KT, K> {
        Keys {
            entries: self.source.entries(),
            key_translate: &self.key_translate,
            _marker: PhantomData,
        }
    }

    /// Iterates over the view values of the currently visible entries.
    ///
    /// Same traversal as [`keys`](Self::keys); entries whose value the
    /// forward translation declines are skipped as well.
    pub fn values(&self) -> Values<'_, M, KT, VT, K, V> {
        Values {
            entries: self.source.entries(),
            key_translate: &self.key_translate,
            value_translate: &self.value_translate,
            _marker: PhantomData,
        }
    }

    /// Iterates over `(key, value)` pairs of the currently visible entries.
    ///
    /// Same traversal and skipping rules as [`values`](Self::values).
    pub fn entries(&self) -> Entries<'_, M, KT, VT, K, V> {
        Entries {
            entries: self.source.entries(),
            key_translate: &self.key_translate,
            value_translate: &self.value_translate,
            _marker: PhantomData,
        }
    }
}

impl<'a, M> TransformedView<'a, M, IdentityTranslate<M::Key>, IdentityTranslate<M::Value>, M::Key, M::Value>
where
    M: Mapping,
{
    /// Creates a view whose every axis is the identity.
    ///
    /// Such a view behaves observably identically to direct access to the
    /// underlying mapping.
    #[must_use]
    pub const fn identity(source: &'a M) -> Self {
        Self {
            source,
            key_translate: IdentityTranslate::new(),
            value_translate: IdentityTranslate::new(),
            _marker: PhantomData,
        }
    }
}

impl<M, KT: Clone, VT: Clone, K, V> Clone for TransformedView<'_, M, KT, VT, K, V> {
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            key_translate: self.key_translate.clone(),
            value_translate: self.value_translate.clone(),
            _marker: PhantomData,
        }
    }
}

impl<M: std::fmt::Debug, KT, VT, K, V> std::fmt::Debug for TransformedView<'_, M, KT, VT, K, V> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("TransformedView")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl<'v, M, KT, VT, K, V> IntoIterator for &'v TransformedView<'_, M, KT, VT, K, V>
where
    M: Mapping,
    M::Key: Clone,
    M::Value: Clone,
    KT: Translate<M::Key, K>,
    VT: Translate<M::Value, V>,
{
    type Item = (K, V);
    type IntoIter = Entries<'v, M, KT, VT, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

/// A mutable transformed view over an exclusively borrowed mapping.
///
/// Offers the full read surface of [`TransformedView`] plus write-through
/// mutation: [`set`](Self::set) and [`delete`](Self::delete) translate the
/// view-side key/value into source terms and apply the change directly to
/// the underlying mapping, where it is immediately visible through this
/// view and through any later alias of the mapping.
pub struct TransformedViewMut<'a, M, KT, VT, K, V> {
    source: &'a mut M,
    key_translate: KT,
    value_translate: VT,
    _marker: PhantomData<(K, V)>,
}

impl<'a, M, KT, VT, K, V> TransformedViewMut<'a, M, KT, VT, K, V>
where
    M: MappingMut,
    M::Key: Clone,
    M::Value: Clone,
    KT: Translate<M::Key, K>,
    VT: Translate<M::Value, V>,
{
    /// Creates a mutable view over `source` with the given translates.
    #[must_use]
    pub const fn new(source: &'a mut M, key_translate: KT, value_translate: VT) -> Self {
        Self {
            source,
            key_translate,
            value_translate,
            _marker: PhantomData,
        }
    }

    /// Looks up a view key, returning `None` when it is absent.
    ///
    /// See [`TransformedView::get`].
    #[must_use]
    pub fn get(&self, key: K) -> Option<V> {
        let source_key = self.key_translate.backward(key)?;
        let source_value = self.source.lookup(&source_key)?;
        self.value_translate.forward(source_value.clone())
    }

    /// Looks up a view key, strict form.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::KeyNotFound`] where [`get`](Self::get) would
    /// return `None`.
    pub fn lookup(&self, key: K) -> Result<V, ViewError> {
        self.get(key).ok_or(ViewError::KeyNotFound)
    }

    /// Returns `true` if the view key resolves to a present source key.
    ///
    /// See [`TransformedView::contains`].
    #[must_use]
    pub fn contains(&self, key: K) -> bool {
        self.key_translate
            .backward(key)
            .is_some_and(|source_key| self.source.contains_key(&source_key))
    }

    /// Counts the entries currently visible through the view. O(n).
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys().count()
    }

    /// Returns `true` if no entry is currently visible through the view.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys().next().is_none()
    }

    /// Iterates over the view keys of the currently visible entries.
    ///
    /// See [`TransformedView::keys`].
    pub fn keys(&self) -> Keys<'_, M, KT, K> {
        Keys {
            entries: self.source.entries(),
            key_translate: &self.key_translate,
            _marker: PhantomData,
        }
    }

    /// Iterates over the view values of the currently visible entries.
    ///
    /// See [`TransformedView::values`].
    pub fn values(&self) -> Values<'_, M, KT, VT, K, V> {
        Values {
            entries: self.source.entries(),
            key_translate: &self.key_translate,
            value_translate: &self.value_translate,
            _marker: PhantomData,
        }
    }

    /// Iterates over `(key, value)` pairs of the currently visible entries.
    ///
    /// See [`TransformedView::entries`].
    pub fn entries(&self) -> Entries<'_, M, KT, VT, K, V> {
        Entries {
            entries: self.source.entries(),
            key_translate: &self.key_translate,
            value_translate: &self.value_translate,
            _marker: PhantomData,
        }
    }

    /// Reborrows this mutable view as a read-only [`TransformedView`].
    #[must_use]
    pub fn as_view(&self) -> TransformedView<'_, M, &KT, &VT, K, V> {
        TransformedView::new(&*self.source, &self.key_translate, &self.value_translate)
    }

    /// Inserts or overwrites the entry under `key`, write-through.
    ///
    /// Both the key and the value are backward-translated into the source
    /// vocabulary before storing. Returns the previous value as seen
    /// through the view; a previous value the value translate declines is
    /// normalized to `None`, exactly as [`get`](Self::get) would.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::NotRepresentable`] if either backward
    /// translation declines. A view key that cannot round-trip back to a
    /// source key is unrepresentable by construction, so it is rejected
    /// rather than silently dropped.
    pub fn set(&mut self, key: K, value: V) -> Result<Option<V>, ViewError> {
        let source_key = self
            .key_translate
            .backward(key)
            .ok_or(ViewError::NotRepresentable)?;
        let source_value = self
            .value_translate
            .backward(value)
            .ok_or(ViewError::NotRepresentable)?;
        let previous = self.source.insert(source_key, source_value);
        Ok(previous.and_then(|source_value| self.value_translate.forward(source_value)))
    }

    /// Removes the entry under `key` from the underlying mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::KeyNotFound`] if the backward translation
    /// declines or the resolved source key is absent; as with
    /// [`lookup`](Self::lookup), the two are reported identically.
    pub fn delete(&mut self, key: K) -> Result<(), ViewError> {
        let source_key = self
            .key_translate
            .backward(key)
            .ok_or(ViewError::KeyNotFound)?;
        match self.source.remove(&source_key) {
            Some(_) => Ok(()),
            None => Err(ViewError::KeyNotFound),
        }
    }
}

impl<'a, M> TransformedViewMut<'a, M, IdentityTranslate<M::Key>, IdentityTranslate<M::Value>, M::Key, M::Value>
where
    M: MappingMut,
{
    /// Creates a mutable view whose every axis is the identity.
    #[must_use]
    pub const fn identity(source: &'a mut M) -> Self {
        Self {
            source,
            key_translate: IdentityTranslate::new(),
            value_translate: IdentityTranslate::new(),
            _marker: PhantomData,
        }
    }
}

impl<M: std::fmt::Debug, KT, VT, K, V> std::fmt::Debug for TransformedViewMut<'_, M, KT, VT, K, V> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("TransformedViewMut")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl<'v, M, KT, VT, K, V> IntoIterator for &'v TransformedViewMut<'_, M, KT, VT, K, V>
where
    M: MappingMut,
    M::Key: Clone,
    M::Value: Clone,
    KT: Translate<M::Key, K>,
    VT: Translate<M::Value, V>,
{
    type Item = (K, V);
    type IntoIter = Entries<'v, M, KT, VT, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

/// Iterator over the view keys of the visible entries.
///
/// Created by [`TransformedView::keys`]. Walks the underlying mapping once,
/// in its own order, skipping entries whose key the forward translation
/// declines.
pub struct Keys<'v, M, KT, K>
where
    M: Mapping + 'v,
{
    entries: M::Entries<'v>,
    key_translate: &'v KT,
    _marker: PhantomData<K>,
}

impl<'v, M, KT, K> Iterator for Keys<'v, M, KT, K>
where
    M: Mapping + 'v,
    M::Key: Clone,
    KT: Translate<M::Key, K>,
{
    type Item = K;

    fn next(&mut self) -> Option<K> {
        loop {
            let (key, _) = self.entries.next()?;
            if let Some(view_key) = self.key_translate.forward(key.clone()) {
                return Some(view_key);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.entries.size_hint().1)
    }
}

/// Iterator over the view values of the visible entries.
///
/// Created by [`TransformedView::values`]. Entries whose key or value the
/// forward translation declines are skipped.
pub struct Values<'v, M, KT, VT, K, V>
where
    M: Mapping + 'v,
{
    entries: M::Entries<'v>,
    key_translate: &'v KT,
    value_translate: &'v VT,
    _marker: PhantomData<(K, V)>,
}

impl<'v, M, KT, VT, K, V> Iterator for Values<'v, M, KT, VT, K, V>
where
    M: Mapping + 'v,
    M::Key: Clone,
    M::Value: Clone,
    KT: Translate<M::Key, K>,
    VT: Translate<M::Value, V>,
{
    type Item = V;

    fn next(&mut self) -> Option<V> {
        loop {
            let (key, value) = self.entries.next()?;
            if self.key_translate.forward(key.clone()).is_none() {
                continue;
            }
            if let Some(view_value) = self.value_translate.forward(value.clone()) {
                return Some(view_value);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.entries.size_hint().1)
    }
}

/// Iterator over `(key, value)` pairs of the visible entries.
///
/// Created by [`TransformedView::entries`] and by iterating a borrowed
/// view. Entries whose key or value the forward translation declines are
/// skipped.
pub struct Entries<'v, M, KT, VT, K, V>
where
    M: Mapping + 'v,
{
    entries: M::Entries<'v>,
    key_translate: &'v KT,
    value_translate: &'v VT,
    _marker: PhantomData<(K, V)>,
}

impl<'v, M, KT, VT, K, V> Iterator for Entries<'v, M, KT, VT, K, V>
where
    M: Mapping + 'v,
    M::Key: Clone,
    M::Value: Clone,
    KT: Translate<M::Key, K>,
    VT: Translate<M::Value, V>,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        loop {
            let (key, value) = self.entries.next()?;
            let Some(view_key) = self.key_translate.forward(key.clone()) else {
                continue;
            };
            if let Some(view_value) = self.value_translate.forward(value.clone()) {
                return Some((view_key, view_value));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.entries.size_hint().1)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use static_assertions::assert_impl_all;

    use super::*;
    use crate::translate::{FunctionTranslate, identity_translate};

    assert_impl_all!(
        TransformedView<'static, BTreeMap<String, String>, IdentityTranslate<String>, IdentityTranslate<String>, String, String>:
        Send, Sync, Clone
    );
    assert_impl_all!(
        TransformedViewMut<'static, BTreeMap<String, String>, IdentityTranslate<String>, IdentityTranslate<String>, String, String>:
        Send, Sync
    );

    fn environ() -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert("HTTP_USER_AGENT".to_string(), "UA".to_string());
        map.insert("HTTP_FOO_BAR".to_string(), "fb".to_string());
        map.insert("wsgi.x".to_string(), "ignore".to_string());
        map
    }

    fn header_names() -> impl Translate<String, String> + Clone {
        FunctionTranslate::new(
            |raw: String| {
                raw.strip_prefix("HTTP_")
                    .map(|rest| rest.to_ascii_lowercase().replace('_', "-"))
            },
            |name: String| Some(format!("HTTP_{}", name.to_ascii_uppercase().replace('-', "_"))),
        )
    }

    #[test]
    fn test_view_get_translates_key_and_value() {
        let environ = environ();
        let headers = TransformedView::new(&environ, header_names(), identity_translate());

        assert_eq!(headers.get("user-agent".to_string()), Some("UA".to_string()));
        assert_eq!(headers.get("missing".to_string()), None);
    }

    #[test]
    fn test_view_entries_filter_invisible_keys() {
        let environ = environ();
        let headers = TransformedView::new(&environ, header_names(), identity_translate());

        let entries: Vec<_> = headers.entries().collect();
        assert_eq!(
            entries,
            vec![
                ("foo-bar".to_string(), "fb".to_string()),
                ("user-agent".to_string(), "UA".to_string()),
            ]
        );
    }

    #[test]
    fn test_view_len_counts_visible_entries_only() {
        let environ = environ();
        let headers = TransformedView::new(&environ, header_names(), identity_translate());

        assert_eq!(headers.len(), 2);
        assert!(!headers.is_empty());
    }

    #[test]
    fn test_identity_view_matches_direct_access() {
        let mut map = BTreeMap::new();
        map.insert("animal".to_string(), "cat".to_string());
        let view = TransformedView::identity(&map);

        assert_eq!(view.get("animal".to_string()), Some("cat".to_string()));
        assert!(view.contains("animal".to_string()));
        assert_eq!(view.len(), map.len());
    }

    #[test]
    fn test_mut_view_set_writes_through() {
        let mut environ = environ();
        let mut headers =
            TransformedViewMut::new(&mut environ, header_names(), identity_translate());

        assert_eq!(
            headers.set("referer".to_string(), "https://example.org/".to_string()),
            Ok(None)
        );
        assert_eq!(
            headers.get("referer".to_string()),
            Some("https://example.org/".to_string())
        );

        drop(headers);
        assert_eq!(
            environ.get("HTTP_REFERER"),
            Some(&"https://example.org/".to_string())
        );
    }

    #[test]
    fn test_mut_view_delete_removes_from_source() {
        let mut environ = environ();
        let mut headers =
            TransformedViewMut::new(&mut environ, header_names(), identity_translate());

        headers.delete("foo-bar".to_string()).unwrap();
        assert_eq!(
            headers.delete("foo-bar".to_string()),
            Err(ViewError::KeyNotFound)
        );

        drop(headers);
        assert!(!environ.contains_key("HTTP_FOO_BAR"));
    }

    #[test]
    fn test_mut_view_as_view_shares_the_binding() {
        let mut environ = environ();
        let headers = TransformedViewMut::new(&mut environ, header_names(), identity_translate());

        let read_only = headers.as_view();
        assert_eq!(read_only.get("user-agent".to_string()), Some("UA".to_string()));
        assert_eq!(read_only.len(), 2);
    }

    #[test]
    fn test_borrowed_view_into_iterator() {
        let environ = environ();
        let headers = TransformedView::new(&environ, header_names(), identity_translate());

        let mut names: Vec<_> = (&headers).into_iter().map(|(name, _)| name).collect();
        names.sort();
        assert_eq!(names, vec!["foo-bar".to_string(), "user-agent".to_string()]);
    }
}
