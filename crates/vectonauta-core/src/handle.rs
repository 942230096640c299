// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shared ownership handles.
//!
//! A [`Handle<T>`] is a reference-counted, interior-mutable pointer to a single
//! allocation. Cloning a handle only increments the reference count; the value is
//! dropped exactly once, when the last handle (typed or erased) goes away.
//!
//! An [`AnyHandle`] is the same allocation with its concrete type erased. It can be
//! downcast back to a typed handle, and a successful downcast shares the reference
//! count of the source. A failed downcast is a plain `None`.
//!
//! The engine runs its frame loop on a single thread, so these handles use `Rc`
//! rather than `Arc` and are neither `Send` nor `Sync`.

use std::any::Any;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// A reference-counted handle to a shared, mutable value.
pub struct Handle<T: ?Sized>(Rc<RefCell<T>>);

impl<T> Handle<T> {
    /// Allocates `value` and returns the first handle to it.
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }
}

impl<T: ?Sized> Handle<T> {
    /// Wraps an existing shared cell.
    ///
    /// This is how a handle to a trait object is built: coerce an
    /// `Rc<RefCell<Concrete>>` to `Rc<RefCell<dyn Trait>>` and wrap it.
    pub fn from_rc(inner: Rc<RefCell<T>>) -> Self {
        Self(inner)
    }

    /// Returns the underlying shared cell.
    pub fn as_rc(&self) -> &Rc<RefCell<T>> {
        &self.0
    }

    /// Immutably borrows the value.
    ///
    /// # Panics
    /// Panics if the value is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    /// Mutably borrows the value.
    ///
    /// # Panics
    /// Panics if the value is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Mutably borrows the value, or returns `None` if it is already borrowed.
    pub fn try_borrow_mut(&self) -> Option<RefMut<'_, T>> {
        self.0.try_borrow_mut().ok()
    }

    /// The number of strong references to the allocation, erased handles included.
    pub fn strong_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    /// Returns `true` if both handles refer to the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn addr(&self) -> *const () {
        Rc::as_ptr(&self.0) as *const ()
    }
}

impl<T: Any> Handle<T> {
    /// Returns a type-erased handle sharing this handle's allocation.
    pub fn erase(&self) -> AnyHandle {
        let erased: Rc<dyn Any> = self.0.clone();
        AnyHandle(erased)
    }
}

impl<T: ?Sized> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(value) => f.debug_tuple("Handle").field(&&*value).finish(),
            Err(_) => f.write_str("Handle(<borrowed>)"),
        }
    }
}

impl<T: Any> From<Handle<T>> for AnyHandle {
    fn from(handle: Handle<T>) -> Self {
        let erased: Rc<dyn Any> = handle.0;
        AnyHandle(erased)
    }
}

/// A handle whose concrete type has been erased.
#[derive(Clone)]
pub struct AnyHandle(Rc<dyn Any>);

impl AnyHandle {
    /// Recovers a typed handle if the allocation holds a `U`.
    ///
    /// On success the returned handle shares the allocation and its reference
    /// count with `self`.
    pub fn downcast<U: Any>(&self) -> Option<Handle<U>> {
        Rc::clone(&self.0).downcast::<RefCell<U>>().ok().map(Handle)
    }

    /// Returns `true` if the allocation holds a `U`.
    pub fn is<U: Any>(&self) -> bool {
        (*self.0).is::<RefCell<U>>()
    }

    /// The number of strong references to the allocation.
    pub fn strong_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    /// Returns `true` if `handle` refers to the same allocation as `self`.
    pub fn refers_to<U: ?Sized>(&self, handle: &Handle<U>) -> bool {
        std::ptr::eq(Rc::as_ptr(&self.0) as *const (), handle.addr())
    }
}

impl fmt::Debug for AnyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyHandle")
            .field("strong_count", &self.strong_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct DropCounter {
        drops: Rc<Cell<u32>>,
    }

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    #[test]
    fn clones_share_one_allocation() {
        let a = Handle::new(5_i32);
        let b = a.clone();
        assert_eq!(a.strong_count(), 2);
        assert!(a.ptr_eq(&b));

        *b.borrow_mut() = 7;
        assert_eq!(*a.borrow(), 7);

        drop(b);
        assert_eq!(a.strong_count(), 1);
    }

    #[test]
    fn downcast_to_the_concrete_type_shares_the_count() {
        let typed = Handle::new(String::from("shape"));
        let erased = typed.erase();
        assert_eq!(typed.strong_count(), 2);

        let recovered = erased.downcast::<String>().expect("type matches");
        assert_eq!(typed.strong_count(), 3);
        assert!(recovered.ptr_eq(&typed));
        assert!(erased.refers_to(&typed));

        recovered.borrow_mut().push_str("-renamed");
        assert_eq!(typed.borrow().as_str(), "shape-renamed");
    }

    #[test]
    fn downcast_to_another_type_is_none() {
        let erased = Handle::new(1.5_f32).erase();
        assert!(erased.downcast::<i32>().is_none());
        assert!(!erased.is::<i32>());
        assert!(erased.is::<f32>());
        // The failed attempt must not leak a reference.
        assert_eq!(erased.strong_count(), 1);
    }

    #[test]
    fn value_is_dropped_once_after_the_last_handle() {
        let drops = Rc::new(Cell::new(0));
        let typed = Handle::new(DropCounter {
            drops: drops.clone(),
        });
        let erased: AnyHandle = typed.clone().into();
        let recovered = erased.downcast::<DropCounter>().unwrap();

        drop(typed);
        drop(erased);
        assert_eq!(drops.get(), 0, "one handle is still alive");

        drop(recovered);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn try_borrow_mut_reports_conflicts() {
        let handle = Handle::new(vec![1, 2, 3]);
        let guard = handle.borrow();
        assert!(handle.try_borrow_mut().is_none());
        drop(guard);
        assert!(handle.try_borrow_mut().is_some());
    }
}
