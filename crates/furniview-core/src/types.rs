//! Type aliases for shared state.
//!
//! The UI thread owns the design model. Controllers that need to read and
//! write the same design hold a `Shared<Design>`.
//!
//! ```rust,ignore
//! use furniview_core::{shared, Design, Shared};
//!
//! let design: Shared<Design> = shared(Design::default());
//! design.borrow_mut().set_name("Living room");
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap a value for single-threaded sharing.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
