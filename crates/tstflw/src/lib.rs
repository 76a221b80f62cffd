//! Three-phase scaffolding for test cases.
//!
//! A test case implements [`Task`] with a `when` (arrange/act), a `then`
//! (assert) and optionally an `end` (cleanup), and is executed with
//! [`given`] or [`run`], which call the phases in that fixed order.

pub mod closure;
pub mod error;
pub mod flow;
pub mod guard;
pub mod phase;
pub mod task;

pub use closure::{FnTask, FnTaskBuilder};
pub use error::{FlowError, Result};
pub use flow::{given, run};
pub use guard::CleanupGuard;
pub use phase::Phase;
pub use task::Task;
