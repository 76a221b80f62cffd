//! The three-phase task contract.

/// A single test case expressed as `when`, `then` and an optional `end`.
///
/// Implementors keep whatever state they need between phases (fixtures,
/// values captured in `when` and checked in `then`). A phase fails either by
/// returning `Err` or by panicking, e.g. from `assert!`. Tasks that only ever
/// fail by panicking can use [`std::convert::Infallible`] as their error.
///
/// Run a task with [`given`](crate::given) or [`run`](crate::run).
///
/// `when` and `then` have no defaults. A task providing only `when` does not
/// compile:
///
/// ```compile_fail,E0046
/// struct OnlyWhen;
///
/// impl tstflw::Task for OnlyWhen {
///     type Error = ();
///
///     fn when(&mut self) -> Result<(), ()> {
///         Ok(())
///     }
/// }
/// ```
///
/// and neither does one providing only `then`:
///
/// ```compile_fail,E0046
/// struct OnlyThen;
///
/// impl tstflw::Task for OnlyThen {
///     type Error = ();
///
///     fn then(&mut self) -> Result<(), ()> {
///         Ok(())
///     }
/// }
/// ```
pub trait Task {
    /// Error returned by a failing phase.
    type Error;

    /// Arrange and perform the action under test.
    fn when(&mut self) -> Result<(), Self::Error>;

    /// Verify the outcome of [`when`](Task::when).
    fn then(&mut self) -> Result<(), Self::Error>;

    /// Tear down. Runs only after `when` and `then` both succeeded.
    ///
    /// Cleanup that must happen even when an earlier phase fails belongs in a
    /// [`CleanupGuard`](crate::CleanupGuard) held by the task instead.
    fn end(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<T: Task + ?Sized> Task for &mut T {
    type Error = T::Error;

    fn when(&mut self) -> Result<(), Self::Error> {
        (**self).when()
    }

    fn then(&mut self) -> Result<(), Self::Error> {
        (**self).then()
    }

    fn end(&mut self) -> Result<(), Self::Error> {
        (**self).end()
    }
}

impl<T: Task + ?Sized> Task for Box<T> {
    type Error = T::Error;

    fn when(&mut self) -> Result<(), Self::Error> {
        (**self).when()
    }

    fn then(&mut self) -> Result<(), Self::Error> {
        (**self).then()
    }

    fn end(&mut self) -> Result<(), Self::Error> {
        (**self).end()
    }
}
