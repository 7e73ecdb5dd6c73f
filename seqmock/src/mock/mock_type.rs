use std::cell::RefCell;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::rc::Rc;

use crate::{verify, Args, Call, Result};

use super::MockObject;

/// Display name of a [`MockType`] created by [`MockType::default`].
pub const DEFAULT_NAME: &str = "MockObject";

/// A configured mock type.
///
/// The mock type captures a display name and the ordered list of expected
/// calls. Each call to [`instantiate`](Self::instantiate) creates a new
/// [`MockObject`] with its own call record; all instances share the expected
/// calls.
///
/// The mock type keeps the most recently created instance alive, so the code
/// under test can create and drop its collaborators while the test still
/// verifies them afterwards:
///
/// ```
/// use seqmock::{args, Call, Factory, MockType};
///
/// fn code_under_test<F: Factory<Instance = seqmock::MockObject>>(factory: &F) {
///     let obj = factory.create(args![42]);
///     let _ = obj.method("close").complete(args![]);
/// }
///
/// let mock = MockType::new("file", [
///     Call::constructor().with_args(args![42]),
///     Call::new("close"),
/// ]);
///
/// code_under_test(&mock);
///
/// mock.verify().unwrap();
/// ```
pub struct MockType {
    name: Rc<str>,
    expected: Rc<[Call]>,
    last: RefCell<Option<MockObject>>,
}

impl MockType {
    /// Create a new mock type named `name` that expects the passed calls in
    /// the given order.
    pub fn new<S, I>(name: S, expected: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = Call>,
    {
        let name = name.into();
        let expected = expected.into_iter().collect::<Rc<[Call]>>();

        tracing::debug!(mock = %name, expected = expected.len(), "create mock type");

        Self {
            name: name.into(),
            expected,
            last: RefCell::new(None),
        }
    }

    /// Create a new mock type named `name` that does not expect any call.
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self::new(name, Vec::new())
    }

    /// Get the display name of the mock type.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the expected calls.
    #[must_use]
    pub fn expected(&self) -> &[Call] {
        &self.expected
    }

    /// Create a new instance of the mock type.
    ///
    /// The construction is recorded as [`Call::constructor`] with the passed
    /// `args`. If the first expectation matches it, its side effect is
    /// executed. The new instance is remembered as
    /// [`last_instance`](Self::last_instance).
    pub fn instantiate<A: Into<Args>>(&self, args: A) -> MockObject {
        let mock = MockObject::construct(self.name.clone(), self.expected.clone(), args.into());

        *self.last.borrow_mut() = Some(mock.clone());

        mock
    }

    /// Get the most recently created instance, `None` if no instance was
    /// created yet.
    #[must_use]
    pub fn last_instance(&self) -> Option<MockObject> {
        self.last.borrow().clone()
    }

    /// Verify the most recently created instance.
    ///
    /// If no instance was created yet an empty call record is verified, so
    /// every expectation is reported as not called.
    ///
    /// # Errors
    /// Returns the first divergence between the expected and the recorded
    /// calls.
    pub fn verify(&self) -> Result<()> {
        match self.last_instance() {
            Some(mock) => mock.verify(),
            None => verify::verify(&self.expected, &[]),
        }
    }
}

impl Default for MockType {
    fn default() -> Self {
        Self::named(DEFAULT_NAME)
    }
}

impl Display for MockType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.name)
    }
}

impl Debug for MockType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("MockType")
            .field("name", &self.name)
            .field("expected", &self.expected)
            .field("last", &self.last.borrow())
            .finish()
    }
}

/// Creates the collaborators of the code under test.
///
/// Code that needs to create its collaborators takes a [`Factory`] instead of
/// naming a concrete type, so tests can pass a [`MockType`] while production
/// code passes a closure.
pub trait Factory {
    /// Type of the created instances.
    type Instance;

    /// Create a new instance from the passed constructor arguments.
    fn create(&self, args: Args) -> Self::Instance;
}

impl Factory for MockType {
    type Instance = MockObject;

    fn create(&self, args: Args) -> Self::Instance {
        self.instantiate(args)
    }
}

impl<F, T> Factory for F
where
    F: Fn(Args) -> T,
{
    type Instance = T;

    fn create(&self, args: Args) -> Self::Instance {
        self(args)
    }
}
