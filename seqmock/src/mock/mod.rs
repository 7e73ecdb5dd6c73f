//! The [`mock`](self) module implements the mock type ([`MockType`]) and its
//! instances ([`MockObject`]) that record every call and verify them against
//! the expected calls.

mod dispatch;
mod mock_type;
mod object;

pub use dispatch::{returned, Dispatch};
pub use mock_type::{Factory, MockType, DEFAULT_NAME};
pub use object::{MockObject, PendingCall};
