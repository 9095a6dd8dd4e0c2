//! Data shapes shared by every admin endpoint.

mod drag;
pub use drag::{DragItem, PositionedItem, positional_orders, verbatim_orders};

mod level;
pub use level::{StudentLevel, StudentLevelInfo, UnknownStudentLevel};

mod session;
pub use session::SessionUser;
