pub mod date_picker;
pub use date_picker::DatePicker;
pub mod dropdown;
pub use dropdown::{Dropdown, DropdownEvent, Rect};
pub mod filter;
pub use filter::{EmployeeFilter, NotificationFilter};
pub mod form;
pub use form::{FormModal, FormState};
pub mod list_view;
pub use list_view::{ListState, ListView};
pub mod preview;
pub use preview::PreviewSlot;
pub mod refresh;
pub use refresh::RefreshFlag;
