/*!
This crate contains the components the dashboard pages are built from: layout primitives, the side navigation, form fields, alerts, buttons and tables.
*/

mod alert;
mod button;
mod form;
mod layout;
mod side_nav;
mod table;
mod util;

pub use self::alert::*;
pub use self::button::*;
pub use self::form::*;
pub use self::layout::*;
pub use self::side_nav::*;
pub use self::table::*;
pub use self::util::*;
