//! Page Behaviors
//!
//! One module per interactive feature of the server-rendered pages. `bind`
//! attaches to the elements present at load; listeners and timers go into the
//! controller's `Bindings`.

mod menu;
mod flash;
mod sections;
mod mentions;
mod confirm_delete;
pub mod notifications;
pub mod task_status;

pub use menu::bind as bind_menu;
pub use flash::bind as bind_flash;
pub use sections::bind as bind_sections;
pub use mentions::bind as bind_mentions;
pub use confirm_delete::bind as bind_confirm_delete;
pub use notifications::NotificationPoller;
