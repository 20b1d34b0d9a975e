//! Data models
//!
//! Record shapes the REST API returns and accepts. The API owns these
//! records; the desk only holds copies for the page currently open.
//! All IDs are `i64`.

pub mod attendance;
pub mod booking;
pub mod de;
pub mod discount;
pub mod employee;
pub mod event;
pub mod media;
pub mod menu;
pub mod order;
pub mod purchase_order;
pub mod room;

// Re-exports
pub use attendance::*;
pub use booking::*;
pub use discount::*;
pub use employee::*;
pub use event::*;
pub use media::*;
pub use menu::*;
pub use order::*;
pub use purchase_order::*;
pub use room::*;
