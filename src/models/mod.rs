// Entity model shared by the calendar engine, the store and the admin handlers.

pub mod category;
pub mod document;
pub mod event;
pub mod event_type;
pub mod settings;

// Flattened so callers can write `use crate::models::Category`.
pub use category::{Category, CategoryInput};
pub use document::Document;
pub use event::{Event, EventInput, EventWithJoins};
pub use event_type::{EventType, EventTypeInput};
pub use settings::{Locale, Setting, Settings, WeekStart};
