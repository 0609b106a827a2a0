pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use app::game::{GamePlugin, SandboxCorePlugin};
pub use core::components::{InteractionState, SpawnId, SpawnKind, SpawnedShape};
pub use core::config::config::GameConfig;
pub use gameplay::spawn::{SpawnRecord, SpawnRegistry};
pub use interaction::pointer::{PointerEvent, PointerEventKind};
pub use interaction::state::{InputProfile, InteractionPolicy};
