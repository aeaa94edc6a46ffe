pub mod types;
pub mod hexagon;
pub mod layout;
pub mod section;
pub mod field;
pub mod config;
pub mod application;

pub use field::{HexField, ViewMode};
pub use hexagon::Hexagon;
pub use layout::{GridLayout, InvalidLayoutError};
pub use section::{Cell, CellGeometry, SectionGrid};
pub use types::Point;

const SQRT_3: f64 = 1.7320508075688772935274463415058723669428052538103806280558069794;
