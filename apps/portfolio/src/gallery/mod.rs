// Portfolio page core: tag filtering, option navigation, and the selection panel.
// Single-threaded and synchronous; the content fetch happens before `page::mount`.

pub mod cards;
pub mod combobox;
pub mod controller;
pub mod labels;
pub mod page;
pub mod selection;
pub mod visibility;
pub mod vocabulary;

// Re-export the public API consumed by renderers.
pub use combobox::NavKey;
pub use controller::{CardActivation, Chip, PointerTarget, PortfolioController, PortfolioEvent};
pub use page::{mount, DisplayPrefs, RenderTargets};
