pub mod criteria;
pub mod engine;

pub use criteria::{CategorySelector, FilterCriteria, PriceBracket, SortKey};
pub use engine::{view, view_page};
