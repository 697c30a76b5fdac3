//! Problem selection engine
//!
//! Everything in here is synchronous and side-effect free apart from the
//! random draw:
//!
//! 1. **Normalizer** (`normalizer.rs`): raw catalog + statistics into a
//!    uniform, deduplicated `Problem` set.
//! 2. **Contest names** (`contest_name.rs`): shortened display labels.
//! 3. **Filter** (`filter.rs`): `FilterCriteria` evaluated over a snapshot.
//! 4. **Selector** (`selector.rs`): uniform random draw.
//! 5. **Solved index** (`solved.rs`): accepted problems of one handle.
//! 6. **Sheet** (`sheet.rs`): ordered, deduplicated working set.

pub mod contest_name;
pub mod filter;
pub mod normalizer;
pub mod selector;
pub mod sheet;
pub mod solved;

pub use contest_name::{display_name, format_contest_name};
pub use filter::filter_problems;
pub use normalizer::normalize;
pub use selector::pick;
pub use sheet::Sheet;
pub use solved::SolvedIndex;
