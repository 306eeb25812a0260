//! Entity structs for the three input tables of a survey workbook.

mod observation;
mod reference;
mod survey;
mod transect;

pub use observation::Observation;
pub use reference::ReferenceEntry;
pub use survey::SurveyTables;
pub use transect::{Boundaries, Transect};
