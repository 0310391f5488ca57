#![forbid(unsafe_code)]

mod attribute;
mod grouping;
mod ids;
mod value;

pub use attribute::DrawableAttribute;
pub use grouping::{GroupKey, Grouping};
pub use ids::{GroupId, TagId};
pub use value::AttrValue;
