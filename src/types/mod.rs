mod attribute_value;
mod dump;
mod item;

pub use attribute_value::AttributeValue;
pub use dump::Dump;
pub use item::Item;
