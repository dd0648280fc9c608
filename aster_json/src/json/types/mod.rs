mod array;
mod kind;
mod number;
mod object;
mod read;
mod value;

pub use array::JsonArray;
pub use kind::JsonKind;
pub use object::JsonObject;
pub use read::FromJsonValue;
pub use value::JsonValue;
