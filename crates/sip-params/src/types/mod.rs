pub mod category;
pub mod category_value;
pub mod commutative_hash;
pub mod extension;
pub mod headers;
pub mod param;
pub mod param_store;
pub mod param_type;
pub mod registry;

pub use category::{ParseState, ParserCategory};
pub use category_value::{CategoryValue, MediaType, Token};
pub use commutative_hash::CommutativeHash;
pub use extension::ExtensionParameter;
pub use headers::HeaderName;
pub use param::{ParamValue, Parameter, QValue};
pub use param_store::ParameterStore;
pub use param_type::{Grammar, ParamType, ParamTypeSet};
