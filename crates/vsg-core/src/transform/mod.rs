pub mod name_normalizer;

pub use name_normalizer::{
    NormalizedName, normalize_name, to_handler_symbol, to_route_pattern, to_type_symbol,
};
