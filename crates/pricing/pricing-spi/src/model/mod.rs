//! Model module containing data structures

mod arrondissement;
mod arrondissement_price_map;
mod domain;
mod feature_schema;
mod feature_vector;
mod prediction_result;
mod price_decomposition;
mod property;
mod quartile_table;

pub use arrondissement::Arrondissement;
pub use arrondissement_price_map::ArrondissementPriceMap;
pub use domain::{Domain, ModelKind, TargetTransform};
pub use feature_schema::FeatureSchema;
pub use feature_vector::FeatureVector;
pub use prediction_result::PredictionResult;
pub use price_decomposition::PriceDecomposition;
pub use property::{HostAttributes, PropertyDescription, RoomType};
pub use quartile_table::{QuartileBucket, QuartileTable};
