pub mod bezier;
pub mod coordinate;
pub mod path;
pub mod polyline;
pub mod sub_path;
