pub mod advisories;
pub mod distances;
pub mod fares;
pub mod root;
