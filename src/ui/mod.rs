pub mod panels;
pub mod plot;
pub mod scatter3d;
pub mod table;
