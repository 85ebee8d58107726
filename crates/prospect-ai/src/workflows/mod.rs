pub mod advisor;
pub mod prospecting;
