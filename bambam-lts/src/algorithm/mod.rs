pub mod aggregation;
pub mod classification;
pub mod directional;
pub mod graph_filter;
pub mod imputation;
pub mod normalization;
