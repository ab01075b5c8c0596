pub mod support;

mod all_pairs;
mod config;
mod errors;
mod shortest;
mod spanning;
mod traverse;
