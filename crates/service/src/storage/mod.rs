pub mod json_seed;
