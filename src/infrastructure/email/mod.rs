pub mod hunter;
