pub mod quadratic;
