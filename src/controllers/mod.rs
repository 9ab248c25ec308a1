pub mod voyage;
