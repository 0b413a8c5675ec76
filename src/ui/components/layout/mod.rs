pub mod footer;
