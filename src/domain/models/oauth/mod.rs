pub mod facebook;
