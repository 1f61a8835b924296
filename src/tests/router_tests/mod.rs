mod grid_tests;
mod shoe_tests;
