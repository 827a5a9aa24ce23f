mod add_tests;
mod mul_tests;
