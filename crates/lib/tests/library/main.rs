mod common;
mod properties_tests;
mod rules_tests;
