mod ownership_tests;
mod serialization_tests;
