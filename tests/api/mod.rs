mod bootstrap_tests;
mod cors_tests;
