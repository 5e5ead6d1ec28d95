
mod config_tests;
