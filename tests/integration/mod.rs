//! Integration tests for the sompack core library packager

mod config_file;
mod packaging;
