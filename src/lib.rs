#[macro_use] extern crate log;
extern crate once_cell;
extern crate regex;
extern crate thiserror;

pub mod compiler;
