#![allow(dead_code)]

pub mod task;
pub mod unfiltered;
