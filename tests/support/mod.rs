#![allow(dead_code)]

pub mod settle_harness;
