#![allow(dead_code)]

pub mod readings;
