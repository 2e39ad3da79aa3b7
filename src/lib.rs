#![allow(dead_code)]
#![allow(warnings)]

pub mod defaults;
pub mod dynamics;
pub mod initialization;
pub mod models;
pub mod output;
pub mod quantum;
pub mod scan;
