#![allow(dead_code)]

include!(concat!(env!("OUT_DIR"), "/storygrid_config.rs"));
