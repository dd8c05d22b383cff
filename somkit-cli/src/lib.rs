//! A command line interface library: reads datasets and configs, wires interruption handling and
//! runs training and analysis of self-organizing maps built with `somkit`.

#![warn(missing_docs)]

pub mod extensions;
