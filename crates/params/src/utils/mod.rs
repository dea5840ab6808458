//! Constants shared by the hashing and sampling layers

pub mod hash;
