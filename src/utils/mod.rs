//! Pure helper logic: the code alphabet, the bijective codec, the seed
//! generator, and small request-level utilities.

pub mod alphabet;
pub mod client_ip;
pub mod codec;
pub mod seed;
pub mod target_url;
