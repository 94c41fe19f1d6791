// dreamlink-api: Async Rust client for the Dreambox/Enigma2 web control API

pub mod error;
pub mod keymap;
pub mod transport;
pub mod xml;

mod client;

pub use client::{DeviceInfo, DreamboxClient};
pub use error::Error;
pub use transport::TransportConfig;
pub use xml::XmlNode;
