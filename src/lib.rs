//! IEEE 802 MAC address and OUI codec: lenient hex and strict
//! dotted-decimal parsing, multi-dialect formatting, bit-level
//! classification and modular arithmetic over the 48/24-bit address space.

mod addr;
mod error;
mod iface;
mod parsers;

pub use crate::addr::{Address, InputFormat, Style, ADDR_LEN, OUI_LEN};
pub use crate::error::ParseError;
pub use crate::iface::{address_for_ip, address_of, Interface, InterfaceProvider};
