//! Hardware-address lookup over an externally supplied interface table.
//!
//! Enumerating the host's interfaces is platform work this crate stays out
//! of. Implement [`InterfaceProvider`] over whatever the operating system
//! reports and the lookups here answer "which hardware address belongs to
//! this name / this IP".

use std::net::IpAddr;

use crate::addr::Address;

/// One network interface as reported by a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    /// Interface name, e.g. `eth0`.
    pub name: String,
    /// The interface's 6-byte hardware address.
    pub hardware_address: Address,
    /// IP addresses bound to the interface.
    pub ip_addresses: Vec<IpAddr>,
}

/// Source of interface records, typically backed by an OS enumerator.
pub trait InterfaceProvider {
    fn interfaces(&self) -> Vec<Interface>;
}

/// Hardware address of the interface named `name`, if the provider knows it.
pub fn address_of<P: InterfaceProvider>(provider: &P, name: &str) -> Option<Address> {
    provider
        .interfaces()
        .into_iter()
        .find(|iface| iface.name == name)
        .map(|iface| iface.hardware_address)
}

/// Hardware address of the interface carrying `ip`, if any.
pub fn address_for_ip<P: InterfaceProvider>(provider: &P, ip: IpAddr) -> Option<Address> {
    provider
        .interfaces()
        .into_iter()
        .find(|iface| iface.ip_addresses.contains(&ip))
        .map(|iface| iface.hardware_address)
}
