use std::fmt;
use std::net::IpAddr;

//------------ NoMeta --------------------------------------------------------

/// Route data for tests that only care about which prefixes are present.
#[derive(Clone, Copy, Hash, PartialEq, Eq)]
pub enum NoMeta {
    Empty,
}

impl fmt::Debug for NoMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("")
    }
}

impl fmt::Display for NoMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NoMeta")
    }
}

//------------ PrefixAs ------------------------------------------------------

/// Route data that holds the origin AS of a prefix.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PrefixAs(pub u32);

impl fmt::Display for PrefixAs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AS{}", self.0)
    }
}

impl From<u32> for PrefixAs {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

//------------ NextHop -------------------------------------------------------

/// Route data describing where to forward traffic for a prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NextHop {
    pub gateway: IpAddr,
    pub interface: String,
}

impl NextHop {
    pub fn new(gateway: IpAddr, interface: &str) -> Self {
        Self {
            gateway,
            interface: interface.to_string(),
        }
    }
}

impl fmt::Display for NextHop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "via {} dev {}", self.gateway, self.interface)
    }
}
