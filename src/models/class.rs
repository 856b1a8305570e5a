//! Legacy address class of an IPv4 address.

use serde::{Serialize, Serializer};

/// Classful network class, decided by the first octet alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpClass {
    A,
    B,
    C,
    D,
    E,
    /// 0 and 127.
    Unknown,
}

impl IpClass {
    pub fn classify(first_octet: u8) -> IpClass {
        match first_octet {
            1..=126 => IpClass::A,
            128..=191 => IpClass::B,
            192..=223 => IpClass::C,
            224..=239 => IpClass::D,
            240..=255 => IpClass::E,
            _ => IpClass::Unknown,
        }
    }

    /// Display label, as shown on the calculator form.
    pub fn label(&self) -> &'static str {
        match self {
            IpClass::A => "Classe A",
            IpClass::B => "Classe B",
            IpClass::C => "Classe C",
            IpClass::D => "Classe D",
            IpClass::E => "Classe E",
            IpClass::Unknown => "Desconhecida",
        }
    }
}

impl std::fmt::Display for IpClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for IpClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}
