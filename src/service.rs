//! Registry services and the records synthesized from them.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use hickory_proto::rr::RData;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::rr::{A, AAAA, CNAME, NS, Name, PTR, Record, SRV, TXT, TimeToLive};
use crate::text::{MAX_CHARACTER_STRING, split_character_strings};

/// A service entry as stored in the registry.
///
/// This is the rdata of an SRV record with a twist: `host` is normally a
/// domain name, but it may also be an IPv4 or IPv6 literal. Callers check
/// [`Service::address`] to decide whether to answer with address records or
/// with SRV/CNAME records pointing at the host.
///
/// Zero and empty fields mean "unset", and are omitted when the service is
/// written back to the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub host: String,

    #[serde(skip_serializing_if = "is_unset")]
    pub port: u16,

    #[serde(skip_serializing_if = "is_unset")]
    pub priority: u16,

    #[serde(skip_serializing_if = "is_unset")]
    pub weight: u16,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,

    #[serde(skip_serializing_if = "TimeToLive::is_zero")]
    pub ttl: TimeToLive,

    /// Number of leftmost labels to remove from the SRV target.
    ///
    /// When a service with an IP address as its host is answered with an
    /// SRV record, the target is a name synthesized from the service key.
    /// A non-zero `target_strip` shortens that name.
    #[serde(rename = "targetstrip", skip_serializing_if = "is_unset")]
    pub target_strip: usize,

    /// Services sharing a group are answered together. Empty matches any group.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub group: String,

    /// Registry key this service was read from.
    #[serde(skip)]
    pub key: String,
}

fn is_unset<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

impl Service {
    /// Decode a registry value, remembering the key it was stored under.
    pub fn from_json(key: impl Into<String>, value: &[u8]) -> Result<Self, ServiceError> {
        let key = key.into();
        match serde_json::from_slice::<Service>(value) {
            Ok(service) => Ok(Service { key, ..service }),
            Err(source) => Err(ServiceError::Decode { key, source }),
        }
    }

    /// The host as an IP address, if it is an address literal.
    pub fn address(&self) -> Option<IpAddr> {
        self.host.parse().ok()
    }

    /// The host as a fully qualified name, with its case preserved.
    pub fn host_name(&self) -> Result<Name, ServiceError> {
        let mut name = Name::from_ascii(&self.host).map_err(|source| ServiceError::InvalidHost {
            host: self.host.clone(),
            source,
        })?;
        name.set_fqdn(true);
        Ok(name)
    }

    /// Remove `target_strip` labels from the left of `host`.
    ///
    /// Stripping every label (or more) would leave nothing to point at, so
    /// the full name is returned instead.
    fn strip_target(&self, host: Name) -> Result<Name, ServiceError> {
        if self.target_strip == 0 {
            return Ok(host);
        }

        let labels = host.iter().count();
        if self.target_strip >= labels {
            tracing::trace!(
                %host,
                strip = self.target_strip,
                "target strip overshoots the host name, using the full name"
            );
            return Ok(host);
        }

        let mut target = Name::from_labels(host.iter().skip(self.target_strip)).map_err(
            |source| ServiceError::InvalidHost {
                host: self.host.clone(),
                source,
            },
        )?;
        target.set_fqdn(true);
        Ok(target)
    }

    /// SRV record pointing at this service's host.
    ///
    /// `weight` is taken from the caller rather than from [`Service::weight`],
    /// so that weights can be redistributed across the services in an answer.
    pub fn srv(&self, name: Name, weight: u16) -> Result<Record<SRV>, ServiceError> {
        let target = self.strip_target(self.host_name()?)?;
        Ok(Record::from_rdata(
            name,
            self.ttl,
            SRV::new(self.priority, weight, self.port, target),
        ))
    }

    pub fn a(&self, name: Name, address: Ipv4Addr) -> Record<A> {
        Record::from_rdata(name, self.ttl, A::from(address))
    }

    pub fn aaaa(&self, name: Name, address: Ipv6Addr) -> Record<AAAA> {
        Record::from_rdata(name, self.ttl, AAAA::from(address))
    }

    /// A or AAAA record, depending on the address family.
    pub fn address_record(&self, name: Name, address: IpAddr) -> Record<RData> {
        match address {
            IpAddr::V4(address) => self.a(name, address).into_record_rdata(),
            IpAddr::V6(address) => self.aaaa(name, address).into_record_rdata(),
        }
    }

    pub fn cname(&self, name: Name, target: Name) -> Record<CNAME> {
        Record::from_rdata(name, self.ttl, CNAME(target))
    }

    pub fn ns(&self, name: Name, target: Name) -> Record<NS> {
        Record::from_rdata(name, self.ttl, NS(target))
    }

    /// TXT record carrying [`Service::text`], split into character-strings.
    pub fn txt(&self, name: Name) -> Record<TXT> {
        let strings = split_character_strings(&self.text, MAX_CHARACTER_STRING).collect();
        Record::from_rdata(name, self.ttl, TXT::from_bytes(strings))
    }

    /// PTR record pointing back at this service's host.
    ///
    /// The TTL is supplied by the caller, since a reverse answer is governed
    /// by the reverse entry rather than the forward service.
    pub fn ptr(&self, name: Name, ttl: TimeToLive) -> Result<Record<PTR>, ServiceError> {
        Ok(Record::from_rdata(name, ttl, PTR(self.host_name()?)))
    }
}
