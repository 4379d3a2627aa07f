use std::fmt;

use hickory_proto::rr::{DNSClass, RData, RecordData, RecordType};

use super::{AsHickory, Name, ttl::TimeToLive};

/// DNS Resource Record synthesized from a registry service
///
/// The record is generic over its rdata so that each builder on
/// [`Service`](crate::Service) can hand back a precisely typed record. Use
/// [`Record::into_record_rdata`] to erase the type into the closed [`RData`]
/// set when assembling a response.
#[derive(Debug, Clone, Eq)]
pub struct Record<R: RecordData = RData> {
    name_labels: Name,
    dns_class: DNSClass,
    ttl: TimeToLive,
    rdata: R,
}

/// Zone-file presentation, as in [RFC 1033](https://tools.ietf.org/html/rfc1033)
///
/// ```text
///           <name>   [<ttl>]   [<class>]   <type>   <data>
/// ```
impl<R: RecordData> fmt::Display for Record<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "{name} {ttl} {class} {ty} {rdata}",
            name = self.name_labels,
            ttl = self.ttl,
            class = self.dns_class,
            ty = self.record_type(),
            rdata = self.rdata,
        )
    }
}

impl<R: RecordData> Record<R> {
    pub fn from_rdata(name: Name, ttl: TimeToLive, rdata: R) -> Self {
        Record {
            name_labels: name,
            dns_class: DNSClass::IN,
            ttl,
            rdata,
        }
    }

    /// Converts the record into a record with generic record data
    pub fn into_record_rdata(self) -> Record<RData> {
        Record {
            name_labels: self.name_labels,
            dns_class: self.dns_class,
            ttl: self.ttl,
            rdata: self.rdata.into_rdata(),
        }
    }

    /// Sets the TTL, in seconds, to the specified value
    pub fn set_ttl(&mut self, ttl: TimeToLive) {
        self.ttl = ttl;
    }
}

impl<R: RecordData> Record<R> {
    /// Label of the record resource
    pub fn name(&self) -> &Name {
        &self.name_labels
    }

    /// DNS Class of the record resource
    pub fn dns_class(&self) -> DNSClass {
        self.dns_class
    }

    /// Time to Live of the record resource
    pub fn ttl(&self) -> TimeToLive {
        self.ttl
    }

    /// Record Data of the record resource
    pub fn rdata(&self) -> &R {
        &self.rdata
    }

    /// Record Type of the record resource
    pub fn record_type(&self) -> RecordType {
        self.rdata.record_type()
    }
}

impl<R: RecordData> PartialEq for Record<R> {
    fn eq(&self, other: &Self) -> bool {
        self.name_labels == other.name_labels
            && self.dns_class == other.dns_class
            && self.rdata == other.rdata
    }
}

impl<R: RecordData> AsHickory for Record<R> {
    type Hickory = hickory_proto::rr::Record<R>;

    fn as_hickory(&self) -> Self::Hickory {
        let mut record = hickory_proto::rr::Record::from_rdata(
            self.name().clone(),
            self.ttl().into(),
            self.rdata().clone(),
        );
        record.set_dns_class(self.dns_class);
        record
    }
}
