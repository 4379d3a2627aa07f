//! Resource Record Definitions for DNS

mod record;
mod ttl;

pub use self::record::Record;
pub use self::ttl::TimeToLive;

/// DNS Name with case preserved.
///
pub use hickory_proto::rr::Name;

/// Record data for the record types a service can produce.
pub use hickory_proto::rr::rdata::{A, AAAA, CNAME, NS, PTR, SRV, TXT};

/// Trait for converting walnut-registry types to their hickory-dns equivalents
///
/// This trait provides a consistent interface for converting internal types
/// to their hickory-dns counterparts, enabling compatibility with the
/// hickory-dns ecosystem.
pub trait AsHickory {
    /// The corresponding hickory-dns type
    type Hickory;

    /// Convert this type to its hickory-dns equivalent
    ///
    /// # Returns
    ///
    /// A new instance of the hickory-dns equivalent type
    fn as_hickory(&self) -> Self::Hickory;
}
